use crate::config::InterpolationConfig;
use crate::types::AlignedToken;

/// 時刻なしの単語トークンに合成タイムスタンプを与える
///
/// 整列後も時刻を持たない単語トークンについて、前方向に最も近い
/// `end` 既知の単語と、後方向に最も近い `start` 既知の単語を探し、
/// その間に収まる時刻窓を合成する。
///
/// - 前後とも見つかった場合:
///   `start = prev_end + offset`、
///   `end = start + min((next_start - start) / 2, max_duration)`
/// - 前のみ: `start = prev_end + offset`、`end = start + max_duration`
/// - 後のみ: `end = next_start - offset`、`start = max(0, end - max_duration)`
/// - どちらもない場合: 時刻なしのまま残す
///   （クリック・ハイライト不可の劣化モード）
///
/// 先頭から順に処理するため、補間済みのトークンも後続の探索では
/// アンカーとして扱われる。これにより連続する複数の未整列トークンが
/// 単調増加かつ重ならない時刻窓を受け取る。
///
/// # Examples
///
/// ```
/// # use memo_align::config::InterpolationConfig;
/// # use memo_align::interpolator::interpolate_timestamps;
/// # use memo_align::types::AlignedToken;
/// let mut tokens = vec![
///     AlignedToken::timed_word("hello", 0.0, 0.4),
///     AlignedToken::word("there"),
///     AlignedToken::timed_word("world", 1.0, 1.4),
/// ];
/// interpolate_timestamps(&mut tokens, &InterpolationConfig::default());
///
/// // "there" は両隣のアンカーの間に合成窓を受け取る (0.45 〜 約0.725)
/// assert!(tokens[1].has_timing());
/// assert!((tokens[1].start.unwrap() - 0.45).abs() < 1e-9);
/// assert!((tokens[1].end.unwrap() - 0.725).abs() < 1e-9);
/// ```
pub fn interpolate_timestamps(tokens: &mut [AlignedToken], config: &InterpolationConfig) {
    for i in 0..tokens.len() {
        if tokens[i].is_punctuation || tokens[i].has_timing() {
            continue;
        }

        let prev_end = tokens[..i]
            .iter()
            .rev()
            .find(|t| !t.is_punctuation && t.has_timing())
            .and_then(|t| t.end);
        let next_start = tokens[i + 1..]
            .iter()
            .find(|t| !t.is_punctuation && t.has_timing())
            .and_then(|t| t.start);

        match (prev_end, next_start) {
            (Some(prev_end), Some(next_start)) => {
                // アンカー間の間隔がオフセットより狭い場合に備えて
                // start が次のアンカーを越えないように抑える
                let start = (prev_end + config.offset_secs).min(next_start);
                let duration = ((next_start - start) / 2.0)
                    .min(config.max_duration_secs)
                    .max(0.0);
                tokens[i].start = Some(start);
                tokens[i].end = Some(start + duration);
            }
            (Some(prev_end), None) => {
                let start = prev_end + config.offset_secs;
                tokens[i].start = Some(start);
                tokens[i].end = Some(start + config.max_duration_secs);
            }
            (None, Some(next_start)) => {
                let end = (next_start - config.offset_secs).max(0.0);
                tokens[i].start = Some((end - config.max_duration_secs).max(0.0));
                tokens[i].end = Some(end);
            }
            // アンカーが全くない場合は時刻なしのまま
            (None, None) => {}
        }
    }
}
