use crate::config::LocatorConfig;
use crate::types::{AlignedToken, Seconds};

/// 再生時刻に対してトークンがアクティブかどうかを判定する
///
/// 半開区間 `[start - ε, end - ε)` に再生時刻が入る場合に true。
/// ε は再生クロックと音声認識タイムスタンプの精度差を吸収する許容値。
///
/// 句読点トークンと時刻なしトークンは常に false。
/// 隣接する時刻窓は重ならないように構築されるため
/// （整列・補間の構成による保証）、単調増加する再生時刻に対して
/// アクティブな単語トークンは常に高々1個になる。
///
/// 状態を持たない純粋な判定関数で、再生フレームごとに呼ばれる想定。
///
/// # Examples
///
/// ```
/// # use memo_align::config::LocatorConfig;
/// # use memo_align::locator::is_token_active;
/// # use memo_align::types::AlignedToken;
/// let token = AlignedToken::timed_word("hello", 1.0, 1.5);
/// let config = LocatorConfig::default();
/// assert!(is_token_active(&token, 1.2, &config));
/// assert!(!is_token_active(&token, 2.0, &config));
/// ```
pub fn is_token_active(token: &AlignedToken, time: Seconds, config: &LocatorConfig) -> bool {
    if token.is_punctuation {
        return false;
    }
    let (start, end) = match (token.start, token.end) {
        (Some(start), Some(end)) => (start, end),
        _ => return false,
    };
    let epsilon = config.epsilon_secs;
    time >= start - epsilon && time < end - epsilon
}

/// 再生時刻に対応するアクティブトークンの位置を返す
///
/// トークン列を先頭から走査して最初にアクティブと判定された
/// 位置を返す。該当なしの場合は None
/// （単語間の無音区間や、時刻なしトークンの上にいる場合）。
///
/// 時刻窓が重ならない前提では、単調増加する再生時刻に対して
/// 戻り値の位置が後退することはない。
pub fn active_token_index(
    tokens: &[AlignedToken],
    time: Seconds,
    config: &LocatorConfig,
) -> Option<usize> {
    tokens
        .iter()
        .position(|token| is_token_active(token, time, config))
}
