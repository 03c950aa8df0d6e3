use crate::diff::{diff_words, DiffOp};
use crate::tokenizer::normalize_word;
use crate::types::{Chapter, Seconds, WordTimestamp};

/// チャプターの時間窓に入る単語タイムスタンプを選択する
///
/// チャプターの概算開始・終了時刻に前後バッファを加えた範囲
/// `[start_time - buffer, end_time + buffer]` に発話開始が含まれる
/// 単語を返す。チャプター境界はLLM側の概算値なので、
/// バッファでずれを許容する。
///
/// # Arguments
///
/// * `words` - 時系列順の単語タイムスタンプ全体
/// * `chapter` - 対象チャプター
/// * `buffer_secs` - 境界バッファ（秒）
pub fn window_words<'a>(
    words: &'a [WordTimestamp],
    chapter: &Chapter,
    buffer_secs: f64,
) -> Vec<&'a WordTimestamp> {
    let window_start = chapter.start_time - buffer_secs;
    let window_end = chapter.end_time + buffer_secs;

    words
        .iter()
        .filter(|w| w.start_time >= window_start && w.start_time <= window_end)
        .collect()
}

/// チャプター単語列に音声認識のタイムスタンプを移植する
///
/// 正規化済みのチャプター単語列と音声認識の単語列を
/// LCSベースの差分で整列し、一致した区間の `(start, end)` を
/// チャプター側の単語位置に1対1で移す。
///
/// - 両方に存在する区間 → タイムスタンプを移植
/// - チャプター側にのみ存在する区間 → 時刻なしのまま残す
///   （音声認識が聞き逃した、または言い回しが違う単語）
/// - 音声認識側にのみ存在する区間 → 読み捨てる
///
/// 戻り値はチャプター単語位置ごとの `Option<(start, end)>`。
/// どちらかの列が空なら全要素 None（エラーにはしない）。
pub fn align_words(
    chapter_words: &[String],
    speech_words: &[&WordTimestamp],
) -> Vec<Option<(Seconds, Seconds)>> {
    let mut mapping = vec![None; chapter_words.len()];
    if chapter_words.is_empty() || speech_words.is_empty() {
        return mapping;
    }

    let normalized_chapter: Vec<String> =
        chapter_words.iter().map(|w| normalize_word(w)).collect();
    let normalized_speech: Vec<String> = speech_words
        .iter()
        .map(|w| normalize_word(&w.word))
        .collect();

    let ops = diff_words(&normalized_chapter, &normalized_speech);

    let mut matched = 0usize;
    for op in &ops {
        if let DiffOp::Equal {
            a_start,
            b_start,
            len,
        } = op
        {
            for k in 0..*len {
                let speech = speech_words[b_start + k];
                mapping[a_start + k] = Some((speech.start_time, speech.end_time));
                matched += 1;
            }
        }
    }

    log::debug!(
        "単語整列: チャプター側 {} 語中 {} 語にタイムスタンプを移植 (音声認識側 {} 語)",
        chapter_words.len(),
        matched,
        speech_words.len()
    );

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> WordTimestamp {
        WordTimestamp {
            word: text.to_string(),
            start_time: start,
            end_time: end,
        }
    }

    fn chapter(start: f64, end: f64) -> Chapter {
        Chapter {
            title: "テスト".to_string(),
            sentences: vec![],
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn test_window_includes_buffer() {
        let words = vec![
            word("before", 0.5, 0.9),
            word("inside", 3.0, 3.4),
            word("after", 8.5, 8.9),
        ];
        let chapter = chapter(2.0, 7.0);

        // バッファ2秒: [0.0, 9.0] に発話開始が入る単語を選択
        let selected = window_words(&words, &chapter, 2.0);
        assert_eq!(selected.len(), 3);

        // バッファなし: チャプター範囲内のみ
        let selected = window_words(&words, &chapter, 0.0);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].word, "inside");
    }

    #[test]
    fn test_window_empty_input() {
        let chapter = chapter(0.0, 10.0);
        assert!(window_words(&[], &chapter, 2.0).is_empty());
    }

    #[test]
    fn test_align_exact_match() {
        let speech = [word("hello", 0.0, 0.4), word("world", 0.5, 0.9)];
        let speech_refs: Vec<&WordTimestamp> = speech.iter().collect();
        let chapter_words = vec!["hello".to_string(), "world".to_string()];

        let mapping = align_words(&chapter_words, &speech_refs);
        assert_eq!(mapping, vec![Some((0.0, 0.4)), Some((0.5, 0.9))]);
    }

    #[test]
    fn test_align_normalizes_case_and_punctuation() {
        // チャプター側は句読点・大文字付き、音声認識側は素の単語
        let speech = [word("hello", 0.0, 0.4), word("world", 0.5, 0.9)];
        let speech_refs: Vec<&WordTimestamp> = speech.iter().collect();
        let chapter_words = vec!["Hello,".to_string(), "World!".to_string()];

        let mapping = align_words(&chapter_words, &speech_refs);
        assert_eq!(mapping, vec![Some((0.0, 0.4)), Some((0.5, 0.9))]);
    }

    #[test]
    fn test_align_chapter_only_word_stays_untimed() {
        // "there" は音声認識側に存在しない
        let speech = [word("hello", 0.0, 0.4), word("world", 1.0, 1.4)];
        let speech_refs: Vec<&WordTimestamp> = speech.iter().collect();
        let chapter_words = vec![
            "hello".to_string(),
            "there".to_string(),
            "world".to_string(),
        ];

        let mapping = align_words(&chapter_words, &speech_refs);
        assert_eq!(
            mapping,
            vec![Some((0.0, 0.4)), None, Some((1.0, 1.4))]
        );
    }

    #[test]
    fn test_align_speech_only_word_is_consumed() {
        // 音声認識側のフィラー "uh" は読み捨てられる
        let speech = [
            word("hello", 0.0, 0.4),
            word("uh", 0.5, 0.7),
            word("world", 0.8, 1.2),
        ];
        let speech_refs: Vec<&WordTimestamp> = speech.iter().collect();
        let chapter_words = vec!["hello".to_string(), "world".to_string()];

        let mapping = align_words(&chapter_words, &speech_refs);
        assert_eq!(mapping, vec![Some((0.0, 0.4)), Some((0.8, 1.2))]);
    }

    #[test]
    fn test_align_empty_sequences() {
        let mapping = align_words(&[], &[]);
        assert!(mapping.is_empty());

        let chapter_words = vec!["hello".to_string()];
        let mapping = align_words(&chapter_words, &[]);
        assert_eq!(mapping, vec![None]);
    }
}
