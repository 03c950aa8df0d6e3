use crate::aligner::{align_words, window_words};
use crate::config::AlignConfig;
use crate::interpolator::interpolate_timestamps;
use crate::tokenizer::tokenize;
use crate::types::{AlignedChapter, AlignedToken, Chapter, WordTimestamp};

/// 1チャプター分のトークン整列を実行する
///
/// 処理の流れ:
///
/// 1. チャプター全文を単語・句読点トークンに分割
/// 2. チャプターの時間窓（±バッファ）内の単語タイムスタンプを選択
/// 3. LCS差分で整列し、一致した単語にタイムスタンプを移植
/// 4. 残った時刻なし単語トークンを補間
///
/// 純粋な同期計算で、同じ入力に対して常に同じ出力を返す。
/// どのような入力でもエラーにはならない。最悪でも
/// 時刻なしトークンが増えるだけの劣化モードに収まる。
///
/// # Examples
///
/// ```
/// # use memo_align::config::AlignConfig;
/// # use memo_align::engine::align_chapter;
/// # use memo_align::types::{Chapter, WordTimestamp};
/// let chapter = Chapter {
///     title: "Greeting".to_string(),
///     sentences: vec!["Hello, world.".to_string()],
///     start_time: 0.0,
///     end_time: 1.0,
/// };
/// let words = vec![
///     WordTimestamp { word: "hello".to_string(), start_time: 0.0, end_time: 0.4 },
///     WordTimestamp { word: "world".to_string(), start_time: 0.5, end_time: 0.9 },
/// ];
/// let aligned = align_chapter(&chapter, &words, &AlignConfig::default());
/// assert_eq!(aligned.tokens.len(), 4); // hello , world .
/// assert!(aligned.tokens[0].has_timing());
/// ```
pub fn align_chapter(
    chapter: &Chapter,
    words: &[WordTimestamp],
    config: &AlignConfig,
) -> AlignedChapter {
    let text_tokens = tokenize(&chapter.full_text());

    // 単語トークンのみ抽出して整列対象にする
    let word_positions: Vec<usize> = text_tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_punctuation)
        .map(|(i, _)| i)
        .collect();
    let chapter_words: Vec<String> = word_positions
        .iter()
        .map(|&i| text_tokens[i].text.clone())
        .collect();

    let windowed = window_words(words, chapter, config.window.time_buffer_secs);
    if windowed.is_empty() && !chapter_words.is_empty() {
        log::warn!(
            "チャプター \"{}\" の時間窓 [{:.2}, {:.2}] に単語タイムスタンプがありません",
            chapter.title,
            chapter.start_time,
            chapter.end_time
        );
    }

    let mapping = align_words(&chapter_words, &windowed);

    let mut tokens: Vec<AlignedToken> = text_tokens
        .iter()
        .map(|t| {
            if t.is_punctuation {
                AlignedToken::punctuation(t.text.clone())
            } else {
                AlignedToken::word(t.text.clone())
            }
        })
        .collect();

    for (word_index, &token_index) in word_positions.iter().enumerate() {
        if let Some((start, end)) = mapping[word_index] {
            tokens[token_index].start = Some(start);
            tokens[token_index].end = Some(end);
        }
    }

    interpolate_timestamps(&mut tokens, &config.interpolation);

    log::debug!(
        "チャプター \"{}\": トークン {} 個 (うち時刻付き {} 個)",
        chapter.title,
        tokens.len(),
        tokens.iter().filter(|t| t.has_timing()).count()
    );

    AlignedChapter {
        title: chapter.title.clone(),
        tokens,
    }
}

/// 全チャプターのトークン整列を実行する
///
/// チャプター単位で `align_chapter` を呼び出す。
/// チャプター集合または単語タイムスタンプが変わるたびに
/// 再計算される前提の導出データであり、永続化はしない。
pub fn align_transcript(
    chapters: &[Chapter],
    words: &[WordTimestamp],
    config: &AlignConfig,
) -> Vec<AlignedChapter> {
    chapters
        .iter()
        .map(|chapter| align_chapter(chapter, words, config))
        .collect()
}
