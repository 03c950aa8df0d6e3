use serde::{Deserialize, Serialize};

/// 時刻表現の型（秒）
///
/// 音声認識エンジンと再生クロックの双方で使用する時刻の型エイリアス。
/// 音声メモの先頭を 0.0 とした経過秒数を表す。
pub type Seconds = f64;

/// 単語タイムスタンプ
///
/// 外部の音声認識（STT）サービスが出力する単語単位のタイムスタンプ。
/// 時系列順に並んでいることを前提とする。
/// 句読点を含まない単語のみの場合がある。
///
/// # JSON入力例
///
/// ```json
/// { "word": "hello", "start_time": 0.0, "end_time": 0.4 }
/// ```
///
/// # Examples
///
/// ```
/// # use memo_align::types::WordTimestamp;
/// let word = WordTimestamp {
///     word: "hello".to_string(),
///     start_time: 0.0,
///     end_time: 0.4,
/// };
/// assert!(word.end_time > word.start_time);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WordTimestamp {
    /// 認識された単語
    pub word: String,

    /// 発話開始時刻（秒）
    pub start_time: Seconds,

    /// 発話終了時刻（秒）
    pub end_time: Seconds,
}

/// チャプター
///
/// 外部のテキスト分割（LLM）サービスが出力するトピック単位のまとまり。
/// 文は句読点や大文字小文字を含むが、単語単位のタイムスタンプは持たない。
///
/// # JSON入力例
///
/// ```json
/// {
///   "title": "自己紹介",
///   "sentences": ["Hello, world.", "Nice to meet you."],
///   "start_time": 0.0,
///   "end_time": 5.2
/// }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Chapter {
    /// チャプターのタイトル
    pub title: String,

    /// チャプターを構成する文の配列
    pub sentences: Vec<String>,

    /// チャプターの概算開始時刻（秒）
    pub start_time: Seconds,

    /// チャプターの概算終了時刻（秒）
    pub end_time: Seconds,
}

impl Chapter {
    /// チャプター全文を結合して返す
    ///
    /// 文をスペース区切りで連結する。トークナイズの入力になる。
    pub fn full_text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// 整列済みトークン
///
/// エンジンの出力単位。単語または句読点のテキスト片に、
/// 任意の時刻窓 `[start, end)` を付与したもの。
///
/// - 句読点トークンは時刻を持たない
/// - 単語トークンも、マッチせず補間もできなかった場合は時刻を持たない
///   （クリック・ハイライト不可の劣化モード。エラーではない）
///
/// # JSON出力例
///
/// ```json
/// { "text": "hello", "start": 0.0, "end": 0.4, "is_punctuation": false }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AlignedToken {
    /// トークンのテキスト（元の文字を完全に保持）
    pub text: String,

    /// 時刻窓の開始（秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Seconds>,

    /// 時刻窓の終了（秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Seconds>,

    /// 句読点トークンかどうか
    pub is_punctuation: bool,
}

impl AlignedToken {
    /// 時刻なしの単語トークンを作成
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: None,
            end: None,
            is_punctuation: false,
        }
    }

    /// 句読点トークンを作成
    ///
    /// 句読点は時刻を持たない。
    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: None,
            end: None,
            is_punctuation: true,
        }
    }

    /// 時刻付きの単語トークンを作成
    pub fn timed_word(text: impl Into<String>, start: Seconds, end: Seconds) -> Self {
        Self {
            text: text.into(),
            start: Some(start),
            end: Some(end),
            is_punctuation: false,
        }
    }

    /// 時刻窓を持っているかどうか
    ///
    /// start と end の両方が揃っている場合のみ true。
    pub fn has_timing(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// 整列済みチャプター
///
/// 1チャプター分の整列結果。レンダリング層が
/// クリックシークと時刻同期ハイライトに使用する。
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AlignedChapter {
    /// チャプターのタイトル
    pub title: String,

    /// 整列済みトークンの配列（チャプター本文の順）
    pub tokens: Vec<AlignedToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_full_text() {
        let chapter = Chapter {
            title: "テスト".to_string(),
            sentences: vec!["Hello, world.".to_string(), "Bye.".to_string()],
            start_time: 0.0,
            end_time: 3.0,
        };
        assert_eq!(chapter.full_text(), "Hello, world. Bye.");
    }

    #[test]
    fn test_chapter_full_text_empty() {
        let chapter = Chapter {
            title: "空".to_string(),
            sentences: vec![],
            start_time: 0.0,
            end_time: 0.0,
        };
        assert_eq!(chapter.full_text(), "");
    }

    #[test]
    fn test_aligned_token_constructors() {
        let word = AlignedToken::word("hello");
        assert!(!word.is_punctuation);
        assert!(!word.has_timing());

        let punct = AlignedToken::punctuation(",");
        assert!(punct.is_punctuation);
        assert!(punct.start.is_none());

        let timed = AlignedToken::timed_word("hello", 0.0, 0.4);
        assert!(timed.has_timing());
        assert_eq!(timed.start, Some(0.0));
        assert_eq!(timed.end, Some(0.4));
    }

    #[test]
    fn test_has_timing_requires_both() {
        let mut token = AlignedToken::word("hello");
        token.start = Some(1.0);
        // end がない場合は時刻なし扱い
        assert!(!token.has_timing());
    }

    #[test]
    fn test_word_timestamp_json_roundtrip() {
        let json = r#"{"word":"hello","start_time":0.0,"end_time":0.4}"#;
        let word: WordTimestamp = serde_json::from_str(json).unwrap();
        assert_eq!(word.word, "hello");
        assert_eq!(word.start_time, 0.0);
        assert_eq!(word.end_time, 0.4);

        let serialized = serde_json::to_string(&word).unwrap();
        let reparsed: WordTimestamp = serde_json::from_str(&serialized).unwrap();
        assert_eq!(word, reparsed);
    }

    #[test]
    fn test_aligned_token_json_skips_missing_times() {
        let token = AlignedToken::punctuation(",");
        let json = serde_json::to_string(&token).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        // 時刻なしトークンは start/end を出力しない
        assert!(parsed.get("start").is_none());
        assert!(parsed.get("end").is_none());
        assert_eq!(parsed["is_punctuation"], true);
    }

    #[test]
    fn test_chapter_json_parse() {
        let json = r#"{
            "title": "Intro",
            "sentences": ["Hello, world."],
            "start_time": 0.0,
            "end_time": 2.5
        }"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.title, "Intro");
        assert_eq!(chapter.sentences.len(), 1);
        assert_eq!(chapter.end_time, 2.5);
    }
}
