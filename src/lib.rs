//! memo-align - 音声メモのトランスクリプト整列エンジン
//!
//! このクレートは、性質の異なる3つのテキストソース —
//! 音声認識（STT）の単語タイムスタンプ、LLMによるチャプター分割、
//! チャプター本文そのもの — を突き合わせ、時刻でアドレスできる
//! 1本のトークン列に整列するエンジンを提供します。
//! 出力はレンダリング層のクリックシークと時刻同期ハイライトに使われます。
//!
//! # 主な機能
//!
//! - **トークナイザ**: チャプター本文を単語・句読点トークンに分割（元の文字を完全保持）
//! - **シーケンス整列**: LCS差分でチャプター単語とSTT単語を突き合わせてタイムスタンプを移植
//! - **タイムスタンプ補間**: マッチしなかった単語に前後アンカーから合成時刻窓を付与
//! - **現在トークン判定**: 再生時刻からアクティブなトークンを特定（許容値ε付き）
//!
//! # アーキテクチャ
//!
//! ```text
//! [Chapter]          [WordTimestamp]
//!     │                    │
//! [Tokenizer]        [時間窓選択]
//!     │                    │
//!     └───→ [Aligner] ←────┘
//!               │
//!        [Interpolator]
//!               │
//!        [AlignedToken 列] ──→ [Locator] ──→ アクティブトークン
//! ```
//!
//! # 設計方針
//!
//! エンジン全体が純粋・同期・決定的な計算で、入力の形によって
//! エラーを投げることはありません。マッチしない単語や空入力は
//! 「時刻なしトークン」という劣化モードに吸収されます。
//!
//! # 使用例
//!
//! ```
//! use memo_align::config::AlignConfig;
//! use memo_align::engine::align_transcript;
//! use memo_align::types::{Chapter, WordTimestamp};
//!
//! let chapters = vec![Chapter {
//!     title: "Greeting".to_string(),
//!     sentences: vec!["Hello, world.".to_string()],
//!     start_time: 0.0,
//!     end_time: 1.0,
//! }];
//! let words = vec![
//!     WordTimestamp { word: "hello".to_string(), start_time: 0.0, end_time: 0.4 },
//!     WordTimestamp { word: "world".to_string(), start_time: 0.5, end_time: 0.9 },
//! ];
//!
//! let aligned = align_transcript(&chapters, &words, &AlignConfig::default());
//! assert_eq!(aligned[0].tokens.len(), 4);
//! ```

pub mod aligner;
pub mod config;
pub mod diff;
pub mod engine;
pub mod interpolator;
pub mod locator;
pub mod tokenizer;
pub mod types;
