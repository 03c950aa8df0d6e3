mod aligner;
mod config;
mod diff;
mod engine;
mod interpolator;
mod tokenizer;
mod types;

use anyhow::{Context, Result};
use config::AlignConfig;
use engine::align_transcript;
use env_logger::Env;
use std::fs;
use types::{Chapter, WordTimestamp};

fn main() -> Result<()> {
    // ロガーを初期化
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // コマンドライン引数をパース
    let args: Vec<String> = std::env::args().collect();

    // 設定ファイル生成モード
    if args.len() > 1 && args[1] == "--generate-config" {
        let config_path = if args.len() > 2 {
            &args[2]
        } else {
            "align.toml"
        };
        AlignConfig::write_default(config_path)?;
        println!("設定ファイルを生成しました: {}", config_path);
        return Ok(());
    }

    if args.len() < 3 {
        eprintln!("使い方: {} <words.json> <chapters.json> [align.toml]", args[0]);
        eprintln!("       {} --generate-config [align.toml]", args[0]);
        std::process::exit(2);
    }

    let words_path = &args[1];
    let chapters_path = &args[2];
    let config_path = if args.len() > 3 {
        args[3].as_str()
    } else {
        "align.toml"
    };

    // 設定を読み込み
    let config = AlignConfig::load_or_default(config_path)?;

    // 入力を読み込み
    let words: Vec<WordTimestamp> = read_json(words_path)
        .with_context(|| format!("単語タイムスタンプの読み込みに失敗: {}", words_path))?;
    let chapters: Vec<Chapter> = read_json(chapters_path)
        .with_context(|| format!("チャプターの読み込みに失敗: {}", chapters_path))?;

    log::info!(
        "整列を開始します: チャプター {} 個, 単語タイムスタンプ {} 個",
        chapters.len(),
        words.len()
    );

    // 整列を実行してチャプター毎にJSONを出力
    let aligned = align_transcript(&chapters, &words, &config);
    for aligned_chapter in &aligned {
        let json = serde_json::to_string(aligned_chapter)
            .with_context(|| "整列結果のシリアライズに失敗")?;
        println!("{}", json);
    }

    log::info!("整列が完了しました: チャプター {} 個", aligned.len());

    Ok(())
}

/// JSONファイルを読み込んでデシリアライズする
fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("ファイルの読み込みに失敗: {}", path))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("JSONのパースに失敗: {}", path))?;
    Ok(value)
}
