use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 整列エンジン設定
///
/// トークン整列の各段階で使用するパラメータをまとめた設定。
/// TOML形式の設定ファイルから読み込むか、デフォルト値を使用する。
///
/// # 設定ファイル例
///
/// ```toml
/// [window]
/// time_buffer_secs = 2.0
///
/// [interpolation]
/// offset_secs = 0.05
/// max_duration_secs = 0.5
///
/// [locator]
/// epsilon_secs = 0.01
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlignConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub interpolation: InterpolationConfig,
    #[serde(default)]
    pub locator: LocatorConfig,
}

/// 時間窓設定
///
/// チャプターの概算時刻から単語タイムスタンプを選択する際の設定。
///
/// # デフォルト値
///
/// - `time_buffer_secs`: 2.0 秒（チャプター境界のずれを許容するバッファ）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_time_buffer_secs")]
    pub time_buffer_secs: f64,
}

/// タイムスタンプ補間設定
///
/// マッチしなかった単語トークンに合成時刻を与える際の設定。
/// オフセットと上限は元実装から引き継いだ経験的な値であり、
/// 根拠のある定数ではないため設定項目にしている。
///
/// # デフォルト値
///
/// - `offset_secs`: 0.05 秒（前後のアンカーから離すオフセット）
/// - `max_duration_secs`: 0.5 秒（合成する時刻窓の最大長）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterpolationConfig {
    #[serde(default = "default_offset_secs")]
    pub offset_secs: f64,
    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: f64,
}

/// 現在トークン判定設定
///
/// 再生時刻からアクティブなトークンを判定する際の設定。
///
/// # デフォルト値
///
/// - `epsilon_secs`: 0.01 秒（再生クロックとSTT時刻の精度差を吸収する許容値）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocatorConfig {
    #[serde(default = "default_epsilon_secs")]
    pub epsilon_secs: f64,
}

// Default functions
fn default_time_buffer_secs() -> f64 {
    2.0 // チャプター境界のドリフト許容
}

fn default_offset_secs() -> f64 {
    0.05
}

fn default_max_duration_secs() -> f64 {
    0.5
}

fn default_epsilon_secs() -> f64 {
    0.01
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            interpolation: InterpolationConfig::default(),
            locator: LocatorConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            time_buffer_secs: default_time_buffer_secs(),
        }
    }
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            offset_secs: default_offset_secs(),
            max_duration_secs: default_max_duration_secs(),
        }
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            epsilon_secs: default_epsilon_secs(),
        }
    }
}

impl AlignConfig {
    /// 設定ファイルから読み込み
    ///
    /// TOML形式の設定ファイルをパースしてAlignConfig構造体を生成する。
    /// 不正な値（負のオフセットなど）はデフォルト値に戻される。
    ///
    /// # Arguments
    ///
    /// * `path` - 設定ファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはパースに失敗した場合にエラーを返す。
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use memo_align::config::AlignConfig;
    /// let config = AlignConfig::from_file("align.toml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("設定ファイルの読み込みに失敗: {:?}", path.as_ref()))?;
        let config: AlignConfig =
            toml::from_str(&content).with_context(|| "設定ファイルのパースに失敗")?;
        Ok(config.sanitized())
    }

    /// デフォルト設定をファイルに書き出し
    ///
    /// デフォルト値を持つ設定ファイルを生成する。
    /// 既存のファイルは上書きされる。
    ///
    /// # Arguments
    ///
    /// * `path` - 出力先のパス
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す。
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use memo_align::config::AlignConfig;
    /// AlignConfig::write_default("align.toml").unwrap();
    /// ```
    pub fn write_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = AlignConfig::default();
        let content =
            toml::to_string_pretty(&config).with_context(|| "設定のシリアライズに失敗")?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("設定ファイルの書き込みに失敗: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// 設定ファイルがあれば読み込み、なければデフォルトを使用
    ///
    /// 設定ファイルの存在を確認し、存在する場合は読み込み、
    /// 存在しない場合はデフォルト設定を返す。
    ///
    /// # Arguments
    ///
    /// * `path` - 設定ファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルが存在するがパースに失敗した場合にエラーを返す。
    /// ファイルが存在しない場合はエラーにならず、デフォルト設定を返す。
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use memo_align::config::AlignConfig;
    /// let config = AlignConfig::load_or_default("align.toml").unwrap();
    /// ```
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            log::warn!(
                "設定ファイルが見つかりません。デフォルト設定を使用します: {:?}",
                path.as_ref()
            );
            Ok(Self::default())
        }
    }

    /// 不正な値をデフォルトに戻す
    ///
    /// 補間や判定が破綻する値（負のオフセット、ゼロ以下の窓長など）を
    /// デフォルト値に置き換える。置き換えた場合は warn ログを出す。
    fn sanitized(mut self) -> Self {
        if self.window.time_buffer_secs < 0.0 {
            log::warn!(
                "time_buffer_secs が負値 ({}) のためデフォルト値を使用します",
                self.window.time_buffer_secs
            );
            self.window.time_buffer_secs = default_time_buffer_secs();
        }
        if self.interpolation.offset_secs < 0.0 {
            log::warn!(
                "offset_secs が負値 ({}) のためデフォルト値を使用します",
                self.interpolation.offset_secs
            );
            self.interpolation.offset_secs = default_offset_secs();
        }
        if self.interpolation.max_duration_secs <= 0.0 {
            log::warn!(
                "max_duration_secs が不正 ({}) のためデフォルト値を使用します",
                self.interpolation.max_duration_secs
            );
            self.interpolation.max_duration_secs = default_max_duration_secs();
        }
        if self.locator.epsilon_secs < 0.0 {
            log::warn!(
                "epsilon_secs が負値 ({}) のためデフォルト値を使用します",
                self.locator.epsilon_secs
            );
            self.locator.epsilon_secs = default_epsilon_secs();
        }
        self
    }
}
