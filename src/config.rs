use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub video: VideoConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VideoConfig {
    /// 入力動画
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// 出力動画
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// 出力コーデック (4文字)
    #[serde(default = "default_fourcc")]
    pub fourcc: String,
}

fn default_input_path() -> String { "sample.mp4".to_string() }
fn default_output_path() -> String { "output_pose_overlay.mp4".to_string() }
fn default_fourcc() -> String { "mp4v".to_string() }

impl VideoConfig {
    /// fourcc をちょうど4文字に分解
    pub fn fourcc_chars(&self) -> Result<[char; 4]> {
        let chars: Vec<char> = self.fourcc.chars().collect();
        match chars.as_slice() {
            &[a, b, c, d] => Ok([a, b, c, d]),
            _ => bail!("fourcc must be 4 characters: {:?}", self.fourcc),
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            fourcc: default_fourcc(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// ONNXモデルのパス
    #[serde(default = "default_model_path")]
    pub path: String,
    #[serde(default = "default_input_name")]
    pub input_name: String,
    /// ランドマーク出力テンソル名
    #[serde(default = "default_landmarks_output")]
    pub landmarks_output: String,
    /// 人物存在スコアの出力テンソル名
    #[serde(default = "default_presence_output")]
    pub presence_output: String,
    /// これ未満なら人物なしとみなす
    #[serde(default = "default_presence_threshold")]
    pub presence_threshold: f32,
}

fn default_model_path() -> String { "models/pose_landmark_full.onnx".to_string() }
fn default_input_name() -> String { "input_1".to_string() }
fn default_landmarks_output() -> String { "Identity".to_string() }
fn default_presence_output() -> String { "Identity_1".to_string() }
fn default_presence_threshold() -> f32 { 0.5 }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            input_name: default_input_name(),
            landmarks_output: default_landmarks_output(),
            presence_output: default_presence_output(),
            presence_threshold: default_presence_threshold(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    /// 進捗を報告するフレーム間隔（0で無効）
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_progress_interval() -> u64 { 30 }

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            progress_interval: default_progress_interval(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// ログファイルの出力先ディレクトリ
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_dir() -> String { "logs".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self { dir: default_log_dir() }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// ファイルが無ければデフォルト値。読めるが壊れている場合はエラー
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
