//! JSON runtime configuration for the demo tools.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact destinations; every output is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub gray_image: Option<PathBuf>,
    pub equalized_image: Option<PathBuf>,
    pub stretched_image: Option<PathBuf>,
    pub montage_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    /// Banner title printed by the demos.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_contrast_level")]
    pub contrast_level: f32,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_contrast_level() -> f32 {
    1.5
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
