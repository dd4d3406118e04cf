use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use seqset_merge::ReportConfig;

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "seqset.toml";

/// Top-level configuration for the `seqset` binary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub input: InputConfig,
    pub report: ReportConfig,
}

/// How `pairs` input files are parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Separator between sequence and name.
    pub delimiter: String,
    /// Lines starting with this prefix are skipped.
    pub comment_prefix: String,
    /// Strip surrounding whitespace from both fields.
    pub trim: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: "\t".into(),
            comment_prefix: "#".into(),
            trim: true,
        }
    }
}

impl CliConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `./seqset.toml` is used if
    /// present and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.input.delimiter.is_empty() {
            anyhow::bail!("input.delimiter must not be empty");
        }
        Ok(config)
    }
}
