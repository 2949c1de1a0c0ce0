use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGenerationConfig {
    pub precision: Option<u32>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileExplainConfig {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
    #[serde(rename = "api-key-env")]
    pub api_key_env: Option<String>,
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub generation: Option<FileGenerationConfig>,
    pub explain: Option<FileExplainConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
