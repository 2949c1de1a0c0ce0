use std::time::Duration;
use voidscope::engine::config::GenerationConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplainConfig {
    pub model: String,
    pub endpoint: String,
    /// `None` means no credential was configured; explanations fall back to
    /// the built-in summaries.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub explain: ExplainConfig,
}
