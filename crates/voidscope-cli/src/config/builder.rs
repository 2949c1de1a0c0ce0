use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, ExplainConfig};
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use voidscope::engine::config::GenerationConfigBuilder;
use voidscope::engine::error::EngineError;

/// Builds the configuration from CLI arguments, the config file (explicit or
/// the per-user default), and the process environment.
pub fn build_config(args: &ConfigArgs, model_override: Option<&str>) -> Result<AppConfig> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => default_config_path().filter(|path| path.exists()),
    };
    build_config_from(config_path.as_deref(), args, model_override, |name| {
        std::env::var(name).ok()
    })
}

/// Merges, in decreasing priority: explicit CLI flags, `--set` values, the
/// config file at `config_path`, and [`DefaultsConfig`].
pub fn build_config_from(
    config_path: Option<&Path>,
    args: &ConfigArgs,
    model_override: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let generation_file = file_config.generation.take().unwrap_or_default();
    let precision = args
        .precision
        .or(generation_file.precision)
        .unwrap_or(defaults.precision);
    let generation = GenerationConfigBuilder::new()
        .precision(precision)
        .build()
        .map_err(EngineError::from)?;

    let explain_file = file_config.explain.take().unwrap_or_default();
    let timeout_secs = explain_file.timeout_secs.unwrap_or(defaults.timeout_secs);
    if timeout_secs == 0 {
        return Err(CliError::Config(
            "`explain.timeout-secs` must be greater than zero.".to_string(),
        ));
    }

    let api_key_env = explain_file
        .api_key_env
        .unwrap_or_else(|| defaults.api_key_env.clone());
    let api_key = explain_file
        .api_key
        .or_else(|| env(&api_key_env))
        .filter(|key| !key.trim().is_empty());
    debug!(
        "Explanation credential {} (checked config file and ${}).",
        if api_key.is_some() { "found" } else { "not found" },
        api_key_env
    );

    let explain = ExplainConfig {
        model: model_override
            .map(str::to_string)
            .or(explain_file.model)
            .unwrap_or(defaults.model),
        endpoint: explain_file
            .endpoint
            .unwrap_or(defaults.endpoint)
            .trim_end_matches('/')
            .to_string(),
        api_key,
        timeout: Duration::from_secs(timeout_secs),
    };

    Ok(AppConfig {
        generation,
        explain,
    })
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "voidscope", "voidscope")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "generation.precision" => {
                config
                    .generation
                    .get_or_insert_with(Default::default)
                    .precision = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "explain.model" => {
                config.explain.get_or_insert_with(Default::default).model =
                    Some(value_str.to_string());
            }
            "explain.endpoint" => {
                config.explain.get_or_insert_with(Default::default).endpoint =
                    Some(value_str.to_string());
            }
            "explain.api-key-env" => {
                config
                    .explain
                    .get_or_insert_with(Default::default)
                    .api_key_env = Some(value_str.to_string());
            }
            "explain.timeout-secs" => {
                config
                    .explain
                    .get_or_insert_with(Default::default)
                    .timeout_secs = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
