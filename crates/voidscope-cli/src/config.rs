mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_config, build_config_from};
pub use defaults::DefaultsConfig;
pub use models::{AppConfig, ExplainConfig};
