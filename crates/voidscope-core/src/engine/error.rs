use super::config::ConfigError;
use crate::core::models::lattice::{LatticeType, VoidType};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Void '{id}' does not exist in the {lattice} {void_type} structure")]
    VoidNotFound {
        id: String,
        lattice: LatticeType,
        void_type: VoidType,
    },
}
