use crate::core::generator::neighbors::{DEFAULT_PRECISION, Quantizer};
use thiserror::Error;

/// Smallest precision that still separates multiples of 0.25.
pub const MIN_PRECISION: u32 = 2;
/// Largest precision whose scaled coordinates stay well inside `i64`.
pub const MAX_PRECISION: u32 = 9;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error(
        "Invalid coordinate precision: {0} decimal places (expected {min}..={max})",
        min = MIN_PRECISION,
        max = MAX_PRECISION
    )]
    InvalidPrecision(u32),
}

/// Validated generation settings; built through [`GenerationConfigBuilder`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationConfig {
    quantizer: Quantizer,
}

impl GenerationConfig {
    /// Decimal places used when deciding whether two atoms coincide.
    pub fn precision(&self) -> u32 {
        self.quantizer.decimals()
    }

    pub fn quantizer(&self) -> Quantizer {
        self.quantizer
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    precision: Option<u32>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, decimals: u32) -> Self {
        self.precision = Some(decimals);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        Ok(GenerationConfig {
            quantizer: Quantizer::with_decimals(precision)?,
        })
    }
}
