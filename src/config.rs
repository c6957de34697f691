//! Engine configuration.

use crate::constants::{DEFAULT_SEED, DEFAULT_WORKING_PREC, MIN_WORKING_PREC};
use crate::output::ReportFormat;

/// Configuration error, surfaced before any sampling happens.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The working precision cannot hold the quad tier with headroom.
    #[error("working precision must be at least {min} bits, got {got}")]
    PrecisionTooLow {
        /// Smallest accepted precision.
        min: u32,
        /// Precision that was requested.
        got: u32,
    },
}

/// Configuration options for [`ComparisonEngine`](crate::ComparisonEngine).
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for the sampling RNG. A fixed seed plus a fixed RNG algorithm
    /// makes the whole run reproducible. Default: 1111.
    pub seed: u64,

    /// Working precision, in bits, for the reference sine and the running
    /// statistics. Default: 512.
    pub precision: u32,

    /// Optional cap on outer iterations (one sample per distribution each).
    /// `None` runs until a stop is requested. Default: `None`.
    pub max_iterations: Option<u64>,

    /// Output format for reports. Default: text.
    pub format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            precision: DEFAULT_WORKING_PREC,
            max_iterations: None,
            format: ReportFormat::Text,
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the working precision in bits.
    pub fn precision(mut self, bits: u32) -> Self {
        self.precision = bits;
        self
    }

    /// Cap the run at `n` outer iterations.
    pub fn max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Set the report output format.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Check the configuration before building an engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision < MIN_WORKING_PREC {
            return Err(ConfigError::PrecisionTooLow {
                min: MIN_WORKING_PREC,
                got: self.precision,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.seed, 1111);
        assert_eq!(config.precision, 512);
        assert_eq!(config.max_iterations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = Config::new().seed(7).precision(256).max_iterations(1000);
        assert_eq!(config.seed, 7);
        assert_eq!(config.precision, 256);
        assert_eq!(config.max_iterations, Some(1000));
    }

    #[test]
    fn rejects_precision_below_the_quad_tier_headroom() {
        let config = Config::new().precision(64);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PrecisionTooLow { min: 128, got: 64 })
        );
    }
}
