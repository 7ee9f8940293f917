//! API configuration

use config::{Config, ConfigError, Environment};
use rust_decimal::Decimal;
use serde::Deserialize;

use domain_quote::QuoteLimits;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path to the coverage catalog JSON document
    pub catalog_path: String,
    /// Log level
    pub log_level: String,
    /// Highest bonus/discount accepted on a quote, in percent
    pub max_bonus_percentage: Decimal,
    /// Increment for sum insured dropdowns
    pub sum_insured_step: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let limits = QuoteLimits::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            catalog_path: "catalog.json".to_string(),
            log_level: "info".to_string(),
            max_bonus_percentage: limits.max_bonus_percentage,
            sum_insured_step: limits.sum_insured_step,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("API"))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects limits the quoting surface cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sum_insured_step <= Decimal::ZERO {
            return Err(ConfigError::Message(format!(
                "sum_insured_step must be positive, got {}",
                self.sum_insured_step
            )));
        }
        if self.max_bonus_percentage < Decimal::ZERO || self.max_bonus_percentage > Decimal::ONE_HUNDRED {
            return Err(ConfigError::Message(format!(
                "max_bonus_percentage must be within [0, 100], got {}",
                self.max_bonus_percentage
            )));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Limits handed to every new quote worksheet
    pub fn quote_limits(&self) -> QuoteLimits {
        QuoteLimits {
            max_bonus_percentage: self.max_bonus_percentage,
            sum_insured_step: self.sum_insured_step,
        }
    }
}
