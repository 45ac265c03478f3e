use rust_decimal::Decimal;
use std::env;

use crate::core::{AppError, Currency, Result};

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub payments: PaymentConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
}

/// Money-related defaults shared by the calculators
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub currency: Currency,
    /// Longest installment plan an agent may offer; unbounded when unset
    pub max_term_months: Option<u32>,
    /// Budget cap applied by trip discovery when the caller gives none
    pub default_budget_cap: Decimal,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            max_term_months: None,
            default_budget_cap: Decimal::from(2000),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let defaults = PaymentConfig::default();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
                log_json: env::var("LOG_FORMAT")
                    .map(|format| format.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
            server: ServerConfig::from_env()?,
            payments: PaymentConfig {
                currency: match env::var("PAYMENT_CURRENCY") {
                    Ok(code) => code.parse().map_err(AppError::Configuration)?,
                    Err(_) => defaults.currency,
                },
                max_term_months: match env::var("MAX_TERM_MONTHS") {
                    Ok(value) => Some(value.parse().map_err(|_| {
                        AppError::Configuration("Invalid MAX_TERM_MONTHS".to_string())
                    })?),
                    Err(_) => defaults.max_term_months,
                },
                default_budget_cap: match env::var("DEFAULT_BUDGET_CAP") {
                    Ok(value) => value.parse().map_err(|_| {
                        AppError::Configuration("Invalid DEFAULT_BUDGET_CAP".to_string())
                    })?,
                    Err(_) => defaults.default_budget_cap,
                },
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.payments.max_term_months == Some(0) {
            return Err(AppError::Configuration(
                "Maximum payment term must be at least 1 month".to_string(),
            ));
        }

        if self.payments.default_budget_cap < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Default budget cap cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}
