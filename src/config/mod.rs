use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub mod report;

pub use report::ReportConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub report: ReportConfig,
    pub store: StoreConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// JSON export the orders are read from
    pub orders_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Whether the caller holds the admin role
    pub admin_access: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Config {
            app: AppConfig {
                env: var("APP_ENV", "development"),
                log_level: var("LOG_LEVEL", "info"),
            },
            report: ReportConfig {
                utc_offset_minutes: var("REPORT_UTC_OFFSET_MINUTES", "-180")
                    .trim()
                    .parse()
                    .map_err(|_| {
                        AppError::configuration("Invalid REPORT_UTC_OFFSET_MINUTES")
                    })?,
                negative_totals: var("REPORT_NEGATIVE_TOTALS", "allow")
                    .parse()
                    .map_err(AppError::Configuration)?,
            },
            store: StoreConfig {
                orders_file: PathBuf::from(var("ORDERS_FILE", "orders.json")),
            },
            security: SecurityConfig {
                admin_access: parse_bool(&var("REPORT_ADMIN_ACCESS", "true")).ok_or_else(
                    || AppError::configuration("Invalid REPORT_ADMIN_ACCESS"),
                )?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.report.validate()?;

        if self.store.orders_file.as_os_str().is_empty() {
            return Err(AppError::configuration("ORDERS_FILE must not be empty"));
        }

        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
