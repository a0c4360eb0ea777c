//! Checkout demo configuration, from CLI arguments or `STOREFRONT_*` environment variables.

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser};

use crate::{checkout::DeliveryOption, fixtures::DEFAULT_FIXTURES_DIR, orders::PaymentMethod};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "STOREFRONT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "STOREFRONT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Storefront checkout configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront checkout", long_about = None)]
pub struct StorefrontConfig {
    /// Fixture set name
    #[arg(short, long, env = "STOREFRONT_FIXTURE", default_value = "default")]
    pub fixture: String,

    /// Directory holding fixture sets
    #[arg(long, env = "STOREFRONT_FIXTURES_DIR", default_value = DEFAULT_FIXTURES_DIR)]
    pub fixtures_dir: PathBuf,

    /// Simulated order placement delay, in milliseconds
    #[arg(long, env = "STOREFRONT_ORDER_DELAY_MS", default_value_t = 1500)]
    pub order_delay_ms: u64,

    /// Delivery option
    #[arg(short, long, env = "STOREFRONT_DELIVERY", value_enum, default_value_t = DeliveryOption::Standard)]
    pub delivery: DeliveryOption,

    /// Payment method
    #[arg(short, long, env = "STOREFRONT_PAYMENT", value_enum, default_value_t = PaymentMethod::Upi)]
    pub payment: PaymentMethod,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Order placement delay.
    #[must_use]
    pub fn order_delay(&self) -> Duration {
        Duration::from_millis(self.order_delay_ms)
    }
}
