//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHOPFRONT_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "SHOPFRONT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Shopfront basket calculator
#[derive(Debug, Parser)]
#[command(
    name = "shopfront",
    about = "Price a basket against the catalog and promotions",
    long_about = None
)]
pub struct Config {
    /// YAML seed file with products and promotions; the built-in demo data when omitted
    #[arg(short, long, env = "SHOPFRONT_SEED")]
    pub seed: Option<PathBuf>,

    /// SKU to add to the basket, once per occurrence
    #[arg(short, long, value_name = "SKU")]
    pub add: Vec<String>,

    /// SKU to remove from the basket after adding, once per occurrence
    #[arg(short, long, value_name = "SKU")]
    pub remove: Vec<String>,

    /// SKU whose promotion is switched off
    #[arg(short, long, value_name = "SKU")]
    pub disable: Vec<String>,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}
