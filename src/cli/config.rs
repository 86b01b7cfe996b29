//! Store & Logging Config

use std::path::PathBuf;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
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
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Where the storefront reads its data from.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Directory holding `products/` and `orders/` fixture files
    #[arg(long, env = "STOREFRONT_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Fixture set name
    #[arg(long, env = "STOREFRONT_FIXTURE_SET", default_value = "storefront")]
    pub fixture_set: String,

    /// Saved cart location
    #[arg(long, env = "STOREFRONT_CART_FILE", default_value = "./cart.yml")]
    pub cart_file: PathBuf,

    /// Seed for generated review counts
    #[arg(long, env = "STOREFRONT_REVIEW_SEED", default_value_t = 0_u64)]
    pub review_seed: u64,
}
