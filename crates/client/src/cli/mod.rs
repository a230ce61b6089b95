//! CLI command definitions.

pub mod cache;
pub mod orders;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for ordercache API.
#[derive(Debug, Parser)]
#[command(name = "ordercache-client")]
#[command(about = "CLI client for ordercache API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ORDERCACHE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Order lookup and submission.
    Orders(orders::OrdersCommand),
    /// Cache inspection.
    Cache(cache::CacheCommand),
    /// Server health check.
    Health,
}
