//! Cache CLI commands.

use clap::{Parser, Subcommand};

/// Cache inspection commands.
#[derive(Debug, Parser)]
pub struct CacheCommand {
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Available cache actions.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show cache size and capacity.
    Stats,
}
