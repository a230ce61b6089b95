//! Order CLI commands.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Order commands.
#[derive(Debug, Parser)]
pub struct OrdersCommand {
    #[command(subcommand)]
    pub action: OrdersAction,
}

/// Available order actions.
#[derive(Debug, Subcommand)]
pub enum OrdersAction {
    /// Get an order by uid.
    Get {
        /// Order uid.
        order_uid: String,
    },
    /// Submit an order read from a file or generated from the sample.
    #[command(group(ArgGroup::new("source").required(true).args(["file", "sample"])))]
    Send {
        /// Path to a JSON order.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Generate the sample order with this uid.
        #[arg(long)]
        sample: Option<String>,
        /// Hand the order to the background ingest queue instead of waiting
        /// for it to be stored.
        #[arg(long)]
        queue: bool,
    },
}
