//! ordercache-client CLI entry point.

use clap::Parser;
use ordercache_client::cli::cache::CacheAction;
use ordercache_client::cli::orders::OrdersAction;
use ordercache_client::cli::{Cli, Commands, OutputFormat};
use ordercache_client::client::OrdercacheClient;
use ordercache_client::output::{format_output, pretty};
use ordercache_client::ClientError;
use ordercache_core::order::sample_order;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = OrdercacheClient::new(&cli.base_url);

    match cli.command {
        Commands::Orders(orders_cmd) => match orders_cmd.action {
            OrdersAction::Get { order_uid } => {
                let order = client.get_order(&order_uid).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&order, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_order(&order)),
                }
            }
            OrdersAction::Send {
                file,
                sample,
                queue,
            } => {
                let body = match (file, sample) {
                    (Some(path), _) => tokio::fs::read(&path).await?,
                    (None, Some(order_uid)) => serde_json::to_vec(&sample_order(order_uid))?,
                    (None, None) => {
                        return Err(ClientError::InvalidInput(
                            "either --file or --sample is required".to_string(),
                        )
                        .into())
                    }
                };

                if queue {
                    let queued = client.queue_order(body).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&queued, cli.format)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("Order {}", queued.status);
                            }
                        }
                    }
                } else {
                    let order = client.send_order(body).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&order, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_order(&order))
                        }
                    }
                }
            }
        },
        Commands::Cache(cache_cmd) => match cache_cmd.action {
            CacheAction::Stats => {
                let stats = client.cache_stats().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&stats, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_cache_stats(&stats)),
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("Health: {}", health.status)
                    }
                }
            }
        }
    }

    Ok(())
}
