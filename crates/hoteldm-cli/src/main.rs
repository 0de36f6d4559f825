mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hoteldm-cli")]
#[command(about = "Hotel data merge command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one refresh cycle and print the merged snapshot as JSON
    Refresh {
        /// Restrict the cycle to a supplier (repeatable; default: all)
        #[arg(long = "supplier")]
        suppliers: Vec<String>,
    },
    /// Run one refresh cycle, then look hotels up in the fresh snapshot
    Query {
        /// Hotel id to look up (repeatable)
        #[arg(long = "hotel-id")]
        hotel_ids: Vec<String>,

        /// Restrict results to a destination
        #[arg(long)]
        destination_id: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hoteldm_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Refresh { suppliers }) => commands::run_refresh(&config, &suppliers).await?,
        Some(Commands::Query {
            hotel_ids,
            destination_id,
        }) => commands::run_query(&config, hotel_ids, destination_id).await?,
        None => println!("hoteldm-cli: use `refresh` or `query`; see --help"),
    }

    Ok(())
}
