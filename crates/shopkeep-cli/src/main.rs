mod cleanup;
mod pull;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "shopkeep")]
#[command(about = "Shopify Admin catalog maintenance tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Delete duplicate products from the store, keeping the newest listing
    /// per handle.
    Cleanup {
        /// Plan and report without issuing any delete request.
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch the supplier product catalog and print a summary.
    Pull,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shopkeep_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Cleanup { dry_run } => cleanup::run(&config, dry_run).await,
        Commands::Pull => pull::run(&config).await,
    }
}
