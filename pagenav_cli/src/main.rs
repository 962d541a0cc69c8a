mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pagenav")]
#[command(about = "Render pagination strips and navigation query strings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the pagination strip for a page position
    Strip(commands::strip::StripArgs),
    /// Toggle the sorting query parameter on a URL
    Sort(commands::sort::SortArgs),
    /// Send a cache-refresh ping for a page
    Refresh(commands::refresh::RefreshArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pagenav=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Strip(args) => commands::strip::run(args)?,
        Commands::Sort(args) => commands::sort::run(args),
        Commands::Refresh(args) => commands::refresh::run(args).await,
    }

    Ok(())
}
