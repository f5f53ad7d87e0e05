mod api;
mod cli;
mod config;
mod models;
mod services;
mod utils;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::ProviderConfig;

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Upcoming football fixtures with match forecasts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
    /// List upcoming fixtures
    Fetch {
        /// League code (CL, PL, PD, BL1, EC); all competitions when omitted
        #[arg(short, long)]
        league: Option<String>,
        /// First date, YYYY-MM-DD
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last date, YYYY-MM-DD
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Generate forecasts for upcoming fixtures
    Predict {
        #[arg(short, long)]
        league: Option<String>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
    /// Show supported leagues
    Leagues,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = ProviderConfig::from_env();

    match cli.command {
        Some(Commands::Serve { port }) => {
            tracing::info!("Starting Matchday API server on port {}", port);
            api::serve(port, config).await?;
        }
        Some(Commands::Fetch { league, from, to }) => {
            tracing::info!("Fetching fixtures for {}", league.as_deref().unwrap_or("all competitions"));
            cli::fetch_fixtures(config, league.as_deref(), from, to).await?;
        }
        Some(Commands::Predict { league, from, to, limit }) => {
            tracing::info!("Generating predictions...");
            cli::generate_predictions(config, league.as_deref(), from, to, limit).await?;
        }
        Some(Commands::Leagues) => {
            cli::show_leagues();
        }
        None => {
            // Default to serving
            tracing::info!("Starting Matchday API server on port 5000");
            api::serve(5000, config).await?;
        }
    }

    Ok(())
}
