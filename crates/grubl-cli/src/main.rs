mod browse;
mod open;
mod options;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use grubl_core::{Coordinates, Environment, PriceLevel};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "grubl")]
#[command(about = "Find somewhere to eat, one card at a time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for nearby venues and browse them
    Search(SearchArgs),
    /// List the place types, radii and price tiers accepted by `search`
    Options,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Where to search, e.g. "Lot 1"
    #[arg(long, conflicts_with = "near", required_unless_present = "near")]
    location: Option<String>,
    /// Search around a point instead ("LAT,LNG"); resolved to an address first
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    near: Option<Coordinates>,
    /// Search radius in meters (200, 400, 800 or 1600)
    #[arg(long, default_value_t = 200)]
    radius: u32,
    /// Place type code to include; repeatable. Defaults to every type
    #[arg(long = "type", value_name = "CODE")]
    types: Vec<String>,
    /// Price tier to include; repeatable (free, inexpensive, moderate, expensive, very-expensive)
    #[arg(long = "price", value_name = "TIER")]
    prices: Vec<PriceLevel>,
    /// Only show venues open right now
    #[arg(long)]
    open_now: bool,
    /// Print maps links instead of opening them
    #[arg(long)]
    print_links: bool,
    /// Print every card and exit instead of browsing interactively
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Options => {
            options::print_options();
            Ok(())
        }
        Commands::Search(args) => {
            let config = grubl_core::load_app_config().context("failed to load configuration")?;
            let env_filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(colored_logs(&config.env))
                .init();
            tracing::debug!(?config, env = %config.env, "configuration loaded");

            browse::run(&config, args).await
        }
    }
}

/// Plain log lines outside development, where stderr is usually captured.
fn colored_logs(env: &Environment) -> bool {
    matches!(env, Environment::Development)
}
