//! route-finder command-line library

pub mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use swap_core::{Address, AppConfig, ChainName};

#[derive(Parser)]
#[command(name = "route-finder")]
#[command(about = "Multi-hop swap route search and amount conversion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON config file (reads ROUTE_FINDER_CONFIG env var)
    #[arg(short, long, env = "ROUTE_FINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find candidate routes between two tokens
    Paths {
        /// JSON file holding an array of pools
        #[arg(short, long)]
        pools: PathBuf,

        /// Input token address
        #[arg(long)]
        from: Address,

        /// Output token address
        #[arg(long)]
        to: Address,

        /// Override the configured hop ceiling
        #[arg(long)]
        max_hops: Option<usize>,
    },

    /// Convert a raw integer amount into a display number
    Redenominate {
        #[arg(short, long)]
        amount: String,

        #[arg(short, long)]
        decimals: u32,

        #[arg(short, long, default_value_t = 6)]
        round: u32,
    },

    /// Convert a display number into a raw integer amount
    DeRedenominate {
        #[arg(short, long)]
        value: String,

        #[arg(short, long)]
        decimals: u32,
    },

    /// Compute a slippage bound for a raw amount
    Slippage {
        #[arg(short, long)]
        amount: String,

        /// Tolerance as a fraction (defaults to the configured value)
        #[arg(short, long)]
        slippage: Option<f64>,

        /// Decimal digits of tolerance precision (defaults to the configured value)
        #[arg(short, long)]
        round: Option<u32>,

        /// Bound a maximum input instead of a minimum output
        #[arg(long)]
        exact_output: bool,
    },

    /// Show chain deployment info
    Chain {
        /// Chain name (defaults to the configured chain)
        #[arg(long)]
        name: Option<ChainName>,
    },
}

/// Run the command-line application
pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("route_finder=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Paths {
            pools,
            from,
            to,
            max_hops,
        } => {
            let pools = commands::load_pools(&pools)?;
            let mut router = config.router.clone();
            if let Some(max_hops) = max_hops {
                router.max_hops = max_hops;
            }
            let response = commands::find_routes(&pools, from, to, &router).map_err(|e| {
                tracing::error!(code = e.error_code(), "Route search failed: {}", e);
                e
            })?;
            print_json(&response)
        }
        Commands::Redenominate {
            amount,
            decimals,
            round,
        } => print_json(&commands::redenominate_amount(&amount, decimals, round)?),
        Commands::DeRedenominate { value, decimals } => {
            print_json(&commands::de_redenominate_value(&value, decimals))
        }
        Commands::Slippage {
            amount,
            slippage,
            round,
            exact_output,
        } => print_json(&commands::slippage_bound(
            &amount,
            slippage.unwrap_or(config.router.slippage),
            round.unwrap_or(config.router.slippage_round),
            exact_output,
        )?),
        Commands::Chain { name } => {
            print_json(&commands::chain_info(name.unwrap_or(config.chain)))
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => {
            let config = AppConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            tracing::info!("Loaded config from {} (chain {})", path.display(), config.chain);
            Ok(config)
        }
        None => Ok(AppConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
