use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use skyswap::app::{self, AppCfg, Command};
use skyswap::config::Config;
use skyswap::domain::pool::{SortKey, SortOrder};

#[derive(Parser, Debug)]
#[command(version, about = "SkySwap AMM terminal - hedged liquidity sizing and pool explorer")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit reports as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Size a hedged liquidity position
    Position {
        /// Deposit amount in units of the pooled asset
        #[arg(long)]
        amount: Option<String>,

        /// Exposure coverage in percent (0-100)
        #[arg(long, default_value_t = 70)]
        exposure: u8,

        /// Leverage multiple (1-10)
        #[arg(long, default_value_t = 3)]
        leverage: u8,

        /// Pool pair the position goes into
        #[arg(long, default_value = "ETH/USDC")]
        pool: String,
    },

    /// Filter and sort the explore pools table
    Pools {
        /// Case-insensitive pair search term
        #[arg(long, default_value = "")]
        search: String,

        /// Sort column: tvl, apy or volume
        #[arg(long, default_value = "tvl")]
        sort_by: String,

        /// Sort order: asc or desc
        #[arg(long, default_value = "desc")]
        order: String,
    },

    /// Dashboard summary: rewards, positions, protocol metrics, activity
    Dashboard,

    /// Minimum-received quote for a swap output amount
    Quote {
        /// Quoted output amount before slippage
        #[arg(long)]
        amount_out: Decimal,

        /// Slippage tolerance in percent
        #[arg(long, default_value = "0.5")]
        slippage: Decimal,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let command = match args.command {
        Cmd::Position {
            amount,
            exposure,
            leverage,
            pool,
        } => Command::Position {
            amount,
            exposure_pct: exposure,
            leverage,
            pool,
        },
        Cmd::Pools {
            search,
            sort_by,
            order,
        } => Command::Pools {
            search,
            sort_by: sort_by.parse::<SortKey>()?,
            order: order.parse::<SortOrder>()?,
        },
        Cmd::Dashboard => Command::Dashboard,
        Cmd::Quote {
            amount_out,
            slippage,
        } => Command::Quote {
            amount_out,
            slippage_pct: slippage,
        },
    };

    app::run(AppCfg {
        config,
        json: args.json,
        command,
    })
}
