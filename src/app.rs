//! Application wiring - turns resolved CLI input into printed reports

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::info;

use crate::application::panels::LiquidityPanel;
use crate::config::Config;
use crate::domain::dashboard::{
    activity_log, liquidity_positions, protocol_metrics, reward_entries, total_earned,
    total_pending,
};
use crate::domain::pool::{filter_and_sort, PoolProvider, SortKey, SortOrder, StaticCatalog};
use crate::domain::swap::{min_received, SlippageTolerance};
use crate::domain::swap::quote::{GAS_ESTIMATE, PRICE_IMPACT_PCT};
use crate::report::{ExploreReport, PositionReport};

#[derive(Debug, Clone)]
pub enum Command {
    Position {
        amount: Option<String>,
        exposure_pct: u8,
        leverage: u8,
        pool: String,
    },
    Pools {
        search: String,
        sort_by: SortKey,
        order: SortOrder,
    },
    Dashboard,
    Quote {
        amount_out: Decimal,
        slippage_pct: Decimal,
    },
}

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub config: Config,
    pub json: bool,
    pub command: Command,
}

pub fn run(cfg: AppCfg) -> Result<()> {
    match cfg.command {
        Command::Position {
            amount,
            exposure_pct,
            leverage,
            pool,
        } => run_position(&cfg.config, cfg.json, amount, exposure_pct, leverage, pool),
        Command::Pools {
            search,
            sort_by,
            order,
        } => run_pools(cfg.json, &search, sort_by, order),
        Command::Dashboard => run_dashboard(),
        Command::Quote {
            amount_out,
            slippage_pct,
        } => run_quote(amount_out, slippage_pct),
    }
}

fn run_position(
    config: &Config,
    json: bool,
    amount: Option<String>,
    exposure_pct: u8,
    leverage: u8,
    pool: String,
) -> Result<()> {
    let market = config.assumptions();
    let catalog = StaticCatalog::default();
    let panel = LiquidityPanel {
        selected_pool: pool,
        amount: amount.unwrap_or_default(),
        hedging_enabled: true,
        exposure_pct,
        leverage,
    };

    info!(pool = %panel.selected_pool, leverage, exposure_pct, "sizing position");

    let metrics = panel.metrics(&market);
    let report = PositionReport::new(&panel.input(), &metrics);

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Pool:                    {}", panel.selected_pool);
    if let Some(apy) = panel.expected_apy(&catalog) {
        println!("Expected APY:            {apy}");
    }
    println!("Required USDC collateral: {}", report.required_collateral);
    println!("Liquidation price:        {}", report.liquidation_price);
    println!("Funding rate:             {}", report.funding_rate);
    println!("Leverage:                 {}x", report.leverage);
    println!("Exposure coverage:        {}", report.exposure_coverage);
    println!("Pool share:               {}", report.pool_share);
    println!("Expected fees:            {}", report.expected_fees);
    if report.high_leverage_warning {
        println!("High leverage increases liquidation risk. Consider reducing leverage.");
    }
    Ok(())
}

fn run_pools(json: bool, search: &str, sort_by: SortKey, order: SortOrder) -> Result<()> {
    let catalog = StaticCatalog::default();
    let rows = filter_and_sort(catalog.pools(), search, sort_by, order);

    info!(search, rows = rows.len(), "explore table");

    if json {
        println!("{}", ExploreReport::new(&rows).to_json()?);
        return Ok(());
    }

    println!(
        "{:<10} {:>8} {:>7} {:>10} {:>8} {:>13} {:>12}",
        "Pool", "TVL", "APY", "24h Vol", "Change", "Participants", "IL"
    );
    for pool in rows {
        println!(
            "{:<10} {:>8} {:>7} {:>10} {:>8} {:>13} {:>12}",
            pool.pair,
            pool.tvl,
            pool.apy,
            pool.volume_24h,
            pool.change_24h,
            pool.participants,
            if pool.il_protected { "Protected" } else { "Standard" },
        );
    }
    Ok(())
}

fn run_dashboard() -> Result<()> {
    let rewards = reward_entries();
    println!("Total earned:    ${:.2}", total_earned(&rewards));
    println!("Pending rewards: ${:.2}", total_pending(&rewards));
    println!();

    println!("Liquidity positions:");
    for position in liquidity_positions() {
        println!(
            "  {:<10} {:>11} {:>7} APY  share {:>6}  {}",
            position.pair, position.value, position.apy, position.share, position.time_in_position,
        );
    }
    println!();

    println!("Protocol metrics:");
    for metric in protocol_metrics() {
        println!("  {:<20} {:>8} ({})", metric.title, metric.value, metric.change);
    }
    println!();

    println!("Recent activity:");
    for activity in activity_log() {
        println!(
            "  [{:<16}] {} - {}",
            activity.kind.label(),
            activity.description,
            activity.time,
        );
    }
    Ok(())
}

fn run_quote(amount_out: Decimal, slippage_pct: Decimal) -> Result<()> {
    let slippage = SlippageTolerance::new(slippage_pct);
    println!("Minimum received: {}", min_received(amount_out, slippage));
    println!("Price impact:     {PRICE_IMPACT_PCT}%");
    println!("Gas estimate:     {GAS_ESTIMATE}");
    Ok(())
}
