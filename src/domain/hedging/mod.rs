//! Hedged liquidity domain - position sizing and advanced hedging setup

pub mod setup;
pub mod sizing;

pub use setup::{ContinuationStrategy, HedgingSetup};
pub use sizing::{
    funding_rate_percent, high_leverage_warning, liquidation_price, required_collateral,
    MarketAssumptions, PositionInput, PositionMetrics,
};
