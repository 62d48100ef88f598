//! SkySwap AMM terminal - hedged liquidity sizing and pool explorer.
//!
//! All figures are either fixed mock constants or pure formulas over
//! local inputs; nothing here talks to a chain or a price feed.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod report;
pub mod shared;

// Re-export main types for convenience
pub use application::panels::{HedgingPanel, LiquidityPanel};
pub use config::Config;
pub use domain::hedging::{MarketAssumptions, PositionInput, PositionMetrics};
pub use domain::pool::{Pool, PoolProvider, StaticCatalog};
