//! Application layer - panel view-models over the domain calculators

pub mod panels;

pub use panels::{HedgingPanel, LiquidityPanel};
