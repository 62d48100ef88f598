//! Domain layer - pure calculation and catalog logic

pub mod dashboard;
pub mod hedging;
pub mod pool;
pub mod swap;
