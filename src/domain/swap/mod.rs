//! Swap domain - slippage quote and form state

pub mod form;
pub mod quote;

pub use form::{SwapForm, ASSET_LIST};
pub use quote::{min_received, price_impact_warning, SlippageTolerance};
