//! Position sizing calculator for IL-hedged liquidity positions.
//!
//! Pure arithmetic over in-memory inputs: the figures a user sees next to
//! the liquidity form before confirming anything. Identical inputs always
//! produce identical outputs; nothing here touches the chain.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Session-wide market constants the calculator is parameterised over.
///
/// These are mock figures, injectable so tests can vary them without
/// touching the formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAssumptions {
    /// Reference price of the pooled asset in USDC
    pub reference_price: Decimal,
    /// Base funding rate (fraction, not percent)
    pub base_funding_rate: Decimal,
    /// Additional funding rate per unit of leverage
    pub funding_rate_per_leverage: Decimal,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            reference_price: dec!(2500),
            base_funding_rate: dec!(0.01),
            funding_rate_per_leverage: dec!(0.005),
        }
    }
}

/// User-entered inputs of one liquidity panel.
///
/// An absent deposit models the "nothing entered yet" state of the form;
/// malformed text degrades to absent rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionInput {
    pub deposit_amount: Option<Decimal>,
    pub exposure_ratio_pct: u8,
    pub leverage: u8,
}

impl PositionInput {
    pub fn new(deposit_amount: Option<Decimal>, exposure_ratio_pct: u8, leverage: u8) -> Self {
        Self {
            deposit_amount: deposit_amount.filter(|amount| *amount >= Decimal::ZERO),
            exposure_ratio_pct: exposure_ratio_pct.min(100),
            leverage: leverage.clamp(1, 10),
        }
    }

    /// Build from the raw text of the amount field
    pub fn from_raw(amount: &str, exposure_ratio_pct: u8, leverage: u8) -> Self {
        Self::new(amount.trim().parse().ok(), exposure_ratio_pct, leverage)
    }
}

/// Derived risk figures, recomputed on every input change and never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMetrics {
    pub required_collateral: Decimal,
    pub liquidation_price: Decimal,
    pub funding_rate_pct: Decimal,
}

impl PositionMetrics {
    /// Compute all figures for the current form state.
    ///
    /// With no deposit entered, collateral and liquidation price stay at
    /// zero; the funding rate is shown regardless.
    pub fn compute(input: &PositionInput, market: &MarketAssumptions) -> Self {
        let funding_rate_pct = funding_rate_percent(input.leverage, market);
        match input.deposit_amount {
            Some(deposit) => Self {
                required_collateral: required_collateral(
                    deposit,
                    input.exposure_ratio_pct,
                    input.leverage,
                    market,
                ),
                liquidation_price: liquidation_price(input.leverage, market),
                funding_rate_pct,
            },
            None => Self {
                required_collateral: Decimal::ZERO,
                liquidation_price: Decimal::ZERO,
                funding_rate_pct,
            },
        }
    }
}

/// USDC collateral needed to hedge `exposure_ratio_pct` of the deposit at
/// the chosen leverage: `deposit * price * exposure / leverage`, 2 dp.
pub fn required_collateral(
    deposit_amount: Decimal,
    exposure_ratio_pct: u8,
    leverage: u8,
    market: &MarketAssumptions,
) -> Decimal {
    let exposure = Decimal::from(exposure_ratio_pct.min(100)) / dec!(100);
    let leverage = Decimal::from(leverage.max(1));
    (deposit_amount * market.reference_price * exposure / leverage).round_dp(2)
}

/// Liquidation price modeled from leverage alone:
/// `price * (1 - 0.8 / leverage)`, 2 dp.
///
/// Deliberately independent of deposit and exposure; it tracks only the
/// leverage-driven distance from the reference price.
pub fn liquidation_price(leverage: u8, market: &MarketAssumptions) -> Decimal {
    let leverage = Decimal::from(leverage.max(1));
    (market.reference_price * (Decimal::ONE - dec!(0.8) / leverage)).round_dp(2)
}

/// Funding rate as a percentage: `(base + leverage * per_leverage) * 100`,
/// 3 dp. Always defined, never depends on the deposit.
pub fn funding_rate_percent(leverage: u8, market: &MarketAssumptions) -> Decimal {
    let rate = market.base_funding_rate
        + Decimal::from(leverage) * market.funding_rate_per_leverage;
    (rate * dec!(100)).round_dp(3)
}

/// Threshold check driving the warning banner and the destructive badge
pub fn high_leverage_warning(leverage: u8) -> bool {
    leverage > 5
}
