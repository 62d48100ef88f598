//! Advanced hedging configuration panel state

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sizing::high_leverage_warning;

/// Displayed collateral ratio of the hedge position
pub const COLLATERAL_RATIO: &str = "175%";
/// Displayed gas cost of the unwind automation
pub const AUTOMATION_GAS_COST: &str = "$45.60";

/// What the automation does with the hedge once it triggers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationStrategy {
    #[default]
    Rebalance,
    Close,
    Maintain,
}

impl ContinuationStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rebalance => "Auto Rebalance",
            Self::Close => "Close Position",
            Self::Maintain => "Maintain Exposure",
        }
    }
}

/// Standalone hedging setup: ratio, leverage, collateral and the risk
/// management toggles. Confirmation stays disabled until collateral is
/// entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgingSetup {
    pub hedge_ratio_pct: u8,
    pub leverage: u8,
    pub collateral_amount: Option<Decimal>,
    pub auto_unwind: bool,
    pub strategy: ContinuationStrategy,
}

impl Default for HedgingSetup {
    fn default() -> Self {
        Self {
            hedge_ratio_pct: 70,
            leverage: 3,
            collateral_amount: None,
            auto_unwind: true,
            strategy: ContinuationStrategy::default(),
        }
    }
}

impl HedgingSetup {
    pub fn new(
        hedge_ratio_pct: u8,
        leverage: u8,
        collateral_amount: Option<Decimal>,
        auto_unwind: bool,
        strategy: ContinuationStrategy,
    ) -> Self {
        Self {
            hedge_ratio_pct: hedge_ratio_pct.min(100),
            leverage: leverage.clamp(1, 10),
            collateral_amount: collateral_amount.filter(|amount| *amount >= Decimal::ZERO),
            auto_unwind,
            strategy,
        }
    }

    /// Ready to confirm once collateral has been entered
    pub fn ready(&self) -> bool {
        self.collateral_amount.is_some()
    }

    pub fn high_leverage(&self) -> bool {
        high_leverage_warning(self.leverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_panel() {
        let setup = HedgingSetup::default();
        assert_eq!(setup.hedge_ratio_pct, 70);
        assert_eq!(setup.leverage, 3);
        assert!(setup.auto_unwind);
        assert_eq!(setup.strategy, ContinuationStrategy::Rebalance);
        assert!(!setup.ready());
    }

    #[test]
    fn test_ready_after_collateral() {
        let setup = HedgingSetup::new(
            70,
            3,
            Some(dec!(500)),
            true,
            ContinuationStrategy::Rebalance,
        );
        assert!(setup.ready());
        assert!(!setup.high_leverage());
    }

    #[test]
    fn test_high_leverage_flag() {
        let setup = HedgingSetup::new(50, 10, None, false, ContinuationStrategy::Close);
        assert!(setup.high_leverage());
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(ContinuationStrategy::Rebalance.label(), "Auto Rebalance");
        assert_eq!(ContinuationStrategy::Close.label(), "Close Position");
        assert_eq!(ContinuationStrategy::Maintain.label(), "Maintain Exposure");
    }
}
