//! Panel view-models.
//!
//! Each panel instance owns its raw input values exclusively and holds no
//! derived state; every metric is recomputed from the inputs on demand,
//! within one interaction turn.

use crate::domain::hedging::{
    high_leverage_warning, ContinuationStrategy, HedgingSetup, MarketAssumptions, PositionInput,
    PositionMetrics,
};
use crate::domain::pool::{Pool, PoolProvider};

/// Fixed pool-share projection shown next to the form
pub const POOL_SHARE: &str = "0.12%";
/// Fixed fee projection shown next to the form
pub const EXPECTED_FEES: &str = "$15.20/day";

/// Add-liquidity panel with the optional hedging section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityPanel {
    pub selected_pool: String,
    pub amount: String,
    pub hedging_enabled: bool,
    pub exposure_pct: u8,
    pub leverage: u8,
}

impl Default for LiquidityPanel {
    fn default() -> Self {
        Self {
            selected_pool: "ETH/USDC".to_string(),
            amount: String::new(),
            hedging_enabled: false,
            exposure_pct: 70,
            leverage: 3,
        }
    }
}

impl LiquidityPanel {
    /// Current form values as calculator input; malformed amount text
    /// degrades to the empty state
    pub fn input(&self) -> PositionInput {
        PositionInput::from_raw(&self.amount, self.exposure_pct, self.leverage)
    }

    /// Recompute the risk figures for the current form state
    pub fn metrics(&self, market: &MarketAssumptions) -> PositionMetrics {
        PositionMetrics::compute(&self.input(), market)
    }

    /// Expected APY read off the selected pool, first-pool fallback
    pub fn expected_apy<'a>(&self, provider: &'a impl PoolProvider) -> Option<&'a str> {
        self.selected_pool_record(provider)
            .map(|pool| pool.apy.as_str())
    }

    pub fn selected_pool_record<'a>(&self, provider: &'a impl PoolProvider) -> Option<&'a Pool> {
        provider.find_pair(&self.selected_pool)
    }

    pub fn high_leverage(&self) -> bool {
        high_leverage_warning(self.leverage)
    }

    /// Submit stays disabled while the amount field is empty
    pub fn can_submit(&self) -> bool {
        !self.amount.trim().is_empty()
    }
}

/// Standalone advanced-hedging panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgingPanel {
    pub collateral_amount: String,
    pub hedge_ratio_pct: u8,
    pub leverage: u8,
    pub auto_unwind: bool,
    pub strategy: ContinuationStrategy,
}

impl Default for HedgingPanel {
    fn default() -> Self {
        Self {
            collateral_amount: String::new(),
            hedge_ratio_pct: 70,
            leverage: 3,
            auto_unwind: true,
            strategy: ContinuationStrategy::default(),
        }
    }
}

impl HedgingPanel {
    pub fn setup(&self) -> HedgingSetup {
        HedgingSetup::new(
            self.hedge_ratio_pct,
            self.leverage,
            self.collateral_amount.trim().parse().ok(),
            self.auto_unwind,
            self.strategy,
        )
    }

    pub fn can_submit(&self) -> bool {
        self.setup().ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pool::StaticCatalog;
    use rust_decimal_macros::dec;

    #[test]
    fn test_panel_metrics_flow() {
        let panel = LiquidityPanel {
            amount: "10".to_string(),
            hedging_enabled: true,
            ..LiquidityPanel::default()
        };
        let metrics = panel.metrics(&MarketAssumptions::default());
        assert_eq!(metrics.required_collateral, dec!(5833.33));
        assert_eq!(metrics.liquidation_price, dec!(1833.33));
        assert_eq!(metrics.funding_rate_pct, dec!(2.500));
    }

    #[test]
    fn test_panel_empty_amount() {
        let panel = LiquidityPanel::default();
        assert!(!panel.can_submit());
        let metrics = panel.metrics(&MarketAssumptions::default());
        assert_eq!(metrics.required_collateral, dec!(0));
    }

    #[test]
    fn test_expected_apy_from_catalog() {
        let catalog = StaticCatalog::default();
        let mut panel = LiquidityPanel::default();
        assert_eq!(panel.expected_apy(&catalog), Some("24.5%"));

        panel.selected_pool = "UNI/USDC".to_string();
        assert_eq!(panel.expected_apy(&catalog), Some("32.1%"));

        // Unknown pair falls back to the first catalog entry
        panel.selected_pool = "DOGE/USDC".to_string();
        assert_eq!(panel.expected_apy(&catalog), Some("24.5%"));
    }

    #[test]
    fn test_hedging_panel_parses_collateral() {
        let mut panel = HedgingPanel::default();
        assert!(!panel.can_submit());

        panel.collateral_amount = "500".to_string();
        assert!(panel.can_submit());
        assert_eq!(panel.setup().collateral_amount, Some(dec!(500)));

        panel.collateral_amount = "not a number".to_string();
        assert!(!panel.can_submit());
    }
}
