//! Display-layer reports: the plain decimals of the calculators dressed
//! with currency and percent symbols.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::panels::{EXPECTED_FEES, POOL_SHARE};
use crate::domain::hedging::{high_leverage_warning, PositionInput, PositionMetrics};
use crate::domain::pool::Pool;

#[derive(Debug, Serialize)]
pub struct PositionReport {
    pub required_collateral: String,
    pub liquidation_price: String,
    pub funding_rate: String,
    pub leverage: u8,
    pub exposure_coverage: String,
    pub high_leverage_warning: bool,
    pub pool_share: String,
    pub expected_fees: String,
    pub timestamp: DateTime<Utc>,
}

impl PositionReport {
    pub fn new(input: &PositionInput, metrics: &PositionMetrics) -> Self {
        Self {
            required_collateral: format!("{:.2}", metrics.required_collateral),
            liquidation_price: format!("${:.2}", metrics.liquidation_price),
            funding_rate: format!("{:.3}%", metrics.funding_rate_pct),
            leverage: input.leverage,
            exposure_coverage: format!("{}%", input.exposure_ratio_pct),
            high_leverage_warning: high_leverage_warning(input.leverage),
            pool_share: POOL_SHARE.to_string(),
            expected_fees: EXPECTED_FEES.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Serialize)]
pub struct ExploreReport {
    pub rows: Vec<PoolRow>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PoolRow {
    pub pair: String,
    pub tvl: String,
    pub apy: String,
    pub volume_24h: String,
    pub change_24h: String,
    pub participants: u32,
    pub il_protection: String,
}

impl ExploreReport {
    pub fn new(pools: &[&Pool]) -> Self {
        let rows = pools
            .iter()
            .map(|pool| PoolRow {
                pair: pool.pair.clone(),
                tvl: pool.tvl.clone(),
                apy: pool.apy.clone(),
                volume_24h: pool.volume_24h.clone(),
                change_24h: pool.change_24h.clone(),
                participants: pool.participants,
                il_protection: if pool.il_protected {
                    "Protected".to_string()
                } else {
                    "Standard".to_string()
                },
            })
            .collect();
        Self {
            rows,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hedging::MarketAssumptions;
    use crate::domain::pool::{PoolProvider, StaticCatalog};

    #[test]
    fn test_position_report_formatting() {
        let input = PositionInput::from_raw("10", 70, 3);
        let metrics = PositionMetrics::compute(&input, &MarketAssumptions::default());
        let report = PositionReport::new(&input, &metrics);
        assert_eq!(report.required_collateral, "5833.33");
        assert_eq!(report.liquidation_price, "$1833.33");
        assert_eq!(report.funding_rate, "2.500%");
        assert_eq!(report.exposure_coverage, "70%");
        assert!(!report.high_leverage_warning);
    }

    #[test]
    fn test_empty_input_display_state() {
        let input = PositionInput::from_raw("", 70, 3);
        let metrics = PositionMetrics::compute(&input, &MarketAssumptions::default());
        let report = PositionReport::new(&input, &metrics);
        assert_eq!(report.required_collateral, "0.00");
        assert_eq!(report.liquidation_price, "$0.00");
    }

    #[test]
    fn test_explore_report() {
        let catalog = StaticCatalog::default();
        let rows: Vec<&Pool> = catalog.pools().iter().collect();
        let report = ExploreReport::new(&rows);
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.rows[0].il_protection, "Protected");
        assert_eq!(report.rows[2].il_protection, "Standard");
        assert!(report.to_json().unwrap().contains("ETH/USDC"));
    }
}
