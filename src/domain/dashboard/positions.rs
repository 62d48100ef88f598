//! Active liquidity positions shown on the dashboard

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPosition {
    pub pair: String,
    pub value: String,
    pub apy: String,
    pub time_in_position: String,
    pub share: String,
    pub status: String,
}

pub fn liquidity_positions() -> Vec<LiquidityPosition> {
    let position = |pair: &str, value: &str, apy: &str, time: &str, share: &str| {
        LiquidityPosition {
            pair: pair.to_string(),
            value: value.to_string(),
            apy: apy.to_string(),
            time_in_position: time.to_string(),
            share: share.to_string(),
            status: "Active".to_string(),
        }
    };

    vec![
        position("ETH/USDC", "$12,450.32", "24.5%", "12 days", "0.12%"),
        position("WBTC/ETH", "$8,920.15", "18.7%", "8 days", "0.08%"),
        position("UNI/USDC", "$3,240.87", "32.1%", "5 days", "0.05%"),
    ]
}
