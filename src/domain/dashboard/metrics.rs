//! Protocol-wide headline metrics

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolMetric {
    pub title: String,
    pub value: String,
    pub change: String,
}

pub fn protocol_metrics() -> Vec<ProtocolMetric> {
    let metric = |title: &str, value: &str, change: &str| ProtocolMetric {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    };

    vec![
        metric("Total Value Locked", "$2.4B", "+12.3%"),
        metric("24h Volume", "$156.8M", "+8.7%"),
        metric("Fee Revenue", "$1.2M", "+15.2%"),
        metric("Active Positions", "12,847", "+5.4%"),
    ]
}
