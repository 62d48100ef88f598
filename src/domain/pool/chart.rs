//! Deterministic APY/volume chart series for a selected pool

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub time: &'static str,
    pub apy: Decimal,
    pub volume: u64,
}

// Fixed 4-hour offsets from the pair's base APY
const OFFSETS: [(&str, Decimal, u64); 6] = [
    ("00:00", dec!(0.0), 1_200_000),
    ("04:00", dec!(0.7), 1_450_000),
    ("08:00", dec!(3.6), 1_800_000),
    ("12:00", dec!(6.0), 2_100_000),
    ("16:00", dec!(8.3), 2_300_000),
    ("20:00", dec!(6.0), 1_900_000),
];

/// Mock intraday series: base APY picked from the pair name plus fixed
/// offsets. Same pair, same series.
pub fn chart_series(pair: &str) -> Vec<ChartPoint> {
    let base = if pair.contains("ETH") {
        dec!(18.5)
    } else if pair.contains("BTC") {
        dec!(15.2)
    } else {
        dec!(25.0)
    };

    OFFSETS
        .iter()
        .map(|&(time, offset, volume)| ChartPoint {
            time,
            apy: base + offset,
            volume,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shape() {
        let series = chart_series("ETH/USDC");
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].time, "00:00");
        assert_eq!(series[0].apy, dec!(18.5));
        assert_eq!(series[4].apy, dec!(26.8));
    }

    #[test]
    fn test_base_by_pair() {
        assert_eq!(chart_series("WBTC/USDC")[0].apy, dec!(15.2));
        assert_eq!(chart_series("UNI/USDC")[0].apy, dec!(25.0));
        // ETH wins over BTC, mirroring the pair-name checks in order
        assert_eq!(chart_series("WBTC/ETH")[0].apy, dec!(18.5));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(chart_series("LINK/ETH"), chart_series("LINK/ETH"));
    }
}
