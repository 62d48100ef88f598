//! Swap quote figures - slippage protection and the mock trade details

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Mock price impact shown for every quote
pub const PRICE_IMPACT_PCT: Decimal = dec!(0.8);
/// Mock gas estimate shown for every quote
pub const GAS_ESTIMATE: &str = "$12.50";

/// Slippage tolerance as a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlippageTolerance(Decimal);

impl SlippageTolerance {
    /// The quick-select buttons of the settings panel
    pub const PRESETS: [Decimal; 3] = [dec!(0.1), dec!(0.5), dec!(1.0)];

    /// Custom tolerance; negative input falls back to the default
    pub fn new(pct: Decimal) -> Self {
        if pct < Decimal::ZERO {
            Self::default()
        } else {
            Self(pct)
        }
    }

    pub fn pct(&self) -> Decimal {
        self.0
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        Self(dec!(0.5))
    }
}

/// Minimum received after slippage protection:
/// `amount_out * (1 - pct / 100)`, 2 dp
pub fn min_received(amount_out: Decimal, slippage: SlippageTolerance) -> Decimal {
    (amount_out * (Decimal::ONE - slippage.pct() / dec!(100))).round_dp(2)
}

/// The destructive badge kicks in above 2% impact
pub fn price_impact_warning(impact_pct: Decimal) -> bool {
    impact_pct > dec!(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_received() {
        // 2500 * (1 - 0.005) = 2487.50
        let amount = min_received(dec!(2500), SlippageTolerance::default());
        assert_eq!(amount, dec!(2487.50));
    }

    #[test]
    fn test_min_received_one_percent() {
        let amount = min_received(dec!(100), SlippageTolerance::new(dec!(1.0)));
        assert_eq!(amount, dec!(99.00));
    }

    #[test]
    fn test_negative_tolerance_falls_back() {
        assert_eq!(SlippageTolerance::new(dec!(-1)).pct(), dec!(0.5));
    }

    #[test]
    fn test_price_impact_warning_boundary() {
        assert!(!price_impact_warning(dec!(2.0)));
        assert!(price_impact_warning(dec!(2.1)));
        assert!(!price_impact_warning(PRICE_IMPACT_PCT));
    }
}
