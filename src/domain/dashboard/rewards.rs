//! Rewards overview - per-pool earnings and the summary totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::utils::figure_value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub pool: String,
    pub earned: String,
    pub pending: String,
    pub apy: String,
    pub last_claim: String,
}

/// Static reward rows shown on the dashboard
pub fn reward_entries() -> Vec<RewardEntry> {
    let entry = |pool: &str, earned: &str, pending: &str, apy: &str, last_claim: &str| {
        RewardEntry {
            pool: pool.to_string(),
            earned: earned.to_string(),
            pending: pending.to_string(),
            apy: apy.to_string(),
            last_claim: last_claim.to_string(),
        }
    };

    vec![
        entry("ETH/USDC", "$124.50", "$15.20", "24.5%", "2 days ago"),
        entry("WBTC/ETH", "$89.30", "$8.90", "18.7%", "1 day ago"),
        entry("UNI/USDC", "$45.80", "$12.40", "32.1%", "3 hours ago"),
    ]
}

/// Sum of the dollar-stripped earned figures, 2 dp
pub fn total_earned(entries: &[RewardEntry]) -> Decimal {
    entries
        .iter()
        .map(|entry| figure_value(&entry.earned))
        .sum::<Decimal>()
        .round_dp(2)
}

/// Sum of the dollar-stripped pending figures, 2 dp
pub fn total_pending(entries: &[RewardEntry]) -> Decimal {
    entries
        .iter()
        .map(|entry| figure_value(&entry.pending))
        .sum::<Decimal>()
        .round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_totals() {
        let entries = reward_entries();
        assert_eq!(total_earned(&entries), dec!(259.60));
        assert_eq!(total_pending(&entries), dec!(36.50));
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(total_earned(&[]), Decimal::ZERO);
        assert_eq!(total_pending(&[]), Decimal::ZERO);
    }
}
