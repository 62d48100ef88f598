//! Pool catalog - the static records a pools data provider hands over

use serde::{Deserialize, Serialize};

/// One liquidity pool as displayed in the explore table.
///
/// Figures arrive pre-formatted from the provider (`"$12.4M"`, `"24.5%"`);
/// the table parses numbers back out of them when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub pair: String,
    pub tvl: String,
    pub apy: String,
    pub volume_24h: String,
    pub fees_24h: String,
    pub participants: u32,
    pub il_protected: bool,
    pub change_24h: String,
}

/// Contract with the pools data provider: an array of pool records
pub trait PoolProvider {
    fn pools(&self) -> &[Pool];

    /// Pool for the given pair, falling back to the first catalog entry
    /// when the pair is unknown
    fn find_pair(&self, pair: &str) -> Option<&Pool> {
        self.pools()
            .iter()
            .find(|pool| pool.pair == pair)
            .or_else(|| self.pools().first())
    }
}

/// Built-in static catalog backing the explore table
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    pools: Vec<Pool>,
}

impl StaticCatalog {
    pub fn new(pools: Vec<Pool>) -> Self {
        Self { pools }
    }
}

impl PoolProvider for StaticCatalog {
    fn pools(&self) -> &[Pool] {
        &self.pools
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        let pool = |pair: &str,
                    tvl: &str,
                    apy: &str,
                    volume_24h: &str,
                    fees_24h: &str,
                    participants: u32,
                    il_protected: bool,
                    change_24h: &str| Pool {
            pair: pair.to_string(),
            tvl: tvl.to_string(),
            apy: apy.to_string(),
            volume_24h: volume_24h.to_string(),
            fees_24h: fees_24h.to_string(),
            participants,
            il_protected,
            change_24h: change_24h.to_string(),
        };

        Self::new(vec![
            pool("ETH/USDC", "$12.4M", "24.5%", "$1.9M", "$5,700", 847, true, "+2.4%"),
            pool("WBTC/ETH", "$8.9M", "18.7%", "$1.2M", "$3,600", 623, true, "-1.2%"),
            pool("UNI/USDC", "$4.2M", "32.1%", "$800K", "$2,400", 412, false, "+5.7%"),
            pool("LINK/ETH", "$3.8M", "28.9%", "$650K", "$1,950", 298, true, "+3.1%"),
            pool("AAVE/USDC", "$2.1M", "41.2%", "$420K", "$1,260", 156, false, "+8.9%"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = StaticCatalog::default();
        assert_eq!(catalog.pools().len(), 5);
        assert_eq!(catalog.pools()[0].pair, "ETH/USDC");
        assert!(catalog.pools()[0].il_protected);
    }

    #[test]
    fn test_find_pair() {
        let catalog = StaticCatalog::default();
        assert_eq!(catalog.find_pair("UNI/USDC").unwrap().apy, "32.1%");
    }

    #[test]
    fn test_find_pair_falls_back_to_first() {
        let catalog = StaticCatalog::default();
        assert_eq!(catalog.find_pair("DOGE/USDC").unwrap().pair, "ETH/USDC");
    }

    #[test]
    fn test_find_pair_empty_catalog() {
        let catalog = StaticCatalog::new(Vec::new());
        assert!(catalog.find_pair("ETH/USDC").is_none());
    }

    #[test]
    fn test_pool_serialization_round_trip() {
        let catalog = StaticCatalog::default();
        let json = serde_json::to_string(catalog.pools()).unwrap();
        let back: Vec<Pool> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog.pools());
    }
}
