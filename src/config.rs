use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::domain::hedging::MarketAssumptions;

#[derive(Debug, Clone, Deserialize)]
pub struct MarketCfg {
    #[serde(default = "default_reference_price")]
    pub reference_price: Decimal,
    #[serde(default = "default_base_funding_rate")]
    pub base_funding_rate: Decimal,
    #[serde(default = "default_funding_rate_per_leverage")]
    pub funding_rate_per_leverage: Decimal,
}

fn default_reference_price() -> Decimal {
    dec!(2500)
}

fn default_base_funding_rate() -> Decimal {
    dec!(0.01)
}

fn default_funding_rate_per_leverage() -> Decimal {
    dec!(0.005)
}

impl Default for MarketCfg {
    fn default() -> Self {
        Self {
            reference_price: default_reference_price(),
            base_funding_rate: default_base_funding_rate(),
            funding_rate_per_leverage: default_funding_rate_per_leverage(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub market: MarketCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read {}", path.as_ref().display()))?;
        let cfg: Self = toml::from_str(&s).context("parse Config.toml")?;
        Ok(cfg)
    }

    pub fn assumptions(&self) -> MarketAssumptions {
        MarketAssumptions {
            reference_price: self.market.reference_price,
            base_funding_rate: self.market.base_funding_rate,
            funding_rate_per_leverage: self.market.funding_rate_per_leverage,
        }
    }
}
