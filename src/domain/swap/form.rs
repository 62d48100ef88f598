//! Swap form state - token pair selection and amounts

use crate::shared::errors::SwapError;

use super::quote::SlippageTolerance;

/// Assets offered by the swap token selectors
pub const ASSET_LIST: [&str; 5] = ["BTC", "ETH", "USDC", "HYPE", "UNI"];

/// UI-local state of the swap panel. Amounts stay raw strings until a
/// quote needs them; a token never swaps against itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapForm {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: String,
    pub to_amount: String,
    pub slippage: SlippageTolerance,
}

impl Default for SwapForm {
    fn default() -> Self {
        Self {
            from_token: ASSET_LIST[0].to_string(),
            to_token: ASSET_LIST[1].to_string(),
            from_amount: String::new(),
            to_amount: String::new(),
            slippage: SlippageTolerance::default(),
        }
    }
}

impl SwapForm {
    pub fn select_from(&mut self, asset: &str) -> Result<(), SwapError> {
        Self::check_asset(asset)?;
        if asset == self.to_token {
            return Err(SwapError::SameAsset(asset.to_string()));
        }
        self.from_token = asset.to_string();
        Ok(())
    }

    pub fn select_to(&mut self, asset: &str) -> Result<(), SwapError> {
        Self::check_asset(asset)?;
        if asset == self.from_token {
            return Err(SwapError::SameAsset(asset.to_string()));
        }
        self.to_token = asset.to_string();
        Ok(())
    }

    /// Flip direction: tokens and amounts swap places
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
    }

    /// Assets selectable on the opposite side of `token`
    pub fn available_counter_assets(token: &str) -> Vec<&'static str> {
        ASSET_LIST.iter().copied().filter(|a| *a != token).collect()
    }

    /// Submit stays disabled while either amount is empty
    pub fn can_submit(&self) -> bool {
        !self.from_amount.trim().is_empty() && !self.to_amount.trim().is_empty()
    }

    fn check_asset(asset: &str) -> Result<(), SwapError> {
        if ASSET_LIST.contains(&asset) {
            Ok(())
        } else {
            Err(SwapError::UnknownAsset(asset.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = SwapForm::default();
        assert_eq!(form.from_token, "BTC");
        assert_eq!(form.to_token, "ETH");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_flip_swaps_tokens_and_amounts() {
        let mut form = SwapForm::default();
        form.from_amount = "2.5".to_string();
        form.to_amount = "6247.50".to_string();
        form.flip();
        assert_eq!(form.from_token, "ETH");
        assert_eq!(form.to_token, "BTC");
        assert_eq!(form.from_amount, "6247.50");
        assert_eq!(form.to_amount, "2.5");
    }

    #[test]
    fn test_same_asset_rejected() {
        let mut form = SwapForm::default();
        assert!(form.select_from("ETH").is_err());
        assert!(form.select_to("BTC").is_err());
    }

    #[test]
    fn test_unknown_asset_rejected() {
        let mut form = SwapForm::default();
        assert!(matches!(
            form.select_from("DOGE"),
            Err(SwapError::UnknownAsset(_))
        ));
    }

    #[test]
    fn test_counter_assets_exclude_selected() {
        let counters = SwapForm::available_counter_assets("ETH");
        assert_eq!(counters.len(), 4);
        assert!(!counters.contains(&"ETH"));
    }

    #[test]
    fn test_can_submit_needs_both_amounts() {
        let mut form = SwapForm::default();
        form.from_amount = "1".to_string();
        assert!(!form.can_submit());
        form.to_amount = "2500".to_string();
        assert!(form.can_submit());
    }
}
