//! Referral earnings panel data

use serde::{Deserialize, Serialize};

/// Total earned from referrals
pub const REFERRAL_EARNINGS: &str = "$123.45";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    pub address: String,
    pub date: String,
    pub amount: String,
}

pub fn referral_rows() -> Vec<Referral> {
    let referral = |address: &str, date: &str, amount: &str| Referral {
        address: address.to_string(),
        date: date.to_string(),
        amount: amount.to_string(),
    };

    vec![
        referral("0xA1B2...C3D4", "2025-06-01", "$25.00"),
        referral("0xE5F6...G7H8", "2025-06-20", "$50.00"),
        referral("0xI9J0...K1L2", "2025-07-05", "$48.45"),
    ]
}
