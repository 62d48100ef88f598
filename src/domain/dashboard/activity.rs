//! Account activity history

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Swap,
    AddLiquidity,
    RemoveLiquidity,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Swap => "Swap",
            Self::AddLiquidity => "Add Liquidity",
            Self::RemoveLiquidity => "Remove Liquidity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub description: String,
    pub time: String,
    pub status: String,
    pub tx_hash: String,
}

pub fn activity_log() -> Vec<Activity> {
    let activity = |kind: ActivityKind, description: &str, time: &str, hash: &str| Activity {
        kind,
        description: description.to_string(),
        time: time.to_string(),
        status: "Completed".to_string(),
        tx_hash: hash.to_string(),
    };

    vec![
        activity(
            ActivityKind::Swap,
            "Swapped 2.5 ETH for 6,247.50 USDC",
            "2 minutes ago",
            "0x1234...5678",
        ),
        activity(
            ActivityKind::AddLiquidity,
            "Added liquidity to ETH/USDC pool",
            "15 minutes ago",
            "0x2345...6789",
        ),
        activity(
            ActivityKind::RemoveLiquidity,
            "Removed liquidity from WBTC/ETH pool",
            "1 hour ago",
            "0x3456...7890",
        ),
        activity(
            ActivityKind::Swap,
            "Swapped 1,000 USDC for 0.4 ETH",
            "3 hours ago",
            "0x4567...8901",
        ),
        activity(
            ActivityKind::AddLiquidity,
            "Added liquidity to UNI/USDC pool",
            "1 day ago",
            "0x5678...9012",
        ),
    ]
}
