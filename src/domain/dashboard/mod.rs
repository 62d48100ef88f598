//! Dashboard domain - rewards, positions, protocol metrics, referrals,
//! activity history

pub mod activity;
pub mod metrics;
pub mod positions;
pub mod referrals;
pub mod rewards;

pub use activity::{activity_log, Activity, ActivityKind};
pub use metrics::{protocol_metrics, ProtocolMetric};
pub use positions::{liquidity_positions, LiquidityPosition};
pub use referrals::{referral_rows, Referral, REFERRAL_EARNINGS};
pub use rewards::{reward_entries, total_earned, total_pending, RewardEntry};
