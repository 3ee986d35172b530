use crate::utils::serde_utils::is_default;
use serde::{Deserialize, Serialize};

/// Ranking information for a bot in a single perf type, computed once per generation.
///
/// Deltas follow the convention that a positive value is an improvement for rank
/// (`previous - current`) and an increase for rating and games (`current - previous`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankInfo {
    /// 1 is the top, 0 means the bot is not shown
    #[serde(skip_serializing_if = "is_default")]
    pub rank: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub delta_rank: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub delta_rating: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub delta_games: i32,
    /// Best (smallest non-zero) rank ever held
    #[serde(skip_serializing_if = "is_default")]
    pub peak_rank: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub peak_rating: i32,
    /// Seconds since epoch of the last generation in which the game count increased
    #[serde(skip_serializing_if = "is_default")]
    pub last_played: i64
}
