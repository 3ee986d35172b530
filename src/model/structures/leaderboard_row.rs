use crate::model::structures::{leaderboard_perf::LeaderboardPerf, rank_info::RankInfo};
use serde::{Deserialize, Serialize};

/// One line of a perf type's leaderboard, as persisted between generations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardRow {
    pub name: String,
    pub perf: LeaderboardPerf,
    pub rank_info: RankInfo
}
