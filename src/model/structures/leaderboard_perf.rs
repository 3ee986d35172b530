use crate::{api::api_structs::Perf, utils::serde_utils::is_default};
use serde::{Deserialize, Serialize};

/// A bot's rating in a single perf type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardPerf {
    #[serde(skip_serializing_if = "is_default")]
    pub rating: i32,
    /// Rating deviation, lower is more certain
    #[serde(skip_serializing_if = "is_default")]
    pub rd: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub prog: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub games: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub prov: bool
}

impl From<&Perf> for LeaderboardPerf {
    fn from(perf: &Perf) -> Self {
        LeaderboardPerf {
            rating: perf.rating,
            rd: perf.rd,
            prog: perf.prog,
            games: perf.games,
            prov: perf.prov
        }
    }
}

/// A perf as observed in the current feed, tagged with the bot it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotPerf {
    pub name: String,
    pub perf: LeaderboardPerf
}
