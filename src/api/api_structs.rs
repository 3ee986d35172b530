use serde::Deserialize;
use std::collections::HashMap;

/// A single line of the online bots feed.
/// Only a small subset of what the feed provides is read; every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BotUser {
    pub username: String,
    pub flair: String,
    pub profile: UserProfile,
    /// Milliseconds since epoch
    pub created_at: i64,
    /// Milliseconds since epoch
    pub seen_at: Option<i64>,
    pub patron: bool,
    pub tos_violation: bool,
    /// Keyed by perf type key, e.g. "bullet" or "threeCheck"
    pub perfs: HashMap<String, Perf>
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    pub flag: String
}

/// A bot's rating for a single time control or variant
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Perf {
    pub games: i32,
    pub rating: i32,
    pub rd: i32,
    /// Rating change over the last 12 games
    pub prog: i32,
    /// Too few games for the rating to be trusted
    pub prov: bool
}

impl BotUser {
    /// Whether the bot has played at least one game in any perf type, provisional or not.
    pub fn has_played(&self) -> bool {
        self.perfs.values().any(|perf| perf.games > 0)
    }
}
