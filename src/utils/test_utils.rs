use crate::{
    api::{BotFeed, FeedError},
    model::structures::{
        bot_profile::BotProfile,
        leaderboard_perf::{BotPerf, LeaderboardPerf},
        leaderboard_row::LeaderboardRow,
        rank_info::RankInfo
    }
};
use reqwest::StatusCode;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

// Midnight UTC on April 1st of each year
pub const DATE_2021_04_01: i64 = 1617235200;
pub const DATE_2022_04_01: i64 = 1648771200;
pub const DATE_2023_04_01: i64 = 1680307200;
pub const DATE_2024_04_01: i64 = 1711929600;
pub const DATE_2025_04_01: i64 = 1743465600;

pub fn generate_bot_profile(name: &str, created: i64, last_seen: i64) -> BotProfile {
    BotProfile {
        name: name.to_string(),
        created,
        last_seen,
        ..Default::default()
    }
}

pub fn generate_perf(rating: i32, rd: i32, games: i32) -> LeaderboardPerf {
    LeaderboardPerf {
        rating,
        rd,
        games,
        ..Default::default()
    }
}

pub fn generate_bot_perf(name: &str, rating: i32, rd: i32, games: i32) -> BotPerf {
    BotPerf {
        name: name.to_string(),
        perf: generate_perf(rating, rd, games)
    }
}

/// A row as it would have been stored by a generation which ran on April 1st, 2025.
pub fn generate_leaderboard_row(name: &str, rating: i32, rd: i32, games: i32, rank: i32) -> LeaderboardRow {
    LeaderboardRow {
        name: name.to_string(),
        perf: generate_perf(rating, rd, games),
        rank_info: RankInfo {
            rank,
            peak_rank: rank,
            peak_rating: rating,
            last_played: DATE_2025_04_01,
            ..Default::default()
        }
    }
}

pub fn profiles_by_name(profiles: Vec<BotProfile>) -> HashMap<String, BotProfile> {
    profiles
        .into_iter()
        .map(|profile| (profile.name.clone(), profile))
        .collect()
}

/// One line of the online bots feed. Each perf is `(key, rating, rd, games, prov)`.
pub fn generate_bot_json(name: &str, created: i64, seen_at: i64, perfs: &[(&str, i32, i32, i32, bool)]) -> String {
    let perfs: Map<String, Value> = perfs
        .iter()
        .map(|(key, rating, rd, games, prov)| {
            (
                key.to_string(),
                json!({ "games": games, "rating": rating, "rd": rd, "prog": 0, "prov": prov })
            )
        })
        .collect();

    json!({
        "id": name.to_lowercase(),
        "username": name,
        "createdAt": created * 1000,
        "seenAt": seen_at * 1000,
        "perfs": perfs,
        "title": "BOT"
    })
    .to_string()
}

/// A feed which returns a fixed body, or fails as if the service were unavailable.
pub struct FakeBotFeed {
    pub body: Option<String>
}

impl FakeBotFeed {
    pub fn from_lines(lines: &[String]) -> FakeBotFeed {
        FakeBotFeed {
            body: Some(lines.join("\n"))
        }
    }

    pub fn unavailable() -> FakeBotFeed {
        FakeBotFeed { body: None }
    }
}

impl BotFeed for FakeBotFeed {
    async fn online_bots(&self) -> Result<String, FeedError> {
        match &self.body {
            Some(body) => Ok(body.clone()),
            None => Err(FeedError::Status(StatusCode::SERVICE_UNAVAILABLE))
        }
    }
}
