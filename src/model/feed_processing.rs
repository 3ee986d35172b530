use crate::{
    api::{api_structs::BotUser, BotFeed, FeedError},
    model::structures::{
        bot_profile::BotProfile,
        leaderboard_perf::{BotPerf, LeaderboardPerf},
        perf_type::PerfType
    }
};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Everything read from one snapshot of the online bots feed.
#[derive(Debug, Default)]
pub struct OnlineBotInfo {
    pub bot_profiles_by_name: HashMap<String, BotProfile>,
    /// Non-provisional perfs in feed order, with an entry for every perf type except `Unknown`
    pub bot_perfs_by_perf_type: IndexMap<PerfType, Vec<BotPerf>>,
    pub skipped_lines: usize
}

impl OnlineBotInfo {
    pub fn bot_perfs(&self, perf_type: PerfType) -> &[BotPerf] {
        self.bot_perfs_by_perf_type
            .get(&perf_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Parses the online bots feed.
///
/// Blank lines are ignored and lines which are not valid JSON are skipped with a warning.
/// Bots which have never played a game are left out entirely. Provisional perfs and perfs
/// of unknown type are dropped, but still count as having played.
pub fn parse_online_bots(ndjson: &str, current_time: i64) -> OnlineBotInfo {
    let mut info = OnlineBotInfo {
        bot_perfs_by_perf_type: PerfType::all_except_unknown()
            .map(|perf_type| (perf_type, Vec::new()))
            .collect(),
        ..Default::default()
    };

    for (index, line) in ndjson.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let bot_user: BotUser = match serde_json::from_str(line) {
            Ok(bot_user) => bot_user,
            Err(e) => {
                warn!("Skipping line {} of the online bots feed: {}", index + 1, e);
                info.skipped_lines += 1;
                continue;
            }
        };

        if !bot_user.has_played() {
            debug!("Ignoring {}, no games played", bot_user.username);
            continue;
        }

        for (key, perf) in &bot_user.perfs {
            if perf.prov {
                continue;
            }

            // Unknown keys have no entry
            if let Some(bot_perfs) = info.bot_perfs_by_perf_type.get_mut(&PerfType::from_key(key)) {
                bot_perfs.push(BotPerf {
                    name: bot_user.username.clone(),
                    perf: LeaderboardPerf::from(perf)
                });
            }
        }

        info.bot_profiles_by_name.insert(
            bot_user.username.clone(),
            BotProfile::from_bot_user(&bot_user, current_time)
        );
    }

    info
}

/// Fetches and parses one snapshot of the online bots.
pub async fn get_online_bot_info<F: BotFeed>(feed: &F, current_time: i64) -> Result<OnlineBotInfo, FeedError> {
    let ndjson = feed.online_bots().await?;
    let info = parse_online_bots(&ndjson, current_time);

    info!(
        "Found {} online bots with games played, skipped {} unreadable lines",
        info.bot_profiles_by_name.len(),
        info.skipped_lines
    );

    Ok(info)
}
