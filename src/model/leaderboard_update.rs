use crate::model::{
    constants::{TWO_WEEKS, UNRANKED},
    structures::{
        leaderboard_perf::{BotPerf, LeaderboardPerf},
        leaderboard_row::LeaderboardRow,
        rank_info::RankInfo
    }
};

/// How a single bot's row changes between the previous generation and this one.
#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardUpdate {
    /// Ranked before, not in the current feed.
    PreviousRowOnly(LeaderboardRow),
    /// In the current feed for the first time.
    CurrentBotPerfOnly(BotPerf),
    /// Ranked before and in the current feed.
    Full {
        previous_row: LeaderboardRow,
        current_bot_perf: BotPerf
    }
}

/// The better of two ranks. An unranked value carries no information.
pub fn best_rank(a: i32, b: i32) -> i32 {
    match (a, b) {
        (UNRANKED, b) => b,
        (a, UNRANKED) => a,
        (a, b) => a.min(b)
    }
}

impl LeaderboardUpdate {
    /// Panics if neither a previous row nor a current perf is given.
    pub fn create(previous_row: Option<LeaderboardRow>, current_bot_perf: Option<BotPerf>) -> LeaderboardUpdate {
        match (previous_row, current_bot_perf) {
            (Some(previous_row), Some(current_bot_perf)) => LeaderboardUpdate::Full {
                previous_row,
                current_bot_perf
            },
            (Some(previous_row), None) => LeaderboardUpdate::PreviousRowOnly(previous_row),
            (None, Some(current_bot_perf)) => LeaderboardUpdate::CurrentBotPerfOnly(current_bot_perf),
            (None, None) => panic!("Expected a previous row or a current bot perf")
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LeaderboardUpdate::PreviousRowOnly(row) => &row.name,
            LeaderboardUpdate::CurrentBotPerfOnly(bot_perf) => &bot_perf.name,
            LeaderboardUpdate::Full { current_bot_perf, .. } => &current_bot_perf.name
        }
    }

    /// The perf the new row will carry: the latest known one.
    pub fn perf(&self) -> &LeaderboardPerf {
        match self {
            LeaderboardUpdate::PreviousRowOnly(row) => &row.perf,
            LeaderboardUpdate::CurrentBotPerfOnly(bot_perf) => &bot_perf.perf,
            LeaderboardUpdate::Full { current_bot_perf, .. } => &current_bot_perf.perf
        }
    }

    pub fn rating(&self) -> i32 {
        self.perf().rating
    }

    pub fn rd(&self) -> i32 {
        self.perf().rd
    }

    pub fn prov(&self) -> bool {
        self.perf().prov
    }

    fn delta_games(&self) -> i32 {
        match self {
            LeaderboardUpdate::Full {
                previous_row,
                current_bot_perf
            } => current_bot_perf.perf.games - previous_row.perf.games,
            _ => 0
        }
    }

    /// The last time the bot is known to have played a game in this perf type.
    ///
    /// A bot seen for the first time is assumed to have just played.
    pub fn last_played(&self, current_time: i64) -> i64 {
        match self {
            LeaderboardUpdate::PreviousRowOnly(row) => row.rank_info.last_played,
            LeaderboardUpdate::CurrentBotPerfOnly(_) => current_time,
            LeaderboardUpdate::Full { previous_row, .. } => {
                if self.delta_games() > 0 {
                    current_time
                } else {
                    previous_row.rank_info.last_played
                }
            }
        }
    }

    /// Whether the perf itself qualifies for a rank. The bot's profile must be checked separately.
    pub fn is_eligible(&self, current_time: i64) -> bool {
        !self.prov() && current_time - self.last_played(current_time) <= TWO_WEEKS
    }

    pub fn into_leaderboard_row(self, rank: i32, current_time: i64) -> LeaderboardRow {
        let last_played = self.last_played(current_time);
        let delta_games = self.delta_games();

        match self {
            LeaderboardUpdate::PreviousRowOnly(row) => LeaderboardRow {
                rank_info: RankInfo {
                    rank,
                    delta_rank: row.rank_info.rank - rank,
                    delta_rating: 0,
                    delta_games: 0,
                    peak_rank: best_rank(row.rank_info.peak_rank, rank),
                    peak_rating: row.rank_info.peak_rating,
                    last_played
                },
                ..row
            },
            LeaderboardUpdate::CurrentBotPerfOnly(bot_perf) => LeaderboardRow {
                rank_info: RankInfo {
                    rank,
                    delta_rank: 0,
                    delta_rating: 0,
                    delta_games: 0,
                    peak_rank: rank,
                    peak_rating: bot_perf.perf.rating,
                    last_played
                },
                name: bot_perf.name,
                perf: bot_perf.perf
            },
            LeaderboardUpdate::Full {
                previous_row,
                current_bot_perf
            } => LeaderboardRow {
                rank_info: RankInfo {
                    rank,
                    // Moving up counts as positive, 3 -> 1 is +2
                    delta_rank: previous_row.rank_info.rank - rank,
                    delta_rating: current_bot_perf.perf.rating - previous_row.perf.rating,
                    delta_games,
                    peak_rank: best_rank(previous_row.rank_info.peak_rank, rank),
                    peak_rating: previous_row.rank_info.peak_rating.max(current_bot_perf.perf.rating),
                    last_played
                },
                name: current_bot_perf.name,
                perf: current_bot_perf.perf
            }
        }
    }
}
