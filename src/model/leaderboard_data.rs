use crate::model::{
    constants::UNRANKED,
    structures::{bot_profile::BotProfile, leaderboard_row::LeaderboardRow, perf_type::PerfType}
};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashMap;

/// The result of one generation: every known profile plus each perf type's ranked rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardData {
    pub bot_profiles_by_name: HashMap<String, BotProfile>,
    /// In `PerfType` order
    pub ranked_rows_by_perf_type: IndexMap<PerfType, Vec<LeaderboardRow>>
}

impl LeaderboardData {
    pub fn bot_profile(&self, name: &str) -> Option<&BotProfile> {
        self.bot_profiles_by_name.get(name)
    }

    pub fn bot_profiles_sorted(&self) -> Vec<&BotProfile> {
        self.bot_profiles_by_name
            .values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    /// All rows for the perf type in ranking order, unranked rows included.
    pub fn ranked_rows(&self, perf_type: PerfType) -> &[LeaderboardRow] {
        self.ranked_rows_by_perf_type
            .get(&perf_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Rows shown on the leaderboard.
    pub fn visible_rows(&self, perf_type: PerfType) -> impl Iterator<Item = &LeaderboardRow> {
        self.ranked_rows(perf_type)
            .iter()
            .filter(|row| row.rank_info.rank != UNRANKED)
    }

    pub fn ranked_count(&self, perf_type: PerfType) -> usize {
        self.visible_rows(perf_type).count()
    }

    pub fn leader(&self, perf_type: PerfType) -> Option<&LeaderboardRow> {
        self.visible_rows(perf_type).next()
    }
}
