use crate::{
    api::{BotFeed, FeedError},
    model::{
        feed_processing::{get_online_bot_info, OnlineBotInfo},
        leaderboard_data::LeaderboardData,
        leaderboard_tracker::{merge_bot_profiles, LeaderboardTracker},
        structures::{leaderboard_row::LeaderboardRow, perf_type::PerfType}
    },
    storage::{
        leaderboard_store::{load_all_leaderboard_rows, load_bot_profiles},
        FileSystem, StorageError
    }
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Failed to render leaderboard pages: {0}")]
    Render(#[from] minijinja::Error)
}

/// Combines the previous generation with the current feed into fresh leaderboard data.
pub struct DataGenerator<'a, F: BotFeed, S: FileSystem> {
    feed: &'a F,
    file_system: &'a S
}

impl<'a, F: BotFeed, S: FileSystem> DataGenerator<'a, F, S> {
    pub fn new(feed: &'a F, file_system: &'a S) -> DataGenerator<'a, F, S> {
        DataGenerator { feed, file_system }
    }

    pub async fn generate_leaderboard_data(&self, current_time: i64) -> Result<LeaderboardData, GeneratorError> {
        let previous_profiles = load_bot_profiles(self.file_system)?;
        let previous_rows_by_perf_type = load_all_leaderboard_rows(self.file_system)?;
        info!("Loaded {} known bot profiles", previous_profiles.len());

        let OnlineBotInfo {
            bot_profiles_by_name: current_profiles,
            bot_perfs_by_perf_type,
            ..
        } = get_online_bot_info(self.feed, current_time).await?;

        let bot_profiles_by_name = merge_bot_profiles(previous_profiles, current_profiles);
        let tracker = LeaderboardTracker::new(&bot_profiles_by_name, current_time);

        // Perf types are independent of each other
        let ranked_rows: Vec<(PerfType, Vec<LeaderboardRow>)> = PerfType::all_except_unknown()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|perf_type| {
                let previous_rows = previous_rows_by_perf_type
                    .get(&perf_type)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let current_bot_perfs = bot_perfs_by_perf_type
                    .get(&perf_type)
                    .map(Vec::as_slice)
                    .unwrap_or_default();

                let updates = tracker.create_updates(previous_rows, current_bot_perfs);
                let rows = tracker.create_ranked_rows(updates);
                debug!(
                    "{}: {} previous rows, {} online, {} rows",
                    perf_type,
                    previous_rows.len(),
                    current_bot_perfs.len(),
                    rows.len()
                );

                (perf_type, rows)
            })
            .collect();

        Ok(LeaderboardData {
            bot_profiles_by_name,
            ranked_rows_by_perf_type: ranked_rows.into_iter().collect()
        })
    }
}
