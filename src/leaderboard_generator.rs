use crate::{
    api::BotFeed,
    model::data_generator::{DataGenerator, GeneratorError},
    page::HtmlGenerator,
    storage::{
        file_paths::{bot_profiles_path, data_path, generation_number_path, html_path},
        leaderboard_store::load_generation_number,
        write_batch::WriteBatch,
        FileSystem
    }
};
use std::time::Instant;
use tracing::info;

/// Runs one complete generation: fetch, rank, render, then save everything at once.
pub struct LeaderboardGenerator<'a, F: BotFeed, S: FileSystem> {
    feed: &'a F,
    file_system: &'a S
}

impl<'a, F: BotFeed, S: FileSystem> LeaderboardGenerator<'a, F, S> {
    pub fn new(feed: &'a F, file_system: &'a S) -> LeaderboardGenerator<'a, F, S> {
        LeaderboardGenerator { feed, file_system }
    }

    /// Returns the number of the generation which was written.
    ///
    /// Nothing is written unless every step before the final flush succeeds.
    pub async fn generate_leaderboards(&self, current_time: i64) -> Result<u64, GeneratorError> {
        let start = Instant::now();
        info!("Generating leaderboards...");

        let generation_number = load_generation_number(self.file_system)? + 1;
        let data = DataGenerator::new(self.feed, self.file_system)
            .generate_leaderboard_data(current_time)
            .await?;

        let mut batch = WriteBatch::new();
        batch.stage_json(bot_profiles_path(), &data.bot_profiles_sorted())?;
        for (perf_type, rows) in &data.ranked_rows_by_perf_type {
            batch.stage_json(data_path(*perf_type), rows)?;
            info!("{}: {} ranked bots", perf_type, data.ranked_count(*perf_type));
        }

        for (name, html) in HtmlGenerator::new(current_time)?.generate_leaderboard_html(&data)? {
            batch.stage(html_path(&name), html);
        }

        // Written last so an interrupted flush is not counted
        batch.stage(generation_number_path(), generation_number.to_string());
        batch.flush(self.file_system)?;

        info!(
            "Finished generation {} in {:.2}s",
            generation_number,
            start.elapsed().as_secs_f64()
        );

        Ok(generation_number)
    }
}
