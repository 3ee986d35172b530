pub mod constants;
pub mod data_generator;
pub mod feed_processing;
pub mod leaderboard_data;
pub mod leaderboard_tracker;
pub mod leaderboard_update;
pub mod structures;
