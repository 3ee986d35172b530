pub mod api;
pub mod args;
pub mod leaderboard_generator;
pub mod model;
pub mod page;
pub mod storage;
pub mod utils;
