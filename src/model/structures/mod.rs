pub mod bot_profile;
pub mod leaderboard_perf;
pub mod leaderboard_row;
pub mod perf_type;
pub mod rank_info;
