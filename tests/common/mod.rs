use bot_leaderboard::{
    leaderboard_generator::LeaderboardGenerator,
    model::{
        data_generator::GeneratorError,
        structures::{leaderboard_row::LeaderboardRow, perf_type::PerfType}
    },
    storage::{file_paths, FileSystem},
    utils::test_utils::FakeBotFeed
};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Runs one full generation against `file_system` with a feed made of `lines`.
pub async fn run_cycle<S: FileSystem>(
    file_system: &S,
    lines: &[String],
    current_time: i64
) -> Result<u64, GeneratorError> {
    let feed = FakeBotFeed::from_lines(lines);
    LeaderboardGenerator::new(&feed, file_system)
        .generate_leaderboards(current_time)
        .await
}

/// The rows saved for a perf type by the last generation.
pub fn saved_rows<S: FileSystem>(file_system: &S, perf_type: PerfType) -> Vec<LeaderboardRow> {
    let contents = file_system
        .read_file(&file_paths::data_path(perf_type))
        .unwrap()
        .expect("Expected a saved data file");

    serde_json::from_str(&contents).unwrap()
}
