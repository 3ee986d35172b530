use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FEED_URL: &str = "https://lichess.org/api/bot/online";

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Bot Leaderboard",
    long_about = "Generates leaderboards for the bots currently playing on Lichess"
)]
pub struct Args {
    /// Returns one JSON document per online bot, one per line
    #[arg(short, long, env, default_value = DEFAULT_FEED_URL, help = "Online bots feed URL")]
    pub feed_url: String,

    /// Leaderboard data is read from and written to `leaderboard_data/`
    /// and pages to `leaderboard_html/` under this directory.
    #[arg(short, long, env, default_value = ".", help = "Output directory")]
    pub output_dir: PathBuf,

    #[arg(short, long, env, default_value_t = 10, help = "Feed request timeout in seconds")]
    pub timeout_secs: u64,

    /// A level (trace, debug, info, warn, error) or a full filter such as "info,reqwest=warn"
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = parse_log_filter,
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

fn parse_log_filter(filter: &str) -> Result<String, String> {
    EnvFilter::try_new(filter)
        .map(|_| filter.to_string())
        .map_err(|e| e.to_string())
}
