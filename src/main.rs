use bot_leaderboard::{
    api::LichessClient,
    args::Args,
    leaderboard_generator::LeaderboardGenerator,
    model::data_generator::GeneratorError,
    storage::real_file_system::RealFileSystem
};
use chrono::Utc;
use clap::Parser;
use std::{process::ExitCode, time::Duration};
use tracing::{error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args).await {
        Ok(generation_number) => {
            info!("Leaderboard generation {} complete", generation_number);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Leaderboard generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

async fn run(args: &Args) -> Result<u64, GeneratorError> {
    let client = LichessClient::new(&args.feed_url, Duration::from_secs(args.timeout_secs))?;
    let file_system = RealFileSystem::new(&args.output_dir);
    info!("Using output directory {}", file_system.root().display());

    LeaderboardGenerator::new(&client, &file_system)
        .generate_leaderboards(Utc::now().timestamp())
        .await
}
