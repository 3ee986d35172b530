use crate::{
    model::structures::{bot_profile::BotProfile, leaderboard_row::LeaderboardRow, perf_type::PerfType},
    storage::{file_paths, FileSystem, StorageError}
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

/// Reads a JSON file, treating a missing or blank file as the default value.
fn load_json<T, S>(file_system: &S, path: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
    S: FileSystem
{
    match file_system.read_file(path)? {
        Some(contents) if !contents.trim().is_empty() => {
            serde_json::from_str(&contents).map_err(|source| StorageError::Json {
                path: path.to_string(),
                source
            })
        }
        _ => Ok(T::default())
    }
}

/// Every profile ever saved, keyed by name. Loaded profiles are neither new nor online.
pub fn load_bot_profiles<S: FileSystem>(file_system: &S) -> Result<HashMap<String, BotProfile>, StorageError> {
    let profiles: Vec<BotProfile> = load_json(file_system, &file_paths::bot_profiles_path())?;
    debug!("Loaded {} bot profiles", profiles.len());

    Ok(profiles
        .into_iter()
        .map(|profile| (profile.name.clone(), profile))
        .collect())
}

/// The rows saved by the previous generation, in ranking order.
pub fn load_leaderboard_rows<S: FileSystem>(
    file_system: &S,
    perf_type: PerfType
) -> Result<Vec<LeaderboardRow>, StorageError> {
    load_json(file_system, &file_paths::data_path(perf_type))
}

pub fn load_all_leaderboard_rows<S: FileSystem>(
    file_system: &S
) -> Result<IndexMap<PerfType, Vec<LeaderboardRow>>, StorageError> {
    PerfType::all_except_unknown()
        .map(|perf_type| load_leaderboard_rows(file_system, perf_type).map(|rows| (perf_type, rows)))
        .collect()
}

/// How many generations have completed. Zero if none have.
pub fn load_generation_number<S: FileSystem>(file_system: &S) -> Result<u64, StorageError> {
    let path = file_paths::generation_number_path();
    match file_system.read_file(&path)? {
        Some(contents) if !contents.trim().is_empty() => contents
            .trim()
            .parse()
            .map_err(|source| StorageError::GenerationNumber { path, source }),
        _ => Ok(0)
    }
}
