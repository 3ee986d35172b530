pub mod file_paths;
pub mod in_memory_file_system;
pub mod leaderboard_store;
pub mod real_file_system;
pub mod write_batch;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("could not read or write JSON at {path}: {source}")]
    Json { path: String, source: serde_json::Error },
    #[error("invalid generation number in {path}: {source}")]
    GenerationNumber {
        path: String,
        source: std::num::ParseIntError
    }
}

/// A store of text files keyed by their path relative to the output directory.
pub trait FileSystem {
    /// Returns `None` if the file does not exist.
    fn read_file(&self, path: &str) -> Result<Option<String>, StorageError>;

    /// Creates or replaces the file, along with any missing parent directories.
    fn write_file(&self, path: &str, contents: &str) -> Result<(), StorageError>;
}
