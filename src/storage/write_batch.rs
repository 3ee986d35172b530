use crate::{
    storage::{FileSystem, StorageError},
    utils::progress_utils::progress_bar
};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

/// Files waiting to be written.
///
/// Everything a generation produces is staged here first, so a failure anywhere before
/// `flush` leaves the output directory untouched.
#[derive(Debug, Default)]
pub struct WriteBatch {
    writes: IndexMap<String, String>
}

impl WriteBatch {
    pub fn new() -> WriteBatch {
        WriteBatch::default()
    }

    /// Staging the same path twice keeps the later contents.
    pub fn stage(&mut self, path: String, contents: String) {
        self.writes.insert(path, contents);
    }

    /// Stages `value` as pretty-printed JSON.
    pub fn stage_json<T: Serialize + ?Sized>(&mut self, path: String, value: &T) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
            path: path.clone(),
            source
        })?;
        self.stage(path, contents);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn contents(&self, path: &str) -> Option<&str> {
        self.writes.get(path).map(String::as_str)
    }

    /// Writes every staged file in staging order and returns how many were written.
    pub fn flush<S: FileSystem>(self, file_system: &S) -> Result<usize, StorageError> {
        let count = self.writes.len();
        let bar = progress_bar(count as u64, "Writing leaderboard files".to_string());

        for (path, contents) in self.writes {
            file_system.write_file(&path, &contents)?;
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = bar {
            bar.finish();
        }

        info!("Wrote {} files", count);
        Ok(count)
    }
}
