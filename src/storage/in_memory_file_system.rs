use crate::storage::{FileSystem, StorageError};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError}
};

/// A file system kept entirely in memory, for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
    files: Mutex<HashMap<String, String>>
}

impl InMemoryFileSystem {
    pub fn new() -> InMemoryFileSystem {
        InMemoryFileSystem::default()
    }

    fn files(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files().contains_key(path)
    }

    pub fn file_count(&self) -> usize {
        self.files().len()
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files().get(path).cloned()
    }
}

impl FileSystem for InMemoryFileSystem {
    fn read_file(&self, path: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(path))
    }

    fn write_file(&self, path: &str, contents: &str) -> Result<(), StorageError> {
        self.files().insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
