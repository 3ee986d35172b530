use crate::storage::{FileSystem, StorageError};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf}
};
use tempfile::NamedTempFile;

/// Files stored under a root directory on disk.
pub struct RealFileSystem {
    root: PathBuf
}

impl RealFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> RealFileSystem {
        RealFileSystem { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn io_error(path: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_string(),
        source
    }
}

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.root.join(path)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(path)(e))
        }
    }

    /// Writes to a temporary file in the same directory, then renames it over the target,
    /// so a crash never leaves a half-written file behind.
    fn write_file(&self, path: &str, contents: &str) -> Result<(), StorageError> {
        let full_path = self.root.join(path);
        let parent = full_path.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent).map_err(io_error(path))?;

        let mut temp_file = NamedTempFile::new_in(parent).map_err(io_error(path))?;
        temp_file.write_all(contents.as_bytes()).map_err(io_error(path))?;
        // A failed persist hands back the temp file, which is deleted on drop
        temp_file.persist(&full_path).map_err(|e| io_error(path)(e.error))?;

        Ok(())
    }
}
