use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::Path,
};

use mx_numplan_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the whole file as UTF-8, or `None` when it does not exist yet.
    pub fn read_optional(path: &Path) -> InfraResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InfrastructureError::FileRead { path: path.to_path_buf(), source }),
        }
    }
}
