// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use mx_numplan_shared_kernel::{InfraResult, InfrastructureError};
use serde::Serialize;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let write_err =
            |source| InfrastructureError::FileWrite { path: path.to_path_buf(), source };
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp).map_err(write_err)?;
        let mut w = BufWriter::new(file);
        w.write_all(data).map_err(write_err)?;
        w.flush().map_err(write_err)?;
        let _ = w.get_ref().sync_all();

        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(InfrastructureError::FileSystemOperation {
                operation: "rename".to_string(),
                path: path.to_path_buf(),
                source,
            });
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    /// Serialize `value` as pretty JSON and write it atomically.
    pub fn write_json<T: Serialize>(path: &Path, value: &T) -> InfraResult<()> {
        let mut data = serde_json::to_vec_pretty(value)?;
        data.push(b'\n');
        Self::atomic_write(path, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        FileWriter::atomic_write(&path, b"old").unwrap();
        FileWriter::write_json(&path, &vec!["a", "b"]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"a\""));
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
