use std::fs;

use rdp_common::{RdpError, Result};

/// Filesystem-metadata abstraction used to size pattern-addressed sources.
///
/// Implementations are backend-specific (local disk here; an object store or
/// distributed filesystem in a deployed orchestrator).
pub trait FileSystemMetadata: Send + Sync {
    /// Expands a glob-style path pattern to the concrete objects it matches.
    ///
    /// # Errors
    /// Returns an error for malformed patterns or metadata-service failures.
    fn expand(&self, pattern: &str) -> Result<Vec<String>>;

    /// Content length in bytes of one concrete object.
    ///
    /// # Errors
    /// Returns an error if the object does not exist or cannot be stat'd.
    fn content_length(&self, path: &str) -> Result<u64>;
}

/// Local-disk implementation backed by `glob` and `std::fs::metadata`.
pub struct LocalFsMetadata;

impl LocalFsMetadata {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFsMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemMetadata for LocalFsMetadata {
    fn expand(&self, pattern: &str) -> Result<Vec<String>> {
        let entries = glob::glob(pattern)
            .map_err(|e| RdpError::InvalidConfig(format!("invalid path pattern {pattern}: {e}")))?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| RdpError::Io(e.into_error()))?;
            // Directories matched by the pattern carry no content of their own.
            if path.is_file() {
                paths.push(path.to_string_lossy().into_owned());
            }
        }
        Ok(paths)
    }

    fn content_length(&self, path: &str) -> Result<u64> {
        Ok(fs::metadata(path)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    fn scratch_dir(prefix: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn write_file(dir: &PathBuf, name: &str, bytes: usize) {
        let mut f = File::create(dir.join(name)).expect("create file");
        f.write_all(&vec![0_u8; bytes]).expect("write file");
    }

    #[test]
    fn expand_matches_only_files() {
        let dir = scratch_dir("rdp_fsmeta_expand");
        write_file(&dir, "part-0.dat", 10);
        write_file(&dir, "part-1.dat", 20);
        fs::create_dir_all(dir.join("part-nested.dat")).expect("create subdir");

        let fs_meta = LocalFsMetadata::new();
        let pattern = format!("{}/part-*.dat", dir.display());
        let mut paths = fs_meta.expand(&pattern).expect("expand");
        paths.sort();
        assert_eq!(paths.len(), 2);

        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn content_length_reports_file_size() {
        let dir = scratch_dir("rdp_fsmeta_len");
        write_file(&dir, "part-0.dat", 137);

        let fs_meta = LocalFsMetadata::new();
        let path = dir.join("part-0.dat").to_string_lossy().into_owned();
        assert_eq!(fs_meta.content_length(&path).expect("stat"), 137);

        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn content_length_fails_for_missing_file() {
        let fs_meta = LocalFsMetadata::new();
        assert!(fs_meta
            .content_length("/definitely/not/a/real/path.dat")
            .is_err());
    }
}
