//! Atomic output file writes.
//!
//! # Implementation Strategy
//!
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! [`OutputFile`] owns the temporary file. If it is dropped before
//! [`OutputFile::commit`] succeeds, the temporary file is removed and the
//! target is left untouched, whatever path the caller took out.
//!
//! Source and destination must be on the same filesystem for the rename to
//! be atomic, which holds because the temporary file is a sibling.

use crate::error::{MetagenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// An output file being written. Nothing is visible at the target path
/// until [`OutputFile::commit`] returns `Ok`.
#[derive(Debug)]
pub struct OutputFile {
    target: PathBuf,
    temp_path: PathBuf,
    file: Option<File>,
}

impl OutputFile {
    /// Open a temporary file next to `target`.
    pub fn create<P: AsRef<Path>>(target: P) -> Result<Self> {
        let target = target.as_ref().to_path_buf();

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                MetagenError::UserError(format!(
                    "failed to create output directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp_path = temp_path_for(&target)?;
        let file = File::create(&temp_path).map_err(|e| {
            MetagenError::UserError(format!(
                "failed to create temporary file '{}': {}",
                temp_path.display(),
                e
            ))
        })?;

        Ok(Self {
            target,
            temp_path,
            file: Some(file),
        })
    }

    /// Append bytes to the temporary file.
    pub fn write_all(&mut self, content: &[u8]) -> Result<()> {
        let file = self.file.as_mut().ok_or_else(|| {
            MetagenError::UserError("output file is already closed".to_string())
        })?;

        file.write_all(content).map_err(|e| {
            MetagenError::UserError(format!("failed to write to temporary file: {}", e))
        })
    }

    /// Sync the temporary file and move it over the target.
    pub fn commit(mut self) -> Result<()> {
        let file = self.file.take().ok_or_else(|| {
            MetagenError::UserError("output file is already closed".to_string())
        })?;

        file.sync_all().map_err(|e| {
            MetagenError::UserError(format!("failed to sync temporary file to disk: {}", e))
        })?;
        drop(file);

        fs::rename(&self.temp_path, &self.target).map_err(|e| {
            MetagenError::UserError(format!(
                "failed to replace '{}': {}",
                self.target.display(),
                e
            ))
        })?;

        // Renamed away; nothing left for Drop to clean up.
        self.temp_path = PathBuf::new();
        Ok(())
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        self.file.take();
        if !self.temp_path.as_os_str().is_empty() {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let mut output = OutputFile::create(path)?;
    output.write_all(content.as_bytes())?;
    output.commit()
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new(""));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            MetagenError::UserError(format!(
                "invalid output file path '{}'",
                target.display()
            ))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mirror.hh");

        atomic_write_file(&file_path, "namespace mirror {}\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "namespace mirror {}\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mirror.hh");
        fs::write(&file_path, "stale output").unwrap();

        atomic_write_file(&file_path, "fresh output").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh output");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("src").join("gen").join("mirror.hh");

        atomic_write_file(&file_path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_commit_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mirror.hh");

        atomic_write_file(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join(".mirror.hh.tmp").exists());
    }

    #[test]
    fn test_dropped_output_is_discarded() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mirror.hh");
        fs::write(&file_path, "previous").unwrap();

        {
            let mut output = OutputFile::create(&file_path).unwrap();
            output.write_all(b"half-written").unwrap();
            assert!(temp_dir.path().join(".mirror.hh.tmp").exists());
        }

        assert!(!temp_dir.path().join(".mirror.hh.tmp").exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "previous");
    }

    #[test]
    fn test_dropped_output_never_creates_target() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mirror.hh");

        drop(OutputFile::create(&file_path).unwrap());

        assert!(!file_path.exists());
    }

    #[test]
    fn test_multiple_writes_are_concatenated() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.txt");

        let mut output = OutputFile::create(&file_path).unwrap();
        output.write_all(b"A\n").unwrap();
        output.write_all(b"7\n").unwrap();
        output.write_all(b"B\n").unwrap();
        output.commit().unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "A\n7\nB\n");
    }

    #[test]
    fn test_temp_path_for() {
        let temp = temp_path_for(Path::new("/some/path/file.hh")).unwrap();
        assert_eq!(temp, Path::new("/some/path/.file.hh.tmp"));

        let temp = temp_path_for(Path::new("file.hh")).unwrap();
        assert_eq!(temp, Path::new(".file.hh.tmp"));
    }

    #[test]
    fn test_temp_path_rejects_directory_like_target() {
        assert!(temp_path_for(Path::new("/")).is_err());
    }
}
