//! In-place console removal for files on disk.
//!
//! The dialect comes from the file extension. A file is only written when
//! the engine reports a modification, and only if its content still hashes
//! to what was processed. Writes are atomic (tempfile + fsync + rename).

use crate::strip::{ConsoleStripper, RemovalError, RemovalResult};
use crate::ts::Dialect;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use xxhash_rust::xxh3::xxh3_64;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },

    #[error("unsupported file type for console removal: {path} (expected .js, .jsx, .mjs, .cjs, .ts, .mts, .cts or .tsx)")]
    UnsupportedExtension { path: PathBuf },

    #[error("{path} changed while it was being processed")]
    ConcurrentModification { path: PathBuf },

    #[error(transparent)]
    Removal(#[from] RemovalError),
}

impl FileError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "FileOutcome reports whether the file was rewritten"]
pub enum FileOutcome {
    /// Logging statements were removed (and written, unless checking).
    Modified {
        path: PathBuf,
        statements_removed: usize,
        bytes_before: usize,
        bytes_after: usize,
    },
    /// Nothing to remove; the file was not touched.
    Unchanged { path: PathBuf },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Modified { path, .. } | FileOutcome::Unchanged { path } => path,
        }
    }

    pub fn is_modified(&self) -> bool {
        matches!(self, FileOutcome::Modified { .. })
    }

    /// Bytes removed from the file; zero when unchanged.
    pub fn bytes_removed(&self) -> usize {
        match self {
            FileOutcome::Modified {
                bytes_before,
                bytes_after,
                ..
            } => bytes_before.saturating_sub(*bytes_after),
            FileOutcome::Unchanged { .. } => 0,
        }
    }
}

/// Whether a run writes its results back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    /// Compute outcomes only.
    Check,
}

/// Remove logging statements from `path` in place.
pub fn strip_file(path: &Path, stripper: &ConsoleStripper) -> Result<FileOutcome, FileError> {
    process_file(path, stripper, WriteMode::Write)
}

/// Report what [`strip_file`] would do without writing anything.
pub fn check_file(path: &Path, stripper: &ConsoleStripper) -> Result<FileOutcome, FileError> {
    process_file(path, stripper, WriteMode::Check)
}

pub fn process_file(
    path: &Path,
    stripper: &ConsoleStripper,
    mode: WriteMode,
) -> Result<FileOutcome, FileError> {
    let dialect = Dialect::from_path(path).ok_or_else(|| FileError::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;

    let original = fs::read(path).map_err(|e| FileError::io(path, e))?;
    let source = std::str::from_utf8(&original).map_err(|_| FileError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    match stripper.strip_as(source, &display_name(path), dialect)? {
        RemovalResult::Unchanged => Ok(FileOutcome::Unchanged {
            path: path.to_path_buf(),
        }),
        RemovalResult::Modified {
            text,
            statements_removed,
        } => {
            if mode == WriteMode::Write {
                write_if_unchanged(path, xxh3_64(&original), text.as_bytes())?;
                info!(
                    path = %path.display(),
                    statements_removed,
                    bytes_removed = original.len().saturating_sub(text.len()),
                    "rewrote file without logging statements"
                );
            }
            Ok(FileOutcome::Modified {
                path: path.to_path_buf(),
                statements_removed,
                bytes_before: original.len(),
                bytes_after: text.len(),
            })
        }
    }
}

/// Basename used in diagnostics.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_if_unchanged(path: &Path, expected_hash: u64, content: &[u8]) -> Result<(), FileError> {
    let current = fs::read(path).map_err(|e| FileError::io(path, e))?;
    if xxh3_64(&current) != expected_hash {
        return Err(FileError::ConcurrentModification {
            path: path.to_path_buf(),
        });
    }
    atomic_write(path, content).map_err(|e| FileError::io(path, e))
}

/// Atomic file write: tempfile + fsync + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    // Same directory keeps the rename on one filesystem
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let permissions = fs::metadata(path)?.permissions();
    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.as_file().set_permissions(permissions)?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
