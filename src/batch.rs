//! Parallel console removal over an explicit list of files.
//!
//! Every file runs through its own parse/collect/rewrite pipeline on the
//! rayon pool. A failure is recorded for that file and the rest carry on.

use crate::file::{process_file, FileError, FileOutcome, WriteMode};
use crate::strip::ConsoleStripper;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Per-file results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub result: Result<FileOutcome, FileError>,
}

impl BatchReport {
    pub fn modified(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes().filter(|outcome| outcome.is_modified())
    }

    pub fn unchanged(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes().filter(|outcome| !outcome.is_modified())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &FileError)> {
        self.entries.iter().filter_map(|entry| match &entry.result {
            Err(error) => Some((entry.path.as_path(), error)),
            Ok(_) => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Total bytes removed across all modified files.
    pub fn bytes_removed(&self) -> usize {
        self.modified().map(FileOutcome::bytes_removed).sum()
    }

    fn outcomes(&self) -> impl Iterator<Item = &FileOutcome> {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().ok())
    }
}

/// Strip every file in `paths`, in parallel.
pub fn strip_files<P>(paths: &[P], stripper: &ConsoleStripper, mode: WriteMode) -> BatchReport
where
    P: AsRef<Path> + Sync,
{
    let entries = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = process_file(path, stripper, mode);
            if let Err(e) = &result {
                warn!(path = %path.display(), error = %e, "failed to remove logging statements");
            }
            BatchEntry {
                path: path.to_path_buf(),
                result,
            }
        })
        .collect();

    BatchReport { entries }
}
