//! Collecting and merging run files
//!
//! A conformance run leaves an `index.json` per harness invocation, usually
//! one directory per implementation or per run. This module finds those
//! files under the paths the operator gave, parses each one, and folds them
//! into a single [`SuiteResults`].
//!
//! Merge order is the sorted file path order, and on a duplicate
//! (implementation, case) pair the later file wins. Sorting first makes the
//! collision outcome reproducible no matter how the filesystem happens to
//! enumerate entries.

use crate::model::SuiteResults;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Gather result files from the given paths.
///
/// Directories are walked recursively for `*.json`; files are taken as-is.
/// The returned list is sorted and deduplicated.
pub fn collect_input_files(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input) {
                let entry = entry?;
                let path = entry.path();
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false);
                if entry.file_type().is_file() && is_json {
                    files.push(path.to_path_buf());
                }
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such file or directory", input.display()),
            ));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Parse one run file into the implementation → case → result mapping.
///
/// Read and parse errors carry the offending path so the operator sees
/// which of possibly many inputs was bad.
pub fn load_run_file(path: &Path) -> io::Result<SuiteResults> {
    let data = std::fs::read(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;

    serde_json::from_slice(&data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", path.display(), e),
        )
    })
}

/// Fold parsed run files into one result set, in the order given.
///
/// Later entries overwrite earlier ones for the same implementation and
/// case id.
pub fn merge_all<I: IntoIterator<Item = SuiteResults>>(parts: I) -> SuiteResults {
    let mut merged = SuiteResults::new();
    for part in parts {
        for (agent, cases) in part {
            merged.entry(agent).or_default().extend(cases);
        }
    }
    merged
}
