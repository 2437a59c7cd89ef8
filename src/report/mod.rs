//! Report generation for merged results
//!
//! This module provides output formatters for merged conformance results:
//!
//! - **HTML**: self-contained report with per-implementation summary cards
//!   and section-grouped result tables
//! - **JSON**: the merged mapping, machine-readable, for feeding other tools
//! - **CSV**: flat rows for spreadsheets
//!
//! # Usage
//!
//! ```ignore
//! use wsmerge::report;
//!
//! // Picks the format from the extension
//! report::generate("report.html", &results)?;  // HTML
//! report::generate("merged.json", &results)?;  // JSON
//! report::generate("cases.csv", &results)?;    // CSV
//! ```

pub mod csv;
pub mod html;
pub mod json;

use crate::model::{AgentResults, Behavior, SuiteResults};
use serde::Serialize;
use std::io;
use std::path::Path;

/// Generate a report in the appropriate format based on file extension.
pub fn generate<P: AsRef<Path>>(path: P, results: &SuiteResults) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;

    match ext.as_str() {
        "json" => json::write(&mut file, results),
        "csv" => csv::write(&mut file, results),
        _ => html::write(&mut file, results),
    }
}

/// Behavior counts for one implementation (or a whole merged set).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub pass: usize,
    pub non_strict: usize,
    pub failed: usize,
    pub informational: usize,
    pub unimplemented: usize,
    pub other: usize,
}

impl Summary {
    pub fn from_cases(cases: &AgentResults) -> Self {
        let mut summary = Self::default();
        summary.total = cases.len();

        for case in cases.values() {
            match case.behavior {
                Behavior::Ok => summary.pass += 1,
                Behavior::NonStrict => summary.non_strict += 1,
                Behavior::Informational => summary.informational += 1,
                Behavior::Unimplemented => summary.unimplemented += 1,
                b if b.is_failure() => summary.failed += 1,
                _ => summary.other += 1,
            }
        }

        summary
    }

    /// Counts across every implementation in the merged set.
    pub fn from_suite(results: &SuiteResults) -> Self {
        let mut summary = Self::default();
        for cases in results.values() {
            let agent = Self::from_cases(cases);
            summary.total += agent.total;
            summary.pass += agent.pass;
            summary.non_strict += agent.non_strict;
            summary.failed += agent.failed;
            summary.informational += agent.informational;
            summary.unimplemented += agent.unimplemented;
            summary.other += agent.other;
        }
        summary
    }
}
