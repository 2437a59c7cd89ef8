//! wsmerge - Merge WebSocket conformance results into one report
//!
//! An Autobahn-style conformance run leaves behind one `index.json` per
//! harness invocation: a nested mapping of implementation name to test case
//! id to result record. wsmerge collects any number of those files, merges
//! them, and renders a single report with the cases grouped under the
//! testsuite's numbered chapter and subsection headings.
//!
//! # Why a dedicated case id type
//!
//! Case ids are dotted numbers ("1.1.1" through "13.7.18") and must order
//! numerically per component: "6.2" comes before "6.10". Sorting the raw
//! strings puts "6.10" first, which scrambles the report. [`grouping::CaseId`]
//! parses ids once and orders them correctly everywhere they are used.
//!
//! # Quick Start
//!
//! ```no_run
//! use wsmerge::{merge, report};
//!
//! # fn main() -> std::io::Result<()> {
//! let files = merge::collect_input_files(&["results".into()])?;
//! let parts: std::io::Result<Vec<_>> =
//!     files.iter().map(|p| merge::load_run_file(p)).collect();
//! let merged = merge::merge_all(parts?);
//!
//! report::generate("report.html", &merged)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`grouping`]: case id ordering and section header lookup
//! - [`model`]: the harness result records
//! - [`merge`]: collecting and folding run files
//! - [`report`]: output formatters (HTML, JSON, CSV)

pub mod grouping;
pub mod merge;
pub mod model;
pub mod report;

pub use grouping::{order_case_ids, CaseId, EmissionState, SectionHeader, Sections};
pub use model::{Behavior, CaseResult, SuiteResults};
pub use report::Summary;
