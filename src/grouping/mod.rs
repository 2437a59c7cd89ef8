//! Case ordering and section grouping
//!
//! The merged result set is keyed by case id with no inherent order; a
//! readable report needs the cases laid out the way the testsuite numbers
//! them, with chapter and subsection headings above the first case of each
//! group. This module owns both halves of that:
//!
//! - [`CaseId`]: dotted-numeric ids with proper numeric ordering
//! - [`order_case_ids`]: a deterministic sorted pass over any id collection
//! - [`Sections`] / [`EmissionState`]: longest-prefix title lookup with
//!   once-per-pass header emission
//!
//! ```
//! use wsmerge::grouping::{order_case_ids, CaseId, EmissionState, Sections};
//!
//! let ids = ["6.10", "6.2", "13.7", "2"]
//!     .iter()
//!     .map(|s| CaseId::parse(s).unwrap());
//!
//! let ordered = order_case_ids(ids);
//! let rendered: Vec<String> = ordered.iter().map(|c| c.to_string()).collect();
//! assert_eq!(rendered, ["2", "6.2", "6.10", "13.7"]);
//!
//! let sections = Sections::builtin();
//! let mut state = EmissionState::new();
//! for case in &ordered {
//!     if let Some(header) = sections.header_for(case, &mut state) {
//!         println!("== {} ==", header.title);
//!     }
//!     println!("{}", case);
//! }
//! ```

pub mod case_id;
pub mod sections;

pub use case_id::CaseId;
pub use sections::{EmissionState, Section, SectionHeader, Sections};

/// Sort case ids into dotted-version order.
///
/// Output is strictly increasing: duplicates collapse, and the result is
/// identical for any iteration order of the same input set.
pub fn order_case_ids<I: IntoIterator<Item = CaseId>>(ids: I) -> Vec<CaseId> {
    let mut ordered: Vec<CaseId> = ids.into_iter().collect();
    ordered.sort();
    ordered.dedup();
    ordered
}
