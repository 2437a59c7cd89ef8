//! Test-suite section titles
//!
//! The Autobahn testsuite numbers its cases by chapter ("1 Framing",
//! "6 UTF-8 Handling") and, within most chapters, by subsection
//! ("7.1 Basic close behavior"). The harness output only carries the bare
//! case ids, so the report rebuilds the headings from a static table keyed
//! by id prefix.
//!
//! Lookup is longest-prefix-wins over whole components: case "7.1.2" finds
//! "7.1" when it is registered and falls back to "7" when it is not, and
//! "10.1" never matches the "1" chapter. [`EmissionState`] remembers which
//! prefixes a rendering pass has already printed so a section heading
//! appears once, above the first of its cases, rather than above every row.

use crate::grouping::CaseId;
use std::collections::{BTreeMap, HashSet};

/// One named group of cases sharing a dotted id prefix.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    /// Chapter this subsection belongs to; `None` for chapter-level entries.
    pub parent: Option<&'static str>,
}

/// Header titles to render above a case row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub parent: Option<&'static str>,
    pub title: &'static str,
}

/// Prefixes already rendered during one report pass.
///
/// Scoped to a single table: create a fresh one per pass, or headers that
/// should reappear in the next table get wrongly suppressed.
#[derive(Debug, Default)]
pub struct EmissionState {
    emitted: HashSet<CaseId>,
}

/// Section title table keyed by CaseId prefix.
#[derive(Debug)]
pub struct Sections {
    by_prefix: BTreeMap<CaseId, Section>,
}

/// Chapter and subsection titles of the Autobahn WebSocket testsuite,
/// as (prefix, chapter title, subsection title).
const SUITE_SECTIONS: &[(&str, Option<&str>, &str)] = &[
    ("1", None, "Framing"),
    ("1.1", Some("Framing"), "Text Messages"),
    ("1.2", Some("Framing"), "Binary Messages"),
    ("2", None, "Pings/Pongs"),
    ("3", None, "Reserved Bits"),
    ("4", None, "Opcodes"),
    ("4.1", Some("Opcodes"), "Non-control Opcodes"),
    ("4.2", Some("Opcodes"), "Control Opcodes"),
    ("5", None, "Fragmentation"),
    ("6", None, "UTF-8 Handling"),
    ("6.1", Some("UTF-8 Handling"), "Valid UTF-8 with zero payload fragments"),
    (
        "6.2",
        Some("UTF-8 Handling"),
        "Valid UTF-8 unfragmented, fragmented on code-points and within code-points",
    ),
    ("6.3", Some("UTF-8 Handling"), "Invalid UTF-8 differently fragmented"),
    ("6.4", Some("UTF-8 Handling"), "Fail-fast on invalid UTF-8"),
    ("7", None, "Close Handling"),
    ("7.1", Some("Close Handling"), "Basic close behavior (fuzzer initiated)"),
    (
        "7.3",
        Some("Close Handling"),
        "Close frame structure: payload length (fuzzer initiated)",
    ),
    (
        "7.5",
        Some("Close Handling"),
        "Close frame structure: payload value (fuzzer initiated)",
    ),
    (
        "7.7",
        Some("Close Handling"),
        "Close frame structure: valid close codes (fuzzer initiated)",
    ),
    (
        "7.9",
        Some("Close Handling"),
        "Close frame structure: invalid close codes (fuzzer initiated)",
    ),
    (
        "7.13",
        Some("Close Handling"),
        "Informational close information (fuzzer initiated)",
    ),
    ("9", None, "Limits/Performance"),
    ("9.1", Some("Limits/Performance"), "Text Message (increasing size)"),
    ("9.2", Some("Limits/Performance"), "Binary Message (increasing size)"),
    (
        "9.3",
        Some("Limits/Performance"),
        "Fragmented Text Message (fixed size, increasing fragment size)",
    ),
    (
        "9.4",
        Some("Limits/Performance"),
        "Fragmented Binary Message (fixed size, increasing fragment size)",
    ),
    (
        "9.5",
        Some("Limits/Performance"),
        "Text Message (fixed size, increasing chop size)",
    ),
    (
        "9.6",
        Some("Limits/Performance"),
        "Binary Message (fixed size, increasing chop size)",
    ),
    (
        "9.7",
        Some("Limits/Performance"),
        "Text Message Roundtrip Time (fixed number, increasing size)",
    ),
    (
        "9.8",
        Some("Limits/Performance"),
        "Binary Message Roundtrip Time (fixed number, increasing size)",
    ),
    ("10", None, "Misc"),
    ("10.1", Some("Misc"), "Auto-Fragmentation"),
    ("12", None, "WebSocket Compression (different payloads)"),
    ("13", None, "WebSocket Compression (different parameters)"),
];

impl EmissionState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sections {
    /// The built-in Autobahn testsuite table.
    pub fn builtin() -> Self {
        Self::from_entries(SUITE_SECTIONS)
    }

    /// Build a table from (prefix, parent, title) entries. Entries whose
    /// prefix is not a valid dotted id are skipped.
    pub fn from_entries(entries: &[(&'static str, Option<&'static str>, &'static str)]) -> Self {
        let by_prefix = entries
            .iter()
            .filter_map(|&(prefix, parent, title)| {
                let prefix = CaseId::parse(prefix)?;
                Some((prefix, Section { title, parent }))
            })
            .collect();
        Self { by_prefix }
    }

    /// Look up the most specific section containing `case`, ignoring
    /// emission state. `None` when no registered prefix matches.
    pub fn section_for(&self, case: &CaseId) -> Option<&Section> {
        // prefixes() walks longest-first, so the first hit wins
        case.prefixes()
            .find_map(|prefix| self.by_prefix.get(&prefix))
    }

    /// Section header to render above `case`, or `None` if no section
    /// matches or the matching section was already emitted this pass.
    ///
    /// Marks the matched prefix in `state`, so across one sorted pass each
    /// section comes back exactly once, above its first case.
    pub fn header_for(&self, case: &CaseId, state: &mut EmissionState) -> Option<SectionHeader> {
        let (prefix, section) = case
            .prefixes()
            .find_map(|prefix| self.by_prefix.get(&prefix).map(|s| (prefix, s)))?;

        if !state.emitted.insert(prefix) {
            return None;
        }

        Some(SectionHeader {
            parent: section.parent,
            title: section.title,
        })
    }
}
