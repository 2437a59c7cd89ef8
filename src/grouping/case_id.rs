//! Dotted-numeric test case identifiers
//!
//! Autobahn names every conformance case with a dot-separated sequence of
//! integers ("1.1.1", "6.4.2", "13.7.18"). The harness emits them as JSON
//! map keys, so they arrive as strings, but they must *order* numerically:
//! "6.2" runs before "6.10", and a plain string sort gets that wrong.
//!
//! [`CaseId`] parses the string form once and keeps only the integer
//! components. Ordering, equality, and hashing all derive from the
//! component vector, which makes the derived `Ord` exactly dotted-version
//! order: components compare left to right, and a shorter id that matches
//! every compared component sorts first.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single conformance test case, e.g. `5.19` or `7.13.1`.
///
/// Internally a non-empty sequence of integer components. The textual form
/// is canonical: `"6.02"` parses to the same id as `"6.2"` and re-renders
/// as `"6.2"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseId(Vec<u32>);

impl CaseId {
    /// Parse a dotted id, returning `None` for anything that is not a
    /// non-empty sequence of dot-separated non-negative integers.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        let components: Option<Vec<u32>> = s.split('.').map(|c| c.parse().ok()).collect();
        components.map(CaseId)
    }

    /// The integer components, outermost first.
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// True if `self` is `prefix` or sits below it in the numbering.
    ///
    /// Comparison is per component, so `"1"` is not a prefix of `"10.1"`
    /// even though it is a string prefix of it.
    pub fn has_prefix(&self, prefix: &CaseId) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// All prefixes of this id from longest (the id itself) to shortest.
    pub fn prefixes(&self) -> impl Iterator<Item = CaseId> + '_ {
        (1..=self.0.len())
            .rev()
            .map(move |len| CaseId(self.0[..len].to_vec()))
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for CaseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseId::parse(s).ok_or_else(|| format!("invalid case id '{}'", s))
    }
}

// Case ids appear as JSON object keys in run files, so they serialize as
// their dotted string form rather than as an array of integers.
impl Serialize for CaseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CaseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CaseIdVisitor;

        impl<'de> Visitor<'de> for CaseIdVisitor {
            type Value = CaseId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a dotted numeric case id like \"6.4.2\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CaseId, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CaseIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PARSING TESTS
    // ==========================================================================

    #[test]
    fn test_parse_simple() {
        let id = CaseId::parse("1.2.8").unwrap();
        assert_eq!(id.components(), &[1, 2, 8]);
    }

    #[test]
    fn test_parse_single_component() {
        let id = CaseId::parse("9").unwrap();
        assert_eq!(id.components(), &[9]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CaseId::parse("").is_none());
        assert!(CaseId::parse("1.").is_none());
        assert!(CaseId::parse(".1").is_none());
        assert!(CaseId::parse("1..2").is_none());
        assert!(CaseId::parse("1.x").is_none());
        assert!(CaseId::parse("-1.2").is_none());
        assert!(CaseId::parse("non-tls").is_none());
    }

    #[test]
    fn test_display_roundtrip() {
        let id: CaseId = "13.7.18".parse().unwrap();
        assert_eq!(id.to_string(), "13.7.18");
    }

    #[test]
    fn test_leading_zeros_canonicalize() {
        // "6.02" is the same case as "6.2" and renders canonically
        let a = CaseId::parse("6.02").unwrap();
        let b = CaseId::parse("6.2").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "6.2");
    }

    // ==========================================================================
    // ORDERING TESTS
    //
    // The whole point of this type: "6.10" must sort after "6.2", which a
    // string comparison gets backwards.
    // ==========================================================================

    #[test]
    fn test_numeric_not_lexicographic() {
        let a = CaseId::parse("6.2").unwrap();
        let b = CaseId::parse("6.10").unwrap();
        assert!(a < b, "6.2 must order before 6.10");
        // ...whereas the string forms order the other way
        assert!("6.2" > "6.10");
    }

    #[test]
    fn test_shorter_prefix_sorts_first() {
        let short = CaseId::parse("6.2").unwrap();
        let long = CaseId::parse("6.2.1").unwrap();
        assert!(short < long);
    }

    #[test]
    fn test_first_component_dominates() {
        let a = CaseId::parse("6.10").unwrap();
        let b = CaseId::parse("13.7").unwrap();
        assert!(a < b);
    }

    // ==========================================================================
    // PREFIX TESTS
    // ==========================================================================

    #[test]
    fn test_has_prefix_respects_component_boundary() {
        let case = CaseId::parse("10.1").unwrap();
        let section = CaseId::parse("1").unwrap();
        assert!(!case.has_prefix(&section), "'1' must not match '10.1'");
    }

    #[test]
    fn test_has_prefix_exact_and_below() {
        let section = CaseId::parse("7.1").unwrap();
        assert!(CaseId::parse("7.1").unwrap().has_prefix(&section));
        assert!(CaseId::parse("7.1.3").unwrap().has_prefix(&section));
        assert!(!CaseId::parse("7.13").unwrap().has_prefix(&section));
        assert!(!CaseId::parse("7").unwrap().has_prefix(&section));
    }

    #[test]
    fn test_prefixes_longest_first() {
        let id = CaseId::parse("7.1.3").unwrap();
        let prefixes: Vec<String> = id.prefixes().map(|p| p.to_string()).collect();
        assert_eq!(prefixes, vec!["7.1.3", "7.1", "7"]);
    }

    // ==========================================================================
    // SERDE TESTS
    // ==========================================================================

    #[test]
    fn test_serde_as_string() {
        let id = CaseId::parse("6.4.2").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6.4.2\"");

        let back: CaseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_serde_rejects_non_numeric_key() {
        let err = serde_json::from_str::<CaseId>("\"banana\"").unwrap_err();
        assert!(err.to_string().contains("invalid case id"));
    }
}
