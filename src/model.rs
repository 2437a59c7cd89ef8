//! Result records produced by the conformance harness
//!
//! Each test run writes an `index.json` of the shape
//!
//! ```json
//! {
//!   "my-server": {
//!     "1.1.1": {
//!       "behavior": "OK",
//!       "behaviorClose": "OK",
//!       "duration": 2,
//!       "remoteCloseCode": 1000,
//!       "reportfile": "my_server_case_1_1_1.json"
//!     }
//!   }
//! }
//! ```
//!
//! i.e. implementation name → case id → result record. These types mirror
//! that layout; the records themselves are carried through to the report
//! unchanged.

use crate::grouping::CaseId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One implementation's results, keyed by case id.
pub type AgentResults = BTreeMap<CaseId, CaseResult>;

/// Full result set: implementation name → case id → result.
pub type SuiteResults = BTreeMap<String, AgentResults>;

/// Case outcome vocabulary of the Autobahn harness.
///
/// Close behavior uses the same strings, so one enum covers both fields.
/// Strings the harness grows later land on [`Behavior::Unknown`] instead of
/// failing the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NON-STRICT")]
    NonStrict,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "WRONG CODE")]
    WrongCode,
    #[serde(rename = "UNCLEAN")]
    Unclean,
    #[serde(rename = "FAILED BY CLIENT")]
    FailedByClient,
    #[serde(rename = "INFORMATIONAL")]
    Informational,
    #[serde(rename = "UNIMPLEMENTED")]
    Unimplemented,
    #[serde(other)]
    Unknown,
}

impl Behavior {
    /// True for outcomes that count as conformance failures.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Behavior::Failed | Behavior::WrongCode | Behavior::Unclean | Behavior::FailedByClient
        )
    }

    /// CSS class used for the report badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Behavior::Ok => "pass",
            Behavior::NonStrict => "nonstrict",
            Behavior::Informational => "info",
            Behavior::Unimplemented => "unimpl",
            Behavior::Unknown => "unknown",
            _ => "fail",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Behavior::Ok => "OK",
            Behavior::NonStrict => "NON-STRICT",
            Behavior::Failed => "FAILED",
            Behavior::WrongCode => "WRONG CODE",
            Behavior::Unclean => "UNCLEAN",
            Behavior::FailedByClient => "FAILED BY CLIENT",
            Behavior::Informational => "INFORMATIONAL",
            Behavior::Unimplemented => "UNIMPLEMENTED",
            Behavior::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Outcome of a single conformance case, as recorded by the harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub behavior: Behavior,
    #[serde(rename = "behaviorClose")]
    pub behavior_close: Behavior,
    /// Wall-clock runtime of the case in milliseconds.
    pub duration: u64,
    /// Close code the remote peer sent, when it sent one.
    #[serde(rename = "remoteCloseCode")]
    pub remote_close_code: Option<i64>,
    /// Per-case detail file written by the harness, relative to the run dir.
    #[serde(rename = "reportfile", default)]
    pub report_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // RUN FILE PARSING TESTS
    //
    // The JSON shape here is taken verbatim from harness output; if these
    // break, real index.json files stop loading.
    // ==========================================================================

    const SAMPLE: &str = r#"{
        "my-server": {
            "1.1.1": {
                "behavior": "OK",
                "behaviorClose": "OK",
                "duration": 2,
                "remoteCloseCode": 1000,
                "reportfile": "my_server_case_1_1_1.json"
            },
            "6.4.2": {
                "behavior": "NON-STRICT",
                "behaviorClose": "OK",
                "duration": 1005,
                "remoteCloseCode": 1007,
                "reportfile": "my_server_case_6_4_2.json"
            },
            "7.5.1": {
                "behavior": "FAILED",
                "behaviorClose": "WRONG CODE",
                "duration": 13,
                "remoteCloseCode": null,
                "reportfile": "my_server_case_7_5_1.json"
            }
        }
    }"#;

    #[test]
    fn test_parse_run_file_shape() {
        let suite: SuiteResults = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(suite.len(), 1);

        let agent = &suite["my-server"];
        assert_eq!(agent.len(), 3);

        let case = &agent[&CaseId::parse("1.1.1").unwrap()];
        assert_eq!(case.behavior, Behavior::Ok);
        assert_eq!(case.duration, 2);
        assert_eq!(case.remote_close_code, Some(1000));
        assert_eq!(case.report_file, "my_server_case_1_1_1.json");
    }

    #[test]
    fn test_parse_null_close_code() {
        let suite: SuiteResults = serde_json::from_str(SAMPLE).unwrap();
        let case = &suite["my-server"][&CaseId::parse("7.5.1").unwrap()];
        assert_eq!(case.remote_close_code, None);
        assert_eq!(case.behavior_close, Behavior::WrongCode);
    }

    #[test]
    fn test_parse_rejects_bad_case_key() {
        let bad = r#"{"srv": {"not-a-case": {
            "behavior": "OK", "behaviorClose": "OK",
            "duration": 1, "remoteCloseCode": null, "reportfile": "x.json"
        }}}"#;
        assert!(serde_json::from_str::<SuiteResults>(bad).is_err());
    }

    #[test]
    fn test_roundtrip_preserves_records() {
        let suite: SuiteResults = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&suite).unwrap();
        let back: SuiteResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), suite.len());
        assert_eq!(
            back["my-server"][&CaseId::parse("6.4.2").unwrap()].duration,
            1005
        );
    }

    // ==========================================================================
    // BEHAVIOR VOCABULARY TESTS
    // ==========================================================================

    #[test]
    fn test_behavior_strings() {
        let b: Behavior = serde_json::from_str("\"NON-STRICT\"").unwrap();
        assert_eq!(b, Behavior::NonStrict);

        let b: Behavior = serde_json::from_str("\"FAILED BY CLIENT\"").unwrap();
        assert_eq!(b, Behavior::FailedByClient);
    }

    #[test]
    fn test_unknown_behavior_does_not_fail_parse() {
        let b: Behavior = serde_json::from_str("\"SOMETHING NEW\"").unwrap();
        assert_eq!(b, Behavior::Unknown);
    }

    #[test]
    fn test_failure_classification() {
        assert!(Behavior::Failed.is_failure());
        assert!(Behavior::WrongCode.is_failure());
        assert!(Behavior::Unclean.is_failure());
        assert!(Behavior::FailedByClient.is_failure());

        assert!(!Behavior::Ok.is_failure());
        assert!(!Behavior::NonStrict.is_failure());
        assert!(!Behavior::Informational.is_failure());
        assert!(!Behavior::Unimplemented.is_failure());
    }

    #[test]
    fn test_display_matches_harness_vocabulary() {
        assert_eq!(Behavior::NonStrict.to_string(), "NON-STRICT");
        assert_eq!(Behavior::WrongCode.to_string(), "WRONG CODE");
    }
}
