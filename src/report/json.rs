//! Machine-readable merged output
//!
//! The merged mapping, pretty-printed. Round-trips through the same model
//! the run files parse into, so downstream tooling can treat the merged
//! file exactly like a (large) harness index.json.

use crate::model::SuiteResults;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, results: &SuiteResults) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::CaseId;
    use crate::model::{Behavior, CaseResult};
    use std::collections::BTreeMap;

    #[test]
    fn test_output_parses_back_as_run_file() {
        let mut cases = BTreeMap::new();
        cases.insert(
            CaseId::parse("1.1.1").unwrap(),
            CaseResult {
                behavior: Behavior::Ok,
                behavior_close: Behavior::Ok,
                duration: 2,
                remote_close_code: Some(1000),
                report_file: "case_1_1_1.json".to_string(),
            },
        );
        let mut results = SuiteResults::new();
        results.insert("srv".to_string(), cases);

        let mut buf = Vec::new();
        write(&mut buf, &results).unwrap();

        let back: SuiteResults = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(
            back["srv"][&CaseId::parse("1.1.1").unwrap()].behavior,
            Behavior::Ok
        );
    }

    #[test]
    fn test_case_ids_serialize_as_dotted_keys() {
        let mut cases = BTreeMap::new();
        cases.insert(
            CaseId::parse("6.4.2").unwrap(),
            CaseResult {
                behavior: Behavior::NonStrict,
                behavior_close: Behavior::Ok,
                duration: 1,
                remote_close_code: None,
                report_file: String::new(),
            },
        );
        let mut results = SuiteResults::new();
        results.insert("srv".to_string(), cases);

        let mut buf = Vec::new();
        write(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"6.4.2\""));
        assert!(text.contains("\"behaviorClose\""));
    }
}
