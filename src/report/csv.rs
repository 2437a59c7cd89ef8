//! CSV export
//!
//! One flat row per (implementation, case), in report order. Handy for
//! spreadsheets and quick grepping; the HTML report is the primary output.

use crate::grouping::order_case_ids;
use crate::model::SuiteResults;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, results: &SuiteResults) -> io::Result<()> {
    writeln!(
        writer,
        "implementation,case,behavior,behavior_close,duration_ms,remote_close_code,report_file"
    )?;

    for (agent, cases) in results {
        for case_id in order_case_ids(cases.keys().cloned()) {
            let case = &cases[&case_id];
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                csv_escape(agent),
                case_id,
                case.behavior,
                case.behavior_close,
                case.duration,
                case.remote_close_code
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
                csv_escape(&case.report_file),
            )?;
        }
    }

    Ok(())
}

// Quote fields containing separators; double embedded quotes.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
