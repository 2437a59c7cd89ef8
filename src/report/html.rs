//! HTML report generation

use crate::grouping::{order_case_ids, EmissionState, Sections};
use crate::model::{AgentResults, SuiteResults};
use crate::report::Summary;
use std::fmt::Write as _;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, results: &SuiteResults) -> io::Result<()> {
    let sections = Sections::builtin();

    let mut body = String::new();
    for (agent, cases) in results {
        render_agent(&mut body, &sections, agent, cases);
    }
    if results.is_empty() {
        body.push_str("        <p class=\"empty\">No test cases found.</p>\n");
    }

    write!(
        writer,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>WebSocket Conformance Report</title>
    <style>
        :root {{
            --bg: #0d1117;
            --card: #161b22;
            --border: #30363d;
            --text: #e6edf3;
            --dim: #7d8590;
            --pass: #3fb950;
            --nonstrict: #d29922;
            --fail: #f85149;
            --info: #58a6ff;
            --unimpl: #6e7681;
            --accent: #58a6ff;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }}
        .container {{ max-width: 1200px; margin: 0 auto; padding: 2rem; }}

        /* Header */
        .header {{
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--border);
        }}
        .logo {{
            font-size: 2.5rem;
            font-weight: 800;
            background: linear-gradient(135deg, var(--accent), #a371f7);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }}
        .subtitle {{ color: var(--dim); font-size: 1rem; }}

        /* Per-implementation blocks */
        .agent {{ margin-bottom: 3rem; }}
        .agent-name {{
            font-size: 1.5rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }}

        /* Stats Row */
        .stats {{
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1rem;
            margin-bottom: 1.5rem;
        }}
        .stat {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.25rem;
            text-align: center;
        }}
        .stat-value {{ font-size: 2.5rem; font-weight: 700; line-height: 1; }}
        .stat-label {{ color: var(--dim); font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; margin-top: 0.5rem; }}
        .stat.pass .stat-value {{ color: var(--pass); }}
        .stat.nonstrict .stat-value {{ color: var(--nonstrict); }}
        .stat.fail .stat-value {{ color: var(--fail); }}

        /* Table */
        .table-container {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            overflow: hidden;
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
        }}
        th, td {{ padding: 0.625rem 1rem; text-align: left; }}
        th {{
            background: rgba(255,255,255,0.03);
            font-weight: 600;
            font-size: 0.75rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: var(--dim);
            border-bottom: 1px solid var(--border);
        }}
        td {{ border-bottom: 1px solid var(--border); }}
        tr:last-child td {{ border-bottom: none; }}

        tr.chapter td {{
            background: rgba(88,166,255,0.08);
            font-size: 1rem;
            font-weight: 700;
            border-top: 1px solid var(--border);
        }}
        tr.section td {{
            background: rgba(255,255,255,0.02);
            font-weight: 600;
            color: var(--dim);
        }}

        .behavior {{
            display: inline-flex;
            align-items: center;
            padding: 0.2rem 0.65rem;
            border-radius: 20px;
            font-size: 0.7rem;
            font-weight: 600;
            text-transform: uppercase;
        }}
        .behavior.pass {{ background: rgba(63,185,80,0.15); color: var(--pass); }}
        .behavior.nonstrict {{ background: rgba(210,153,34,0.15); color: var(--nonstrict); }}
        .behavior.fail {{ background: rgba(248,81,73,0.15); color: var(--fail); }}
        .behavior.info {{ background: rgba(88,166,255,0.15); color: var(--info); }}
        .behavior.unimpl {{ background: rgba(110,118,129,0.15); color: var(--unimpl); }}
        .behavior.unknown {{ background: rgba(110,118,129,0.15); color: var(--unimpl); }}

        .mono {{ font-family: 'SF Mono', 'Fira Code', monospace; font-size: 0.85rem; }}
        .dim {{ color: var(--dim); }}
        .empty {{ color: var(--dim); }}
        td a {{ color: var(--accent); text-decoration: none; }}
        td a:hover {{ text-decoration: underline; }}

        /* Footer */
        .footer {{
            margin-top: 2rem;
            padding-top: 1rem;
            border-top: 1px solid var(--border);
            color: var(--dim);
            font-size: 0.875rem;
            text-align: center;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="logo">wsmerge</div>
            <div class="subtitle">WebSocket Conformance Report</div>
        </div>

{body}
        <div class="footer">
            Generated by wsmerge
        </div>
    </div>
</body>
</html>
"#,
        body = body
    )?;

    Ok(())
}

fn render_agent(out: &mut String, sections: &Sections, agent: &str, cases: &AgentResults) {
    let summary = Summary::from_cases(cases);

    let _ = write!(
        out,
        r#"        <div class="agent">
            <div class="agent-name">{agent}</div>
            <div class="stats">
                <div class="stat pass">
                    <div class="stat-value">{pass}</div>
                    <div class="stat-label">Pass</div>
                </div>
                <div class="stat nonstrict">
                    <div class="stat-value">{nonstrict}</div>
                    <div class="stat-label">Non-Strict</div>
                </div>
                <div class="stat fail">
                    <div class="stat-value">{failed}</div>
                    <div class="stat-label">Failed</div>
                </div>
                <div class="stat">
                    <div class="stat-value">{total}</div>
                    <div class="stat-label">Total Cases</div>
                </div>
            </div>
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>Case</th>
                            <th>Behavior</th>
                            <th>Close Behavior</th>
                            <th>Duration</th>
                            <th>Close Code</th>
                            <th>Report</th>
                        </tr>
                    </thead>
                    <tbody>
"#,
        agent = html_escape(agent),
        pass = summary.pass,
        nonstrict = summary.non_strict,
        failed = summary.failed,
        total = summary.total,
    );

    // One emission pass per table, so every implementation's table carries
    // its own headings.
    let mut state = EmissionState::new();
    let mut last_chapter: Option<&str> = None;

    for case_id in order_case_ids(cases.keys().cloned()) {
        if let Some(header) = sections.header_for(&case_id, &mut state) {
            match header.parent {
                Some(parent) => {
                    if last_chapter != Some(parent) {
                        chapter_row(out, parent);
                        last_chapter = Some(parent);
                    }
                    let _ = write!(
                        out,
                        "                        <tr class=\"section\"><td colspan=\"6\">{}</td></tr>\n",
                        html_escape(header.title)
                    );
                }
                None => {
                    if last_chapter != Some(header.title) {
                        chapter_row(out, header.title);
                        last_chapter = Some(header.title);
                    }
                }
            }
        }

        let case = &cases[&case_id];
        let close_code = case
            .remote_close_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "—".to_string());

        let _ = write!(
            out,
            r#"                        <tr>
                            <td class="mono">{id}</td>
                            <td><span class="behavior {class}">{behavior}</span></td>
                            <td><span class="behavior {close_class}">{close}</span></td>
                            <td class="dim">{duration} ms</td>
                            <td class="mono">{close_code}</td>
                            <td><a href="{file}">{file}</a></td>
                        </tr>
"#,
            id = case_id,
            class = case.behavior.css_class(),
            behavior = case.behavior,
            close_class = case.behavior_close.css_class(),
            close = case.behavior_close,
            duration = case.duration,
            close_code = close_code,
            file = html_escape(&case.report_file),
        );
    }

    out.push_str(
        "                    </tbody>\n                </table>\n            </div>\n        </div>\n",
    );
}

fn chapter_row(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "                        <tr class=\"chapter\"><td colspan=\"6\">{}</td></tr>\n",
        html_escape(title)
    );
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
