use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use wsmerge::model::{Behavior, SuiteResults};
use wsmerge::report::Summary;
use wsmerge::{merge, report};

#[derive(Parser, Debug)]
#[command(name = "wsmerge")]
#[command(author, version, about = "Merge Autobahn WebSocket conformance results into a single report")]
struct Args {
    /// Result files or directories containing them (index.json per run)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output report file (.html, .json, .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for auto-generated reports
    #[arg(long, default_value = "wsmerge-reports")]
    report_dir: PathBuf,

    /// Don't prompt to open report
    #[arg(long)]
    no_open: bool,

    /// Number of parallel workers (default: number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Show per-case results for non-passing cases
    #[arg(short, long)]
    verbose: bool,

    /// Only show summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    // Set up thread pool
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    // Collect result files
    let files = match merge::collect_input_files(&args.inputs) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error collecting result files: {}", e);
            std::process::exit(1);
        }
    };

    if files.is_empty() {
        eprintln!("No result files found (expected *.json harness output)");
        std::process::exit(1);
    }

    if !args.quiet {
        eprintln!("\x1b[1mwsmerge - WebSocket Conformance Report Merger\x1b[0m");
        eprintln!("{}", "─".repeat(70));
        eprintln!("Found {} result file(s)\n", files.len());
    }

    // Set up progress bar
    let pb = if !args.quiet && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Parse run files in parallel; merge order stays the sorted file order
    let parsed: io::Result<Vec<SuiteResults>> = files
        .par_iter()
        .map(|path| {
            let result = merge::load_run_file(path);
            if let Some(ref pb) = pb {
                pb.inc(1);
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    pb.set_message(name.to_string());
                }
            }
            result
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let merged = match parsed {
        Ok(parts) => merge::merge_all(parts),
        Err(e) => {
            eprintln!("Error reading results: {}", e);
            std::process::exit(1);
        }
    };

    if merged.is_empty() {
        eprintln!("Result files contained no test cases");
        std::process::exit(1);
    }

    // Print per-implementation results
    if !args.quiet {
        for (agent, cases) in &merged {
            let summary = Summary::from_cases(cases);
            let color = if summary.failed > 0 {
                "\x1b[31m" // Red
            } else if summary.non_strict > 0 {
                "\x1b[33m" // Yellow
            } else {
                "\x1b[32m" // Green
            };
            let reset = "\x1b[0m";

            println!(
                "{}{:<30}{} {:>4} cases  {:>4} pass  {:>4} non-strict  {:>4} failed",
                color, agent, reset, summary.total, summary.pass, summary.non_strict, summary.failed
            );

            if args.verbose {
                for (case_id, case) in cases {
                    if case.behavior != Behavior::Ok {
                        eprintln!(
                            "    {:<10} {:<16} close={:<12} {}ms  code={}",
                            case_id.to_string(),
                            case.behavior.to_string(),
                            case.behavior_close.to_string(),
                            case.duration,
                            case.remote_close_code
                                .map(|c| c.to_string())
                                .unwrap_or_else(|| "n/a".to_string()),
                        );
                    }
                }
            }
        }
    }

    // Summary
    let summary = Summary::from_suite(&merged);

    if !args.quiet {
        eprintln!("\n{}", "─".repeat(70));
        eprintln!("\x1b[1mSummary:\x1b[0m");
        eprintln!("  \x1b[32m✓ Pass:\x1b[0m       {}", summary.pass);
        eprintln!("  \x1b[33m? Non-strict:\x1b[0m {}", summary.non_strict);
        eprintln!("  \x1b[31m✗ Failed:\x1b[0m     {}", summary.failed);
        if summary.unimplemented > 0 {
            eprintln!("  \x1b[90mUnimplemented:\x1b[0m {}", summary.unimplemented);
        }
    }

    // Determine report path
    let report_path = if let Some(ref output) = args.output {
        output.clone()
    } else {
        std::fs::create_dir_all(&args.report_dir).ok();
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("wsmerge_report_{}.html", timestamp);
        args.report_dir.join(filename)
    };

    // Generate report
    if let Err(e) = report::generate(&report_path, &merged) {
        eprintln!("Failed to write report: {}", e);
        std::process::exit(1);
    }
    if !args.quiet {
        eprintln!("\n\x1b[32mReport saved: {}\x1b[0m", report_path.display());
    }

    // Open report
    if !args.no_open && !args.quiet {
        eprint!("\nOpen report in browser? [Y/n] ");
        io::stderr().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_ok() {
            let input = input.trim().to_lowercase();
            if input.is_empty() || input == "y" || input == "yes" {
                if let Err(e) = open::that(&report_path) {
                    eprintln!("Failed to open report: {}", e);
                }
            }
        }
    }

    // Exit with appropriate code
    if summary.failed > 0 {
        std::process::exit(2);
    } else if summary.non_strict > 0 {
        std::process::exit(1);
    }
}
