//! pattern-staleness - degraded standalone staleness auditor
//!
//! Runs the staleness audit alone, using only the line-oriented parser, so
//! it behaves identically in environments that cannot carry the full
//! engine. Exit codes: 0 no blocking issues, 1 script/environment error,
//! 2 blocking issues found.

use chrono::Local;
use curator_auditor::{report, StalenessAuditor, DEFAULT_MAX_LAST_VERIFIED_DAYS};
use curator_frontmatter::{load_catalog, DegradedParser};
use std::env;
use std::path::Path;
use std::process;
use tracing::Level;

/// Environment override for the verification-age threshold
const MAX_DAYS_ENV: &str = "CURATOR_MAX_VERIFIED_DAYS";

fn main() {
    // Log to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(0);
    }

    let root = args.get(1).map(String::as_str).unwrap_or("patterns");

    let max_days = match env::var(MAX_DAYS_ENV) {
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(days) if days >= 0 => days,
            _ => {
                eprintln!("Error: {} must be a non-negative integer, found '{}'", MAX_DAYS_ENV, raw);
                process::exit(1);
            }
        },
        Err(_) => DEFAULT_MAX_LAST_VERIFIED_DAYS,
    };

    let outcome = match load_catalog(Path::new(root), &DegradedParser::new()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let today = Local::now().date_naive();
    let staleness = StalenessAuditor::new(today, max_days).audit(&outcome.catalog);

    print!("{}", report::markdown(&staleness, today, max_days));

    if staleness.has_blocking() {
        process::exit(2);
    }
}

fn print_help() {
    println!("pattern-staleness - standalone staleness audit for a pattern catalog");
    println!();
    println!("USAGE:");
    println!("    pattern-staleness [catalog-root]");
    println!();
    println!("ARGS:");
    println!("    catalog-root    Directory of pattern records (default: patterns)");
    println!();
    println!("ENVIRONMENT:");
    println!(
        "    {}    Max age of last_verified in days (default: {})",
        MAX_DAYS_ENV, DEFAULT_MAX_LAST_VERIFIED_DAYS
    );
    println!();
    println!("EXIT CODES:");
    println!("    0    no blocking issues");
    println!("    1    script or environment error");
    println!("    2    blocking issues found (overdue reviews)");
}
