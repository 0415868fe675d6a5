//! Round-trip audit runner for stringy generators
//!
//! Generates samples for every tag (or one chosen tag), validates each one
//! against the registry, and prints a report.
//!
//! Usage:
//!   cargo run -p stringy-testgen --bin sample-runner -- [OPTIONS]
//!
//! Options:
//!   --tag <NAME>      Audit a single tag (default: all)
//!   --seed <N>        Random seed for reproducibility (default: 42)
//!   --samples <N>     Samples per tag (default: 1000)
//!   --output <FILE>   Write the report to a file instead of stdout
//!   --json            Output a JSON report instead of text

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use stringy_core::TypeTag;
use stringy_testgen::{AuditReport, GenConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args);

    let tags: Vec<TypeTag> = match config.tag {
        Some(tag) => vec![tag],
        None => TypeTag::all().to_vec(),
    };

    let gen_config = GenConfig::default().with_seed(config.seed);
    let report = match AuditReport::run(&gen_config, &tags, config.samples) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(2);
        }
    };

    let content = if config.json_output {
        report.render_json()
    } else {
        report.render_text()
    };

    match &config.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &content) {
                eprintln!("ERROR: failed to write {}: {}", path.display(), e);
                std::process::exit(2);
            }
            println!("Report written to {}", path.display());
        }
        None => println!("{}", content),
    }

    if report.total_failed() > 0 {
        eprintln!("⚠ {} sample(s) failed validation", report.total_failed());
        std::process::exit(1);
    }
}

#[derive(Debug)]
struct RunConfig {
    tag: Option<TypeTag>,
    seed: u64,
    samples: usize,
    output: Option<PathBuf>,
    json_output: bool,
}

fn parse_args(args: &[String]) -> RunConfig {
    let mut config = RunConfig {
        tag: None,
        seed: 42,
        samples: 1000,
        output: None,
        json_output: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tag" => {
                i += 1;
                if i < args.len() {
                    match TypeTag::from_str(&args[i]) {
                        Ok(tag) => config.tag = Some(tag),
                        Err(e) => {
                            eprintln!("ERROR: {}", e);
                            std::process::exit(2);
                        }
                    }
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    config.seed = args[i].parse().unwrap_or(42);
                }
            }
            "--samples" => {
                i += 1;
                if i < args.len() {
                    config.samples = args[i].parse().unwrap_or(1000);
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    config.output = Some(PathBuf::from(&args[i]));
                }
            }
            "--json" => config.json_output = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!(
        r#"Stringy Round-Trip Audit Runner

USAGE:
    cargo run -p stringy-testgen --bin sample-runner -- [OPTIONS]

OPTIONS:
    --tag <NAME>      Audit a single tag: int, float, non_neg_int, bool,
                      uuid, url_safe, name (default: all)
    --seed <N>        Random seed for reproducibility (default: 42)
    --samples <N>     Samples per tag (default: 1000)
    --output <FILE>   Write the report to a file instead of stdout
    --json            Output a JSON report instead of text
    --help, -h        Print this help message

EXAMPLES:
    # Audit every tag with the default seed
    cargo run -p stringy-testgen --bin sample-runner

    # Deep audit of UUID generation, as JSON
    cargo run -p stringy-testgen --bin sample-runner -- --tag uuid --samples 100000 --json
"#
    );
}
