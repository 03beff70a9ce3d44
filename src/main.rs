use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use num_bigint::BigUint;

use shareback::cli::{Cli, Commands};
use shareback::codec;
use shareback::commands::{Recovery, solve_file, solve_json};

/// Problem files read when no input is given on an interactive terminal
const DEFAULT_FILES: [&str; 2] = ["testcase1.json", "testcase2.json"];

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

/// Read a single problem from piped stdin
fn read_stdin() -> Result<String> {
    let mut json = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut json)
        .context("Failed to read problem from stdin")?;

    if json.trim().is_empty() {
        bail!("No problem provided on stdin");
    }
    Ok(json)
}

fn report(label: &str, recovery: &Recovery) {
    println!("{label}: {}", recovery.secret);
    for index in &recovery.mismatched {
        eprintln!("{label}: share {index} does not lie on the recovered polynomial");
    }
}

/// Solve every problem independently; returns the number of failures
fn recover(files: Vec<PathBuf>, verify: bool) -> usize {
    if files.is_empty() && !atty::is(atty::Stream::Stdin) {
        return match read_stdin().and_then(|json| solve_json(&json, verify)) {
            Ok(recovery) => {
                report("stdin", &recovery);
                0
            }
            Err(e) => {
                eprintln!("stdin: {e:#}");
                1
            }
        };
    }

    let files = if files.is_empty() {
        DEFAULT_FILES.into_iter().map(PathBuf::from).collect()
    } else {
        files
    };

    let mut failures = 0;
    for path in &files {
        let label = path.display().to_string();
        match solve_file(path, verify) {
            Ok(recovery) => report(&label, &recovery),
            Err(e) => {
                eprintln!("{label}: {e:#}");
                failures += 1;
            }
        }
    }
    failures
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Recover { files, verify } => {
            if recover(files, verify) > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Decode { base, value } => {
            let decoded = codec::decode(base, value.trim())
                .with_context(|| format!("Failed to decode '{value}' in base {base}"))?;
            println!("{decoded}");
        }
        Commands::Encode { base, value } => {
            let number: BigUint = value
                .trim()
                .parse()
                .with_context(|| format!("'{value}' is not a non-negative decimal integer"))?;
            println!("{}", codec::encode(base, &number)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
