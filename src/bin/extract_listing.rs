//! Reads a storefront page from a file (or stdin) and prints the extracted
//! listing as JSON on stdout.
//!
//! Usage: `extract_listing [--raw] [FILE]`
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=rs_play_listing=debug`).

use rs_play_listing::{extract_bytes_with_options, Options};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

struct Args {
    raw: bool,
    path: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        raw: false,
        path: None,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--raw" => args.raw = true,
            "-h" | "--help" => return Err("usage: extract_listing [--raw] [FILE]".to_string()),
            flag if flag.starts_with('-') => return Err(format!("unknown flag: {flag}")),
            _ if args.path.is_some() => return Err("only one input file is accepted".to_string()),
            path => args.path = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let html = match read_input(args.path.as_ref()) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = Options {
        keep_raw_source: args.raw,
        ..Options::default()
    };

    let listing = match extract_bytes_with_options(&html, &options) {
        Ok(listing) => listing,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&listing) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize listing: {err}");
            ExitCode::FAILURE
        }
    }
}
