//! Entry point for the FASHN test double.
//!
//! Mirrors the invocation contract a parent process uses when spawning
//! the real service: four positional arguments, then optional flags.
//! Everything observable happens on stdout; diagnostics (when enabled
//! via `RUST_LOG`) go to stderr so the transcript stays clean.

use std::process::ExitCode;

use fashn_test_job::pipeline::{self, TAG};
use fashn_test_job::{JobError, JobInputs, JobOptions};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().collect();

    println!("{TAG} Starting execution at {}", pipeline::timestamp());
    println!("{TAG} Arguments received: {argv:?}");

    let positionals = argv.get(1..).unwrap_or_default();

    let inputs = match JobInputs::from_args(positionals) {
        Ok(inputs) => inputs,
        Err(err) => return usage_error(&err),
    };

    println!("{TAG} Run ID: {}", inputs.run_id);
    println!("{TAG} Model Image: {}", inputs.model_image);
    println!("{TAG} Top Garment: {}", inputs.top_garment);
    println!("{TAG} Bottom Garment: {}", inputs.bottom_garment);

    // Everything after the four positionals is an optional flag.
    let options = match JobOptions::parse(&positionals[4..]) {
        Ok(options) => options,
        Err(err) => return option_error(&err),
    };

    println!("{TAG} Mode: {}", options.mode);
    println!("{TAG} Category: {}", options.category);
    println!("{TAG} Seed: {}", options.seed);
    println!("{TAG} Num Samples: {}", options.num_samples);
    println!("{TAG} Version: {}", options.version);

    pipeline::run(&inputs, &options);

    ExitCode::SUCCESS
}

/// Report missing positional arguments and hand back the exit status.
fn usage_error(err: &JobError) -> ExitCode {
    println!("{TAG} ERROR: {err}");
    println!("{TAG} Expected: script_path run_id model_image top_garment bottom_garment [options]");
    ExitCode::from(err.exit_code())
}

/// Report an optional flag that failed to parse.
fn option_error(err: &JobError) -> ExitCode {
    eprintln!("{TAG} ERROR: invalid optional arguments");
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}
