//! The simulated processing pipeline.
//!
//! Three fixed stages, each a progress line followed by a blocking
//! sleep, then the hypothetical output paths and a completion summary.
//! The sleeps exist so an external harness observes a predictable,
//! non-instantaneous runtime. Nothing is ever written to disk: the
//! output directory and result file are described, not created.

use std::thread;
use std::time::Duration;

use chrono::Local;
use tracing::debug;

use crate::options::{JobInputs, JobOptions};

/// Fixed tag prefixing every transcript line.
pub const TAG: &str = "[FASHN Test]";

/// A single simulated processing stage.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Progress line printed immediately before the pause
    pub label: &'static str,
    /// How long the stage blocks the calling thread
    pub pause: Duration,
}

/// The three stages, in execution order.
pub const STAGES: [Stage; 3] = [
    Stage {
        label: "Step 1: Processing top garment...",
        pause: Duration::from_millis(1000),
    },
    Stage {
        label: "Step 2: Processing bottom garment...",
        pause: Duration::from_millis(1000),
    },
    Stage {
        label: "Finalizing output...",
        pause: Duration::from_millis(500),
    },
];

/// Sum of the stage pauses.
#[must_use]
pub fn total_pause() -> Duration {
    STAGES.iter().map(|stage| stage.pause).sum()
}

/// Hypothetical output directory for a run. Never created.
#[must_use]
pub fn output_dir(run_id: &str) -> String {
    format!("/tmp/results/{run_id}/fashn")
}

/// Hypothetical result file for a run and version. Never written.
#[must_use]
pub fn result_file(run_id: &str, version: i64) -> String {
    format!("{}/result_v{version}.png", output_dir(run_id))
}

/// Current local time, formatted for the transcript.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Walk the three stages with their pauses, then describe the output
/// paths and print the completion summary.
pub fn run(inputs: &JobInputs, options: &JobOptions) {
    for stage in &STAGES {
        println!("{TAG} {}", stage.label);
        thread::sleep(stage.pause);
        debug!(stage = stage.label, "stage complete");
    }

    let dir = output_dir(&inputs.run_id);
    println!("{TAG} Would create output directory: {dir}");
    println!(
        "{TAG} Would save result to: {}",
        result_file(&inputs.run_id, options.version)
    );

    println!("{TAG} Processing completed successfully at {}", timestamp());
    println!(
        "{TAG} Total processing time: ~{} seconds",
        total_pause().as_secs_f64()
    );
}
