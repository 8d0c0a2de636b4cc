//! FASHN test job - a command-line test double for subprocess testing.
//!
//! Simulates the FASHN image-processing service so a parent process can
//! verify that it spawns a child correctly, passes positional and
//! optional arguments, and observes staged console output and the exit
//! code. The binary parses four required positional arguments and a
//! handful of optional flags, prints a tagged transcript with three
//! artificially-delayed processing stages, and exits. It never touches
//! the filesystem or the network; the printed transcript is the only
//! artifact of execution.

pub mod error;
pub mod options;
pub mod pipeline;

pub use error::JobError;
pub use options::{JobInputs, JobOptions};
