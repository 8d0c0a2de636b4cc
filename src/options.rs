//! Argument handling for the test job.
//!
//! The first four arguments after the program name are required
//! positional values; everything after them is parsed as named options
//! with defaults. Positional values are extracted by index, the way the
//! real service invocation supplies them, and only the trailing
//! arguments go through the option parser.

use clap::{value_parser, Arg, Command};
use tracing::debug;

use crate::error::JobError;

/// Number of required positional arguments (after the program name).
pub const REQUIRED_POSITIONALS: usize = 4;

/// The four required positional values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInputs {
    /// Opaque identifier for this simulated processing job
    pub run_id: String,
    /// Path to the model image (never opened or validated)
    pub model_image: String,
    /// Path to the top garment image (never opened or validated)
    pub top_garment: String,
    /// Path to the bottom garment image (never opened or validated)
    pub bottom_garment: String,
}

impl JobInputs {
    /// Extract the positional values from the arguments following the
    /// program name.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::NotEnoughArguments`] when fewer than
    /// [`REQUIRED_POSITIONALS`] arguments are present.
    pub fn from_args(args: &[String]) -> Result<Self, JobError> {
        if args.len() < REQUIRED_POSITIONALS {
            return Err(JobError::NotEnoughArguments {
                received: args.len(),
            });
        }
        Ok(Self {
            run_id: args[0].clone(),
            model_image: args[1].clone(),
            top_garment: args[2].clone(),
            bottom_garment: args[3].clone(),
        })
    }
}

/// Options derived from the named flags after the positionals.
///
/// Created once per invocation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOptions {
    /// Processing mode
    pub mode: String,
    /// Garment category
    pub category: String,
    /// Random seed forwarded to the simulated service
    pub seed: i64,
    /// Number of samples the service would generate
    pub num_samples: i64,
    /// Output version, used in the hypothetical result file name
    pub version: i64,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            mode: "balanced".to_string(),
            category: "auto".to_string(),
            seed: 0,
            num_samples: 1,
            version: 1,
        }
    }
}

impl JobOptions {
    /// Parse the optional flags, i.e. the arguments remaining after the
    /// four positionals.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::InvalidOption`] when a flag is unknown or an
    /// integer-typed value fails conversion.
    pub fn parse(optional_args: &[String]) -> Result<Self, JobError> {
        let matches = option_parser().try_get_matches_from(optional_args.iter().cloned())?;

        let options = Self {
            mode: matches
                .get_one::<String>("mode")
                .cloned()
                .unwrap_or_else(|| "balanced".to_string()),
            category: matches
                .get_one::<String>("category")
                .cloned()
                .unwrap_or_else(|| "auto".to_string()),
            seed: matches.get_one::<i64>("seed").copied().unwrap_or(0),
            num_samples: matches.get_one::<i64>("num-samples").copied().unwrap_or(1),
            version: matches.get_one::<i64>("version").copied().unwrap_or(1),
        };
        debug!(?options, "optional flags parsed");
        Ok(options)
    }
}

/// Parser for the optional flags only. Positionals never reach it.
fn option_parser() -> Command {
    Command::new("fashn-test-job")
        .no_binary_name(true)
        .arg(Arg::new("mode").long("mode").default_value("balanced"))
        .arg(Arg::new("category").long("category").default_value("auto"))
        .arg(
            Arg::new("seed")
                .long("seed")
                .default_value("0")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("num-samples")
                .long("num-samples")
                .default_value("1")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .default_value("1")
                .value_parser(value_parser!(i64)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn inputs_from_exact_positionals() {
        let args = strings(&["run123", "model.png", "top.png", "bottom.png"]);
        let inputs = JobInputs::from_args(&args).unwrap();

        assert_eq!(inputs.run_id, "run123");
        assert_eq!(inputs.model_image, "model.png");
        assert_eq!(inputs.top_garment, "top.png");
        assert_eq!(inputs.bottom_garment, "bottom.png");
    }

    #[test]
    fn inputs_ignore_trailing_flags() {
        let args = strings(&["run123", "model.png", "top.png", "bottom.png", "--seed", "42"]);
        let inputs = JobInputs::from_args(&args).unwrap();

        assert_eq!(inputs.run_id, "run123");
        assert_eq!(inputs.bottom_garment, "bottom.png");
    }

    #[test]
    fn inputs_reject_too_few_arguments() {
        let args = strings(&["run123", "model.png"]);
        let err = JobInputs::from_args(&args).unwrap_err();

        assert!(matches!(
            err,
            JobError::NotEnoughArguments { received: 2 }
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn options_default_when_no_flags() {
        let options = JobOptions::parse(&[]).unwrap();
        assert_eq!(options, JobOptions::default());
        assert_eq!(options.mode, "balanced");
        assert_eq!(options.category, "auto");
        assert_eq!(options.seed, 0);
        assert_eq!(options.num_samples, 1);
        assert_eq!(options.version, 1);
    }

    #[test]
    fn options_override_defaults() {
        let args = strings(&[
            "--mode",
            "quality",
            "--category",
            "tops",
            "--seed",
            "42",
            "--num-samples",
            "3",
            "--version",
            "2",
        ]);
        let options = JobOptions::parse(&args).unwrap();

        assert_eq!(options.mode, "quality");
        assert_eq!(options.category, "tops");
        assert_eq!(options.seed, 42);
        assert_eq!(options.num_samples, 3);
        assert_eq!(options.version, 2);
    }

    #[test]
    fn options_reject_non_integer_seed() {
        let args = strings(&["--seed", "not-a-number"]);
        let err = JobOptions::parse(&args).unwrap_err();

        assert!(matches!(err, JobError::InvalidOption(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn options_reject_non_integer_version() {
        let args = strings(&["--version", "2.5"]);
        assert!(JobOptions::parse(&args).is_err());
    }

    #[test]
    fn options_reject_unknown_flag() {
        let args = strings(&["--resolution", "high"]);
        assert!(JobOptions::parse(&args).is_err());
    }

    #[test]
    fn negative_seed_is_a_valid_integer() {
        let args = strings(&["--seed=-7"]);
        let options = JobOptions::parse(&args).unwrap();
        assert_eq!(options.seed, -7);
    }
}
