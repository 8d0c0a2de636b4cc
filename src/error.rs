//! Error types for the FASHN test job.
//!
//! Both error kinds are detected synchronously during startup argument
//! handling and are fatal; there is no retry or recovery path.

/// Fatal startup errors.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// Fewer than the four required positional arguments were supplied
    #[error("Not enough arguments provided")]
    NotEnoughArguments {
        /// Number of positional arguments actually received
        received: usize,
    },

    /// An optional flag was unknown or its value failed type conversion
    #[error("{0}")]
    InvalidOption(#[from] clap::Error),
}

impl JobError {
    /// Process exit status for this error: 1 for missing positionals,
    /// 2 for option parse failures.
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotEnoughArguments { .. } => 1,
            Self::InvalidOption(_) => 2,
        }
    }
}
