//! Error types shared by the interval cover routines.
//!
//! The solver itself has no recoverable failure path: violated
//! preconditions and parallel/serial divergence are development-time
//! defects. These variants exist so that the checking entry points
//! (`check_preconditions`, `check_cover`, `IntervalCover::try_run`) can
//! report what went wrong instead of aborting.

use thiserror::Error;

/// Result type for interval cover operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checking and configuration entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("precondition violated at interval {index}: {reason}")]
    PreconditionViolated { index: usize, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{phase} mismatch at {index}: serial={expected}, parallel={actual}")]
    Mismatch {
        phase: &'static str,
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("broken cover at interval {index}: {reason}")]
    BrokenCover { index: usize, reason: String },
}

impl Error {
    pub fn precondition<S: Into<String>>(index: usize, reason: S) -> Self {
        Error::PreconditionViolated {
            index,
            reason: reason.into(),
        }
    }

    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Error::InvalidConfig(message.into())
    }

    pub fn mismatch<V: std::fmt::Debug>(
        phase: &'static str,
        index: usize,
        expected: V,
        actual: V,
    ) -> Self {
        Error::Mismatch {
            phase,
            index,
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    pub fn broken_cover<S: Into<String>>(index: usize, reason: S) -> Self {
        Error::BrokenCover {
            index,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message() {
        let err = Error::mismatch("furthest", 7, 9usize, 8usize);
        assert_eq!(
            err.to_string(),
            "furthest mismatch at 7: serial=9, parallel=8"
        );
    }

    #[test]
    fn test_precondition_message() {
        let err = Error::precondition(3, "gap: L(4) > R(3)");
        assert!(matches!(err, Error::PreconditionViolated { index: 3, .. }));
        assert!(err.to_string().contains("gap"));
    }
}
