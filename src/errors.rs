//! Main error types for the polynomial task pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::parameters::errors::ParameterError;

/// Top-level error type for generation and verification runs.
///
/// Every variant is unrecoverable at its point of detection: the run aborts
/// immediately, and the binary maps the error to a non-zero exit code.
#[derive(Error, Debug)]
pub enum PolymulError {
    /// Loading or validating the run parameters failed.
    #[error(transparent)]
    Parameters(#[from] ParameterError),

    /// The persisted task batch could not be read.
    #[error("cannot read the task file `{path}`: {source}")]
    TaskFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generated task batch could not be written.
    #[error("cannot write the task file `{path}`: {source}")]
    TaskFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The task file exists but does not hold a well-formed batch.
    #[error("malformed task batch in `{path}`: {detail}")]
    MalformedBatch { path: PathBuf, detail: String },

    /// A recomputed product coefficient differs from the stored one.
    #[error(
        "difference in task no. {task_no} at degree {degree}: got {computed} instead of {expected}"
    )]
    Mismatch {
        task_no: usize,
        degree: usize,
        computed: i64,
        expected: i64,
    },
}
