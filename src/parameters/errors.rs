use thiserror::Error;

/// Errors raised while loading or validating the run parameters.
///
/// Every variant is fatal: the run aborts before any task is generated or
/// verified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    /// The number of tasks per batch must be positive.
    #[error("the number of tasks must be at least 1, not {0}")]
    TaskCount(usize),

    /// Degrees below 1 leave nothing to multiply.
    #[error("the minimum degree must be at least 1, not {0}")]
    DegreeMin(usize),

    /// The degree range is empty.
    #[error("the maximum degree {max} must be at least equal to the minimum degree {min}")]
    DegreeRange { min: usize, max: usize },

    /// The coefficient range is empty.
    #[error(
        "the maximum coefficient {max} must be at least equal to the minimum coefficient {min}"
    )]
    CoefficientRange { min: i64, max: i64 },

    /// An explicitly requested configuration file is missing.
    #[error("the configuration file `{0}` is either not a file or does not exist")]
    ConfigFile(String),

    /// An unknown key or a value of the wrong shape in the configuration.
    #[error("invalid configuration: {0}")]
    Malformed(String),
}
