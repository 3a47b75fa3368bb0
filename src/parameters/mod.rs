use std::path::Path;

use errors::ParameterError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub mod errors;

/// Prefix for environment variable overrides, e.g. `POLYMUL_NO_TASKS=25`.
const ENV_PREFIX: &str = "POLYMUL_";

/// Run parameters shared by the task generator and the verifier.
///
/// Values are resolved in three layers: compiled-in defaults, an optional
/// TOML configuration file, and `POLYMUL_`-prefixed environment variables,
/// each layer overriding the one before it. The struct is immutable after
/// loading and passed by reference into the harnesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// Number of tasks per generated batch.
    pub no_tasks: usize,
    /// Smallest degree a generated polynomial may have.
    pub degree_min: usize,
    /// Largest degree a generated polynomial may have.
    pub degree_max: usize,
    /// Smallest value a generated coefficient may have.
    pub coef_min: i64,
    /// Largest value a generated coefficient may have.
    pub coef_max: i64,
    /// Whether progress messages are reported.
    pub verbose: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            no_tasks: 10,
            degree_min: 14_500,
            degree_max: 15_500,
            coef_min: -9_999,
            coef_max: 9_999,
            verbose: true,
        }
    }
}

impl Parameters {
    /// Loads parameters from the optional configuration file and the
    /// environment, then validates them.
    ///
    /// A configuration file that was explicitly requested but does not
    /// exist is a fatal error; unknown keys and malformed values are
    /// rejected with the offending key or value named.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ParameterError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(ParameterError::ConfigFile(path.display().to_string()));
            }
            figment = figment.merge(Toml::file(path));
        }

        let parameters: Self = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|source| ParameterError::Malformed(source.to_string()))?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Checks the parameter invariants.
    ///
    /// Both harnesses call this before processing any task, so a batch is
    /// never partially generated or verified under an invalid configuration.
    pub const fn validate(&self) -> Result<(), ParameterError> {
        if self.no_tasks < 1 {
            return Err(ParameterError::TaskCount(self.no_tasks));
        }
        if self.degree_min < 1 {
            return Err(ParameterError::DegreeMin(self.degree_min));
        }
        if self.degree_max < self.degree_min {
            return Err(ParameterError::DegreeRange {
                min: self.degree_min,
                max: self.degree_max,
            });
        }
        if self.coef_max < self.coef_min {
            return Err(ParameterError::CoefficientRange {
                min: self.coef_min,
                max: self.coef_max,
            });
        }
        Ok(())
    }
}
