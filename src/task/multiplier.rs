use std::{
    fmt::Display,
    path::Path,
    str::FromStr,
    time::{Duration, Instant},
};

use itertools::{EitherOrBoth, Itertools};
use tracing::{info, instrument};

use crate::{
    errors::PolymulError,
    fft,
    parameters::Parameters,
    poly::{dense::Polynomial, naive, reference},
    task::{PolynomialRecord, TaskBatch},
};

/// Selects which multiplication routine a verification run recomputes the
/// products with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Transform-domain convolution, O(n log n).
    Fft,
    /// Schoolbook convolution, O(n²).
    Simple,
    /// The trusted library routine the products were generated with.
    Polynomial,
}

impl Method {
    /// Multiplies `lhs` and `rhs` with the selected routine.
    #[must_use]
    pub fn multiply(self, lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
        match self {
            Self::Fft => fft::multiply(lhs, rhs),
            Self::Simple => naive::multiply(lhs, rhs),
            Self::Polynomial => reference::multiply(lhs, rhs),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fft" => Ok(Self::Fft),
            "simple" => Ok(Self::Simple),
            "polynomial" => Ok(Self::Polynomial),
            _ => Err(format!(
                "invalid method `{s}`: expected `fft`, `simple` or `polynomial`"
            )),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fft => "fft",
            Self::Simple => "simple",
            Self::Polynomial => "polynomial",
        };
        write!(f, "{name}")
    }
}

/// Per-task timing captured during a verification run.
#[derive(Debug, Clone, Copy)]
pub struct TaskStats {
    pub duration: Duration,
    pub degree_1: usize,
    pub degree_2: usize,
    pub degree_product: usize,
}

/// Replays a persisted task batch and checks every product.
///
/// Tasks are processed strictly in stored order, one at a time. The first
/// coefficient that differs from the stored product aborts the whole run;
/// there is no skip-and-continue path.
#[derive(Debug)]
pub struct Multiplier<'a> {
    parameters: &'a Parameters,
    method: Method,
}

impl<'a> Multiplier<'a> {
    #[must_use]
    pub const fn new(parameters: &'a Parameters, method: Method) -> Self {
        Self { parameters, method }
    }

    /// Verifies every task in the file at `path`, returning the per-task
    /// statistics of a fully successful run.
    #[instrument(skip_all, fields(method = %self.method))]
    pub fn run(&self, path: &Path) -> Result<Vec<TaskStats>, PolymulError> {
        self.parameters.validate()?;
        let batch = TaskBatch::read_from(path)?;

        let mut statistics = Vec::with_capacity(batch.tasks.len());
        for task in &batch.tasks {
            let started = Instant::now();

            let polynom_1 = task.polynom_1.to_polynomial();
            let polynom_2 = task.polynom_2.to_polynomial();
            let computed = self.method.multiply(&polynom_1, &polynom_2);
            check_product(task.task_no, &computed, &task.product)?;

            statistics.push(TaskStats {
                duration: started.elapsed(),
                degree_1: polynom_1.degree(),
                degree_2: polynom_2.degree(),
                degree_product: computed.degree(),
            });
        }

        show_statistics(&statistics);
        Ok(statistics)
    }
}

/// Compares the recomputed product against the stored one, coefficient by
/// coefficient in order of ascending degree.
///
/// The two sequences are walked together past the end of the shorter one,
/// with missing entries read as zero, so a length difference surfaces as a
/// mismatch at the first degree where the sequences diverge.
fn check_product(
    task_no: usize,
    computed: &Polynomial,
    stored: &PolynomialRecord,
) -> Result<(), PolymulError> {
    for (degree, pair) in computed
        .coeffs()
        .iter()
        .zip_longest(&stored.coefficients)
        .enumerate()
    {
        let (got, expected) = match pair {
            EitherOrBoth::Both(&got, &expected) => (got, expected),
            EitherOrBoth::Left(&got) => (got, 0),
            EitherOrBoth::Right(&expected) => (0, expected),
        };
        if got != expected {
            return Err(PolymulError::Mismatch {
                task_no,
                degree,
                computed: got,
                expected,
            });
        }
    }
    Ok(())
}

/// Reports the per-task timings of a completed run.
fn show_statistics(statistics: &[TaskStats]) {
    for (index, stats) in statistics.iter().enumerate() {
        info!(
            "task no. {:2} (degrees: {:5} - {:5} - {:5}) executed in {:?}",
            index + 1,
            stats.degree_1,
            stats.degree_2,
            stats.degree_product,
            stats.duration
        );
    }
    let total: Duration = statistics.iter().map(|stats| stats.duration).sum();
    info!("verified {} tasks in {:?}", statistics.len(), total);
}
