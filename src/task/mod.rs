//! The persisted task batch: the sole interface between the generation and
//! verification stages.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{errors::PolymulError, poly::dense::Polynomial};

pub mod generator;
pub mod multiplier;

/// Wire form of a polynomial: coefficients ordered from degree 0 upward,
/// with the degree stored alongside.
///
/// For a normalized polynomial `degree == coefficients.len() - 1`; the zero
/// polynomial is written as a single zero coefficient of degree 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolynomialRecord {
    pub degree: usize,
    pub coefficients: Vec<i64>,
}

impl PolynomialRecord {
    /// Parses the record back into a normalized polynomial.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial {
        Polynomial::from_coefficients_slice(&self.coefficients)
    }
}

impl From<&Polynomial> for PolynomialRecord {
    fn from(poly: &Polynomial) -> Self {
        let coefficients = if poly.is_zero() {
            vec![0]
        } else {
            poly.coeffs().to_vec()
        };
        Self {
            degree: poly.degree(),
            coefficients,
        }
    }
}

/// One multiplication task: a polynomial pair and its trusted product.
///
/// Created once by the generator and never mutated afterwards; the verifier
/// only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 1-based task number, matching the position in the batch.
    #[serde(rename = "taskNo")]
    pub task_no: usize,
    #[serde(rename = "polynom1")]
    pub polynom_1: PolynomialRecord,
    #[serde(rename = "polynom2")]
    pub polynom_2: PolynomialRecord,
    pub product: PolynomialRecord,
}

/// A batch of tasks as persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBatch {
    /// Count of tasks, redundantly stored with the task list.
    #[serde(rename = "moTasks")]
    pub no_tasks: usize,
    pub tasks: Vec<Task>,
}

impl TaskBatch {
    /// Reads a batch from the JSON task file at `path`.
    ///
    /// A missing or unreadable file, undecodable JSON, and a task count
    /// that disagrees with the task list are all fatal.
    pub fn read_from(path: &Path) -> Result<Self, PolymulError> {
        let file = File::open(path).map_err(|source| PolymulError::TaskFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let batch: Self = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            PolymulError::MalformedBatch {
                path: path.to_path_buf(),
                detail: source.to_string(),
            }
        })?;
        if batch.no_tasks != batch.tasks.len() {
            return Err(PolymulError::MalformedBatch {
                path: path.to_path_buf(),
                detail: format!(
                    "the batch announces {} tasks but holds {}",
                    batch.no_tasks,
                    batch.tasks.len()
                ),
            });
        }
        Ok(batch)
    }

    /// Writes the batch as pretty-printed JSON to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), PolymulError> {
        let file = File::create(path).map_err(|source| PolymulError::TaskFileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|source| {
            PolymulError::TaskFileWrite {
                path: path.to_path_buf(),
                source: source.into(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_batch() -> TaskBatch {
        let polynom_1 = Polynomial::new(vec![1, 2]);
        let polynom_2 = Polynomial::new(vec![3, 4]);
        let product = Polynomial::new(vec![3, 10, 8]);
        TaskBatch {
            no_tasks: 1,
            tasks: vec![Task {
                task_no: 1,
                polynom_1: (&polynom_1).into(),
                polynom_2: (&polynom_2).into(),
                product: (&product).into(),
            }],
        }
    }

    #[test]
    fn test_json_wire_format() {
        let serialized = serde_json::to_value(sample_batch()).unwrap();
        let expected = json!({
            "moTasks": 1,
            "tasks": [
                {
                    "taskNo": 1,
                    "polynom1": {"degree": 1, "coefficients": [1, 2]},
                    "polynom2": {"degree": 1, "coefficients": [3, 4]},
                    "product": {"degree": 2, "coefficients": [3, 10, 8]},
                }
            ],
        });
        assert_eq!(serialized, expected);
    }

    #[test]
    fn test_zero_polynomial_wire_form() {
        let record = PolynomialRecord::from(&Polynomial::zero());
        assert_eq!(record.degree, 0);
        assert_eq!(record.coefficients, vec![0]);
        assert!(record.to_polynomial().is_zero());
    }

    #[test]
    fn test_record_round_trip() {
        let poly = Polynomial::new(vec![-5, 0, 7]);
        let record = PolynomialRecord::from(&poly);
        assert_eq!(record.degree, 2);
        assert_eq!(record.to_polynomial(), poly);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let batch = sample_batch();
        batch.write_to(&path).unwrap();
        assert_eq!(TaskBatch::read_from(&path).unwrap(), batch);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let error = TaskBatch::read_from(Path::new("no-such-tasks.json")).unwrap_err();
        assert!(matches!(error, PolymulError::TaskFileRead { .. }));
    }

    #[test]
    fn test_undecodable_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "{ not json").unwrap();
        let error = TaskBatch::read_from(&path).unwrap_err();
        assert!(matches!(error, PolymulError::MalformedBatch { .. }));
    }

    #[test]
    fn test_task_count_mismatch_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut batch = sample_batch();
        batch.no_tasks = 2;
        serde_json::to_writer(File::create(&path).unwrap(), &batch).unwrap();
        let error = TaskBatch::read_from(&path).unwrap_err();
        assert!(
            matches!(error, PolymulError::MalformedBatch { detail, .. } if detail.contains("announces 2"))
        );
    }
}
