use std::{path::Path, time::Instant};

use rand::Rng;
use tracing::{info, instrument};

use crate::{
    errors::PolymulError,
    parameters::Parameters,
    poly::{dense::Polynomial, reference},
    task::{Task, TaskBatch},
};

/// Produces batches of random multiplication tasks.
///
/// Each task pairs two randomly drawn polynomials with their product, which
/// is computed once via the trusted library routine and stored so later
/// verification runs can check the other methods against it.
#[derive(Debug)]
pub struct Generator<'a> {
    parameters: &'a Parameters,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub const fn new(parameters: &'a Parameters) -> Self {
        Self { parameters }
    }

    /// Generates a batch and persists it to the task file at `path`.
    #[instrument(skip_all, fields(no_tasks = self.parameters.no_tasks))]
    pub fn run<R: Rng>(&self, rng: &mut R, path: &Path) -> Result<(), PolymulError> {
        let started = Instant::now();
        let batch = self.generate(rng)?;
        batch.write_to(path)?;
        info!(
            "wrote {} tasks to `{}` in {:?}",
            batch.no_tasks,
            path.display(),
            started.elapsed()
        );
        Ok(())
    }

    /// Generates `no_tasks` tasks.
    ///
    /// The parameters are validated first; nothing is generated under an
    /// invalid configuration.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<TaskBatch, PolymulError> {
        self.parameters.validate()?;
        let tasks: Vec<Task> = (1..=self.parameters.no_tasks)
            .map(|task_no| self.generate_task(rng, task_no))
            .collect();
        Ok(TaskBatch {
            no_tasks: tasks.len(),
            tasks,
        })
    }

    /// Generates a single task: two random polynomials and their product.
    fn generate_task<R: Rng>(&self, rng: &mut R, task_no: usize) -> Task {
        let started = Instant::now();

        let degrees = self.parameters.degree_min..=self.parameters.degree_max;
        let coefficients = self.parameters.coef_min..=self.parameters.coef_max;
        let polynom_1 = Polynomial::random(rng, degrees.clone(), coefficients.clone());
        let polynom_2 = Polynomial::random(rng, degrees, coefficients);
        let product = reference::multiply(&polynom_1, &polynom_2);

        info!(
            "task no. {:2} (degrees: {:5} - {:5} - {:5}) generated in {:?}",
            task_no,
            polynom_1.degree(),
            polynom_2.degree(),
            product.degree(),
            started.elapsed()
        );

        Task {
            task_no,
            polynom_1: (&polynom_1).into(),
            polynom_2: (&polynom_2).into(),
            product: (&product).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::{parameters::errors::ParameterError, poly::naive, task::TaskBatch};

    fn small_parameters() -> Parameters {
        Parameters {
            no_tasks: 10,
            degree_min: 3,
            degree_max: 5,
            coef_min: -19,
            coef_max: 19,
            verbose: false,
        }
    }

    #[test]
    fn test_generate_batch_shape() {
        let parameters = small_parameters();
        let mut rng = SmallRng::seed_from_u64(6);
        let batch = Generator::new(&parameters).generate(&mut rng).unwrap();

        assert_eq!(batch.no_tasks, 10);
        assert_eq!(batch.tasks.len(), 10);
        for (index, task) in batch.tasks.iter().enumerate() {
            assert_eq!(task.task_no, index + 1);
        }
    }

    #[test]
    fn test_generated_tasks_respect_parameters() {
        let parameters = small_parameters();
        let mut rng = SmallRng::seed_from_u64(7);
        let batch = Generator::new(&parameters).generate(&mut rng).unwrap();

        for task in &batch.tasks {
            for record in [&task.polynom_1, &task.polynom_2] {
                assert!((3..=5).contains(&record.degree));
                assert!(record.coefficients.iter().all(|c| (-19..=19).contains(c)));
            }
        }
    }

    #[test]
    fn test_stored_products_are_correct() {
        let parameters = small_parameters();
        let mut rng = SmallRng::seed_from_u64(8);
        let batch = Generator::new(&parameters).generate(&mut rng).unwrap();

        for task in &batch.tasks {
            let expected = naive::multiply(
                &task.polynom_1.to_polynomial(),
                &task.polynom_2.to_polynomial(),
            );
            assert_eq!(task.product.to_polynomial(), expected);
        }
    }

    #[test]
    fn test_invalid_parameters_stop_generation() {
        let parameters = Parameters {
            no_tasks: 0,
            ..small_parameters()
        };
        let mut rng = SmallRng::seed_from_u64(9);
        let error = Generator::new(&parameters).generate(&mut rng).unwrap_err();
        assert!(matches!(
            error,
            PolymulError::Parameters(ParameterError::TaskCount(0))
        ));
    }

    #[test]
    fn test_run_writes_reloadable_batch() {
        let parameters = small_parameters();
        let mut rng = SmallRng::seed_from_u64(10);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        Generator::new(&parameters).run(&mut rng, &path).unwrap();

        let batch = TaskBatch::read_from(&path).unwrap();
        assert_eq!(batch.no_tasks, 10);
    }
}
