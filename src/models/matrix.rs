//! Dedication matrix.
//!
//! A dense employee × task grid of dedication factors, the exchange
//! format between this model and an external optimization routine: the
//! solver writes candidate dedications, the model's payment and effort
//! rules evaluate them.
//!
//! Rows are employees and columns are tasks, both addressed by their
//! repository insertion position.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dense employee × task dedication grid.
///
/// Stored row-major; `(employee, task)` addresses one cell. A matrix
/// is a snapshot of the repository sizes at creation time and is not
/// resized when entities are added afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedicationMatrix {
    employees: usize,
    tasks: usize,
    values: Vec<f64>,
}

impl DedicationMatrix {
    /// Creates a zero-filled matrix.
    pub fn new(employees: usize, tasks: usize) -> Self {
        Self {
            employees,
            tasks,
            values: vec![0.0; employees * tasks],
        }
    }

    /// Creates a matrix with every cell drawn uniformly from `[0, 1)`.
    ///
    /// Seed material for population-based search over dedications.
    pub fn random<R: Rng>(employees: usize, tasks: usize, rng: &mut R) -> Self {
        let values = (0..employees * tasks).map(|_| rng.random()).collect();
        Self {
            employees,
            tasks,
            values,
        }
    }

    /// Number of employee rows.
    pub fn employee_count(&self) -> usize {
        self.employees
    }

    /// Number of task columns.
    pub fn task_count(&self) -> usize {
        self.tasks
    }

    /// Whether the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the dedication of an employee to a task.
    pub fn get(&self, employee: usize, task: usize) -> f64 {
        self.values[self.index(employee, task)]
    }

    /// Writes the dedication of an employee to a task.
    pub fn set(&mut self, employee: usize, task: usize, dedication: f64) {
        let index = self.index(employee, task);
        self.values[index] = dedication;
    }

    /// One employee's dedications across all tasks.
    pub fn row(&self, employee: usize) -> &[f64] {
        assert!(employee < self.employees, "employee index out of bounds");
        &self.values[employee * self.tasks..(employee + 1) * self.tasks]
    }

    /// Total dedication of one employee across all tasks.
    ///
    /// Compare against the employee's `max_dedication` to detect
    /// over-allocation.
    pub fn employee_total(&self, employee: usize) -> f64 {
        self.row(employee).iter().sum()
    }

    fn index(&self, employee: usize, task: usize) -> usize {
        assert!(employee < self.employees, "employee index out of bounds");
        assert!(task < self.tasks, "task index out of bounds");
        employee * self.tasks + task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_new_is_zero_filled() {
        let dm = DedicationMatrix::new(2, 3);
        assert_eq!(dm.employee_count(), 2);
        assert_eq!(dm.task_count(), 3);
        for e in 0..2 {
            for t in 0..3 {
                assert!((dm.get(e, t) - 0.0).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_set_get_row_major() {
        let mut dm = DedicationMatrix::new(2, 3);
        dm.set(0, 1, 0.5);
        dm.set(1, 2, 0.75);

        assert!((dm.get(0, 1) - 0.5).abs() < 1e-10);
        assert!((dm.get(1, 2) - 0.75).abs() < 1e-10);
        assert_eq!(dm.row(0), &[0.0, 0.5, 0.0]);
        assert_eq!(dm.row(1), &[0.0, 0.0, 0.75]);
    }

    #[test]
    fn test_employee_total() {
        let mut dm = DedicationMatrix::new(1, 3);
        dm.set(0, 0, 0.4);
        dm.set(0, 2, 0.7);

        assert!((dm.employee_total(0) - 1.1).abs() < 1e-10);
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DedicationMatrix::new(0, 5);
        assert!(dm.is_empty());
        assert_eq!(dm.employee_count(), 0);
        assert_eq!(dm.task_count(), 5);
    }

    #[test]
    fn test_random_in_unit_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let dm = DedicationMatrix::random(3, 4, &mut rng);

        for e in 0..3 {
            for t in 0..4 {
                let v = dm.get(e, t);
                assert!((0.0..1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let mut rng1 = SmallRng::seed_from_u64(7);
        let mut rng2 = SmallRng::seed_from_u64(7);

        let a = DedicationMatrix::random(2, 2, &mut rng1);
        let b = DedicationMatrix::random(2, 2, &mut rng2);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "task index out of bounds")]
    fn test_out_of_bounds_access_panics() {
        let dm = DedicationMatrix::new(2, 2);
        dm.get(1, 2);
    }
}
