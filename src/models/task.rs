//! Task model.
//!
//! A task is a unit of project work that requires a set of skills and
//! a total effort to complete. Finished effort accumulates as the
//! workforce commits dedication to the task; remaining effort is
//! derived and clamped at zero.
//!
//! # Reference
//! Alba & Chicano (2007), "Software project management with GAs"

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::repository::{Entity, Oid, SkillId};

/// A task to be scheduled.
///
/// # Effort Model
/// Effort is an abstract work quantity (e.g., person-months). Finished
/// effort only grows; overshooting the required total is allowed and
/// simply clamps the remaining effort at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    oid: Oid,
    /// Skills required to work on this task.
    pub skills: HashSet<SkillId>,
    /// Total effort required to complete the task.
    pub effort: f64,
    finished_effort: f64,
}

impl Task {
    /// Creates a new task with the given oid and no required effort.
    pub fn new(oid: Oid) -> Self {
        Self {
            oid,
            skills: HashSet::new(),
            effort: 0.0,
            finished_effort: 0.0,
        }
    }

    /// Sets the total required effort.
    pub fn with_effort(mut self, effort: f64) -> Self {
        self.effort = effort;
        self
    }

    /// Adds a required skill.
    pub fn with_skill(mut self, skill: SkillId) -> Self {
        self.skills.insert(skill);
        self
    }

    /// Adds a skill to the required set. Idempotent.
    pub fn add_skill(&mut self, skill: SkillId) {
        self.skills.insert(skill);
    }

    /// Skills required by this task that no given skill set covers.
    ///
    /// Takes a sequence of possessed-skill sets (e.g., one per assigned
    /// employee), unions them, and returns the required skills outside
    /// that union.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use u_project::models::Task;
    ///
    /// let task = Task::new(1).with_skill(1).with_skill(2).with_skill(3);
    /// let covered: HashSet<u32> = [1, 3].into_iter().collect();
    ///
    /// let gap: HashSet<u32> = [2].into_iter().collect();
    /// assert_eq!(task.missing_skills([&covered]), gap);
    /// ```
    pub fn missing_skills<'a, I>(&self, covered: I) -> HashSet<SkillId>
    where
        I: IntoIterator<Item = &'a HashSet<SkillId>>,
    {
        let union: HashSet<SkillId> = covered.into_iter().flatten().copied().collect();
        self.skills.difference(&union).copied().collect()
    }

    /// Records completed work on this task.
    ///
    /// The amount may exceed the remaining effort; the excess is
    /// absorbed by the clamp in `remaining_effort`.
    pub fn add_finished_effort(&mut self, amount: f64) {
        self.finished_effort += amount;
    }

    /// Effort finished so far.
    pub fn finished_effort(&self) -> f64 {
        self.finished_effort
    }

    /// Effort still required, clamped at zero.
    pub fn remaining_effort(&self) -> f64 {
        (self.effort - self.finished_effort).max(0.0)
    }

    /// Whether no effort remains.
    pub fn is_finished(&self) -> bool {
        self.remaining_effort() == 0.0
    }
}

impl Entity for Task {
    fn oid(&self) -> Oid {
        self.oid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skilled_task() -> Task {
        Task::new(1)
            .with_skill(1)
            .with_skill(2)
            .with_skill(3)
            .with_skill(4)
            .with_skill(5)
    }

    fn set(skills: &[SkillId]) -> HashSet<SkillId> {
        skills.iter().copied().collect()
    }

    #[test]
    fn test_task_builder() {
        let task = skilled_task().with_effort(12.5);
        assert_eq!(task.oid(), 1);
        assert_eq!(task.skills.len(), 5);
        assert!((task.effort - 12.5).abs() < 1e-10);
        assert!((task.finished_effort() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_add_skill_idempotent() {
        let mut task = Task::new(1);
        task.add_skill(9);
        task.add_skill(9);
        assert_eq!(task.skills.len(), 1);
        assert!(task.skills.contains(&9));
    }

    #[test]
    fn test_missing_skills_single_set() {
        let task = skilled_task();
        assert_eq!(task.missing_skills([&set(&[1, 3])]), set(&[2, 4, 5]));
    }

    #[test]
    fn test_missing_skills_union_of_sets() {
        let task = skilled_task();
        let result = task.missing_skills([&set(&[1]), &set(&[2, 3])]);
        assert_eq!(result, set(&[4, 5]));
    }

    #[test]
    fn test_missing_skills_no_sets() {
        let task = skilled_task();
        assert_eq!(task.missing_skills([]), task.skills);
    }

    #[test]
    fn test_missing_skills_fully_covered() {
        let task = skilled_task();
        let result = task.missing_skills([&set(&[1, 2, 3, 4, 5, 6])]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_remaining_effort_tracking() {
        let mut task = Task::new(1).with_effort(10.0);
        assert!((task.remaining_effort() - 10.0).abs() < 1e-10);

        task.add_finished_effort(4.0);
        assert!((task.remaining_effort() - 6.0).abs() < 1e-10);
        assert!(!task.is_finished());
    }

    #[test]
    fn test_remaining_effort_clamps_at_zero() {
        let mut task = Task::new(1).with_effort(5.0);
        task.add_finished_effort(20.0);

        assert!((task.remaining_effort() - 0.0).abs() < 1e-10);
        assert!(task.is_finished());
        // The overshoot is still recorded.
        assert!((task.finished_effort() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_effort_task_is_finished() {
        let task = Task::new(1);
        assert!(task.is_finished());
    }
}
