//! Project aggregate.
//!
//! A project owns the task and employee repositories, the precedence
//! graph over registered tasks, and the event timeline. The graph is
//! mutated only through `add_dependency`, which validates that both
//! endpoints are registered tasks.
//!
//! # Reference
//! Shen et al. (2016), "Dynamic software project scheduling through a
//! proactive-rescheduling method"

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::repository::{Oid, Repository, SkillId};

use super::{DedicationMatrix, Employee, PrecedenceGraph, ProjectEvent, Task};

/// A dependency edge referenced a task oid that is not registered.
///
/// The requested edge is not inserted; the caller decides whether to
/// abort or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDependencyError {
    /// The oid absent from the task repository.
    pub missing: Oid,
}

impl fmt::Display for InvalidDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dependency references unknown task {}", self.missing)
    }
}

impl std::error::Error for InvalidDependencyError {}

/// A scheduling problem instance: workforce, work, ordering, history.
///
/// # Example
///
/// ```
/// use u_project::models::{Employee, Project, ProjectEvent, Task};
///
/// let mut project = Project::new();
/// project.add_task(Task::new(1).with_effort(10.0).with_skill(1));
/// project.add_task(Task::new(2).with_effort(4.0));
/// project.add_employee(Employee::new(1).with_skill(1).with_normal_salary(1000.0));
/// project.add_dependency(1, 2).unwrap();
/// project.add_event(ProjectEvent::task_arrival(0.0, 1));
///
/// let dm = project.dedication_matrix();
/// assert_eq!((dm.employee_count(), dm.task_count()), (1, 2));
/// assert!(project.graph().has_edge(1, 2));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Registered tasks, keyed by oid.
    pub tasks: Repository<Task>,
    /// Registered employees, keyed by oid.
    pub employees: Repository<Employee>,
    graph: PrecedenceGraph,
    events: Vec<ProjectEvent>,
}

impl Project {
    /// Creates an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task, overwriting any task with the same oid.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.add(task);
    }

    /// Registers an employee, overwriting any employee with the same oid.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.add(employee);
    }

    /// Declares that task `from` must precede task `to`.
    ///
    /// Both oids must already be registered tasks; on failure the graph
    /// is left untouched and the error names the missing oid. Duplicate
    /// edges are accepted and ignored. Cycles are not checked here.
    pub fn add_dependency(&mut self, from: Oid, to: Oid) -> Result<(), InvalidDependencyError> {
        if !self.tasks.contains(from) {
            return Err(InvalidDependencyError { missing: from });
        }
        if !self.tasks.contains(to) {
            return Err(InvalidDependencyError { missing: to });
        }
        self.graph.add_edge(from, to);
        Ok(())
    }

    /// The precedence graph over registered tasks.
    pub fn graph(&self) -> &PrecedenceGraph {
        &self.graph
    }

    /// Appends an event to the timeline.
    pub fn add_event(&mut self, event: ProjectEvent) {
        self.events.push(event);
    }

    /// The full timeline in append order.
    pub fn events(&self) -> &[ProjectEvent] {
        &self.events
    }

    /// Events whose instant lies in the closed interval `[start, finish]`.
    ///
    /// Results keep the timeline's append order, which may differ from
    /// chronological order when events were appended out of time order.
    pub fn events_within_interval(&self, start: f64, finish: f64) -> Vec<&ProjectEvent> {
        self.events
            .iter()
            .filter(|e| e.instant >= start && e.instant <= finish)
            .collect()
    }

    /// Creates a zero-filled dedication matrix sized to the current
    /// repository counts.
    ///
    /// The matrix is a snapshot: registering more tasks or employees
    /// afterwards does not resize it.
    pub fn dedication_matrix(&self) -> DedicationMatrix {
        DedicationMatrix::new(self.employees.len(), self.tasks.len())
    }

    /// Sum of remaining effort across all tasks.
    pub fn total_remaining_effort(&self) -> f64 {
        self.tasks.iter().map(Task::remaining_effort).sum()
    }

    /// Whether every registered task is finished.
    pub fn is_finished(&self) -> bool {
        self.tasks.iter().all(Task::is_finished)
    }

    /// Skills a task requires that no registered employee possesses.
    ///
    /// Returns `None` for an unknown task oid. A non-empty result means
    /// no assignment over the current workforce can complete the task.
    pub fn uncovered_skills(&self, task: Oid) -> Option<HashSet<SkillId>> {
        let task = self.tasks.get(task)?;
        Some(task.missing_skills(self.employees.iter().map(|e| &e.skills)))
    }
}
