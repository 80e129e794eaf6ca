//! Project timeline events.
//!
//! Events mark the moments a dynamic scheduler reacts to: work arrives,
//! people leave or come back. The project keeps them in the order they
//! were appended, which need not match the order of their instants.

use serde::{Deserialize, Serialize};

use crate::repository::Oid;

/// A timestamped marker on the project timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEvent {
    /// When the event takes effect (abstract time units).
    pub instant: f64,
    /// What happened.
    pub kind: EventKind,
}

/// Classification of timeline events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A bare timestamp with no attached meaning.
    Marker,
    /// A new task entered the project.
    TaskArrival(Oid),
    /// An employee became unavailable.
    EmployeeLeave(Oid),
    /// A previously unavailable employee returned.
    EmployeeReturn(Oid),
    /// Domain-specific event.
    Custom(String),
}

impl ProjectEvent {
    /// Creates a bare marker event.
    pub fn at(instant: f64) -> Self {
        Self {
            instant,
            kind: EventKind::Marker,
        }
    }

    /// Creates a task-arrival event.
    pub fn task_arrival(instant: f64, task: Oid) -> Self {
        Self {
            instant,
            kind: EventKind::TaskArrival(task),
        }
    }

    /// Creates an employee-leave event.
    pub fn employee_leave(instant: f64, employee: Oid) -> Self {
        Self {
            instant,
            kind: EventKind::EmployeeLeave(employee),
        }
    }

    /// Creates an employee-return event.
    pub fn employee_return(instant: f64, employee: Oid) -> Self {
        Self {
            instant,
            kind: EventKind::EmployeeReturn(employee),
        }
    }

    /// Creates a domain-specific event.
    pub fn custom(instant: f64, label: impl Into<String>) -> Self {
        Self {
            instant,
            kind: EventKind::Custom(label.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_factories() {
        let e = ProjectEvent::at(1.5);
        assert!((e.instant - 1.5).abs() < 1e-10);
        assert_eq!(e.kind, EventKind::Marker);

        let e = ProjectEvent::task_arrival(2.0, 7);
        assert_eq!(e.kind, EventKind::TaskArrival(7));

        let e = ProjectEvent::employee_leave(3.0, 4);
        assert_eq!(e.kind, EventKind::EmployeeLeave(4));

        let e = ProjectEvent::employee_return(4.0, 4);
        assert_eq!(e.kind, EventKind::EmployeeReturn(4));

        let e = ProjectEvent::custom(5.0, "budget-review");
        assert_eq!(e.kind, EventKind::Custom("budget-review".into()));
    }
}
