//! Project-scheduling domain models.
//!
//! Provides the core data types for representing a dynamic project
//! scheduling problem: what work exists, who can do it, in which order
//! it must happen, and what changed along the way.
//!
//! # Domain Mappings
//!
//! | u-project | Software | Construction | Consulting |
//! |-----------|----------|--------------|------------|
//! | Task | Feature/Ticket | Work Package | Engagement |
//! | Employee | Developer | Crew Member | Consultant |
//! | ProjectEvent | Sprint Change | Site Incident | Staffing Change |
//! | DedicationMatrix | Allocation Plan | Crew Roster | Billing Split |

mod employee;
mod event;
mod graph;
mod matrix;
mod project;
mod task;

pub use employee::Employee;
pub use event::{EventKind, ProjectEvent};
pub use graph::PrecedenceGraph;
pub use matrix::DedicationMatrix;
pub use project::{InvalidDependencyError, Project};
pub use task::Task;
