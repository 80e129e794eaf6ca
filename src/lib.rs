//! Dynamic project scheduling model for the U-Engine ecosystem.
//!
//! Provides the data model for project scheduling with a human
//! workforce: tasks requiring skills and effort, employees with salary
//! rates and dedication limits, a task-precedence graph, and a timeline
//! of scheduling events. This crate defines the problem's domain
//! language — assignment and search algorithms live with the consumer,
//! which reads a `DedicationMatrix` sized from the registered entities.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Employee`, `Project`,
//!   `ProjectEvent`, `PrecedenceGraph`, `DedicationMatrix`
//! - **`repository`**: Entity identity and insertion-ordered storage
//!
//! # Architecture
//!
//! This crate is model-only: single-threaded, in-memory, no I/O. A host
//! scheduler owns a `Project`, registers tasks and employees, declares
//! precedence edges, appends timeline events, and hands dedication
//! matrices to an optimization routine. Cycle detection and topological
//! traversal are the consumer's concern; the graph here exposes only
//! minimal queries.
//!
//! # References
//!
//! - Alba & Chicano (2007), "Software project management with GAs"
//! - Luna et al. (2014), "The software project scheduling problem:
//!   A scalability analysis of multi-objective metaheuristics"
//! - Shen et al. (2016), "Dynamic software project scheduling through a
//!   proactive-rescheduling method"

pub mod models;
pub mod repository;
