//! Employee model.
//!
//! An employee brings a skill set and is paid from the dedication
//! committed to tasks over a duration. Dedication is a fractional
//! full-time-equivalent: 1.0 is full-time, anything above (up to the
//! employee's maximum) is overtime.
//!
//! # Reference
//! Alba & Chicano (2007), "Software project management with GAs"

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::repository::{Entity, Oid, SkillId};

/// An employee that can be dedicated to tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    oid: Oid,
    /// Skills this employee possesses.
    pub skills: HashSet<SkillId>,
    /// Largest dedication factor this employee accepts (1.0 = full-time).
    pub max_dedication: f64,
    /// Salary rate for dedication up to full-time.
    pub normal_salary: f64,
    /// Salary rate for dedication beyond full-time.
    pub overtime_salary: f64,
}

impl Employee {
    /// Creates a new employee with full-time maximum dedication and
    /// zero salary rates.
    pub fn new(oid: Oid) -> Self {
        Self {
            oid,
            skills: HashSet::new(),
            max_dedication: 1.0,
            normal_salary: 0.0,
            overtime_salary: 0.0,
        }
    }

    /// Adds a possessed skill.
    pub fn with_skill(mut self, skill: SkillId) -> Self {
        self.skills.insert(skill);
        self
    }

    /// Sets the maximum dedication factor.
    pub fn with_max_dedication(mut self, max_dedication: f64) -> Self {
        self.max_dedication = max_dedication;
        self
    }

    /// Sets the normal salary rate.
    pub fn with_normal_salary(mut self, normal_salary: f64) -> Self {
        self.normal_salary = normal_salary;
        self
    }

    /// Sets the overtime salary rate.
    pub fn with_overtime_salary(mut self, overtime_salary: f64) -> Self {
        self.overtime_salary = overtime_salary;
        self
    }

    /// Adds a skill to the possessed set. Idempotent.
    pub fn add_skill(&mut self, skill: SkillId) {
        self.skills.insert(skill);
    }

    /// Whether this employee possesses a given skill.
    pub fn has_skill(&self, skill: SkillId) -> bool {
        self.skills.contains(&skill)
    }

    /// Pay owed for working at `dedication` over `duration`.
    ///
    /// Dedication above `max_dedication` is ignored, not an error. The
    /// portion up to 1.0 is paid at the normal rate; the portion above
    /// 1.0 at the overtime rate.
    ///
    /// # Example
    ///
    /// ```
    /// use u_project::models::Employee;
    ///
    /// let employee = Employee::new(1)
    ///     .with_max_dedication(1.1)
    ///     .with_normal_salary(1000.0)
    ///     .with_overtime_salary(2000.0);
    ///
    /// // 2 units full-time plus 0.1 overtime: 2000 + 400.
    /// assert!((employee.payment(2.0, 1.1) - 2400.0).abs() < 1e-10);
    /// ```
    pub fn payment(&self, duration: f64, dedication: f64) -> f64 {
        let dedication = dedication.min(self.max_dedication);
        let normal = dedication.min(1.0);
        let overtime = (dedication - 1.0).max(0.0);
        self.normal_salary * normal * duration + self.overtime_salary * overtime * duration
    }
}

impl Entity for Employee {
    fn oid(&self) -> Oid {
        self.oid
    }
}
