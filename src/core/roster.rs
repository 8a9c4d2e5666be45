//! The roster: ordered collection of employees plus the id allocator.

use crate::errors::{AppError, AppResult};
use crate::models::Employee;

pub const STARTING_EMPLOYEE_ID: u32 = 1;

/// Insertion order is the canonical list-view order. Ids are handed out
/// monotonically and never reused, including after deletion.
#[derive(Debug)]
pub struct Roster {
    employees: Vec<Employee>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            next_id: STARTING_EMPLOYEE_ID,
        }
    }

    /// Validates and appends a new employee. The error message lists every
    /// missing field, not just the first one found.
    pub fn add(
        &mut self,
        first_name: &str,
        last_name: &str,
        middle_name: &str,
        rate: &str,
    ) -> AppResult<&Employee> {
        let first_name = first_name.trim();
        let middle_name = middle_name.trim();
        let last_name = last_name.trim();
        let rate = rate.trim();

        let mut missing = Vec::new();
        if first_name.is_empty() {
            missing.push("Missing first name");
        }
        if last_name.is_empty() {
            missing.push("Missing last name");
        }
        if rate.is_empty() {
            missing.push("Missing hourly rate");
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(missing.join("\n")));
        }

        let hourly_rate: f64 = rate
            .parse()
            .map_err(|_| AppError::InvalidRate(rate.to_string()))?;
        if hourly_rate < 0.0 {
            return Err(AppError::Validation(
                "Hourly rate must not be negative".to_string(),
            ));
        }

        let employee = Employee::new(
            self.next_id,
            first_name.to_string(),
            middle_name.to_string(),
            last_name.to_string(),
            hourly_rate,
        );
        self.next_id += 1;

        let idx = self.employees.len();
        self.employees.push(employee);
        Ok(&self.employees[idx])
    }

    /// Out-of-range indexes are a no-op; the UI should never send one, but
    /// the contract must not crash. Other employees keep their ids.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.employees.len() {
            self.employees.remove(index);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Employee> {
        self.employees.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
