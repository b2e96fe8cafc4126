//! Student record
//!
//! A single roster entry and its add-time invariants.

use std::fmt;

use crate::error::{Result, RosterError};

/// Lowest accepted grade (inclusive)
pub const MIN_GRADE: f64 = 0.0;

/// Highest accepted grade (inclusive)
pub const MAX_GRADE: f64 = 5.0;

/// One student in the roster
///
/// `name` is the lookup key for delete and search but is not unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: i32,
    pub grade: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, age: i32, grade: f64) -> Self {
        Self {
            name: name.into(),
            age,
            grade,
        }
    }

    /// Check the invariants required to add this record
    ///
    /// - name non-empty and at most `max_name_len` bytes
    /// - age > 0
    /// - grade within [0.0, 5.0] (NaN fails the range check)
    pub fn validate(&self, max_name_len: usize) -> Result<()> {
        if self.name.is_empty() {
            return Err(RosterError::Validation("name is empty".to_string()));
        }
        if self.name.len() > max_name_len {
            return Err(RosterError::Validation(format!(
                "name is {} bytes, limit is {}",
                self.name.len(),
                max_name_len
            )));
        }
        if self.age <= 0 {
            return Err(RosterError::Validation(format!(
                "age must be positive, got {}",
                self.age
            )));
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&self.grade) {
            return Err(RosterError::Validation(format!(
                "grade must be within {:.1}-{:.1}, got {}",
                MIN_GRADE, MAX_GRADE, self.grade
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {:<15} | Age: {:<3} | Grade: {:.2}",
            self.name, self.age, self.grade
        )
    }
}
