//! Aggregate statistics over the roster

use crate::student::Student;

/// Means over every current record
///
/// Values are unrounded; display precision is the caller's choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub average_age: f64,
    pub average_grade: f64,
}

impl Stats {
    /// Returns `None` for an empty slice
    pub(crate) fn compute(students: &[Student]) -> Option<Self> {
        if students.is_empty() {
            return None;
        }

        let (total_age, total_grade) = students
            .iter()
            .fold((0.0_f64, 0.0_f64), |(age, grade), s| {
                (age + f64::from(s.age), grade + s.grade)
            });
        let count = students.len();

        Some(Self {
            count,
            average_age: total_age / count as f64,
            average_grade: total_grade / count as f64,
        })
    }
}
