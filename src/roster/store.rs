//! Roster store implementation
//!
//! Vec-backed store with an explicit capacity.

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::student::Student;

use super::{SortKey, Stats};

/// A record paired with its current 1-based position
///
/// The position follows roster order and changes after sort or delete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    pub position: usize,
    pub student: &'a Student,
}

/// Result of a delete by name
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The first matching record, now removed
    Removed(Student),

    /// No record had that exact name
    NotFound,
}

impl DeleteOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, DeleteOutcome::Removed(_))
    }
}

/// Bounded, insertion-ordered collection of students
///
/// The roster owns every record; nothing outside it holds a reference
/// across operations.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Records in roster order
    students: Vec<Student>,

    /// Maximum number of records
    capacity: usize,

    /// Maximum name length enforced on add
    max_name_len: usize,
}

impl Roster {
    /// Minimum record count for a sort to be meaningful
    const MIN_SORTABLE: usize = 2;

    /// Create an empty roster with explicit limits
    pub fn new(capacity: usize, max_name_len: usize) -> Self {
        Self {
            students: Vec::with_capacity(capacity),
            capacity,
            max_name_len,
        }
    }

    /// Create an empty roster with the limits from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.capacity, config.max_name_len)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a student, returning the new count
    ///
    /// Fails without touching the roster when full or when the record
    /// breaks an add-time invariant. Duplicate names are allowed.
    pub fn add(&mut self, student: Student) -> Result<usize> {
        if self.is_full() {
            return Err(RosterError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        student.validate(self.max_name_len)?;

        if student.name.contains(',') {
            tracing::warn!(
                name = %student.name,
                "name contains ',' and will not survive a save/load round trip"
            );
        }

        tracing::debug!(name = %student.name, age = student.age, grade = student.grade, "student added");
        self.students.push(student);
        Ok(self.students.len())
    }

    /// Remove the first student whose name equals `name` exactly
    pub fn delete_by_name(&mut self, name: &str) -> DeleteOutcome {
        match self.students.iter().position(|s| s.name == name) {
            Some(index) => {
                let removed = self.students.remove(index);
                tracing::debug!(name = %removed.name, position = index + 1, "student removed");
                DeleteOutcome::Removed(removed)
            }
            None => DeleteOutcome::NotFound,
        }
    }

    /// Sort ascending by `key` in place and return the new order
    ///
    /// The sort is unstable; ties may be reordered.
    pub fn sort(&mut self, key: SortKey) -> Result<&[Student]> {
        self.ensure_sortable()?;

        self.students.sort_unstable_by(|a, b| key.compare(a, b));
        tracing::debug!(%key, count = self.students.len(), "roster sorted");
        Ok(&self.students)
    }

    /// Fails with `InsufficientData` when there are too few records to sort
    pub fn ensure_sortable(&self) -> Result<()> {
        if self.students.len() < Self::MIN_SORTABLE {
            return Err(RosterError::InsufficientData {
                required: Self::MIN_SORTABLE,
                actual: self.students.len(),
            });
        }
        Ok(())
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Replace the contents wholesale (used by load)
    ///
    /// Records beyond capacity are discarded. No validation is applied.
    pub fn replace(&mut self, mut students: Vec<Student>) {
        if students.len() > self.capacity {
            tracing::warn!(
                dropped = students.len() - self.capacity,
                capacity = self.capacity,
                "replacement exceeds capacity, extra records dropped"
            );
            students.truncate(self.capacity);
        }
        self.students = students;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every record with its 1-based position, in roster order
    pub fn list(&self) -> impl Iterator<Item = Entry<'_>> + Clone + '_ {
        self.students
            .iter()
            .enumerate()
            .map(|(index, student)| Entry {
                position: index + 1,
                student,
            })
    }

    /// Records whose name contains `query` (case-sensitive)
    pub fn search_by_name<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = Entry<'a>> + Clone + 'a {
        self.list()
            .filter(move |entry| entry.student.name.contains(query))
    }

    /// Records whose age equals `age`
    pub fn search_by_age(&self, age: i32) -> impl Iterator<Item = Entry<'_>> + Clone + '_ {
        self.list().filter(move |entry| entry.student.age == age)
    }

    /// Count and unrounded means over all records
    pub fn stats(&self) -> Result<Stats> {
        Stats::compute(&self.students).ok_or(RosterError::EmptyRoster)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Records in roster order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(Config::DEFAULT_CAPACITY, Config::DEFAULT_MAX_NAME_LEN)
    }
}
