//! Sort keys
//!
//! One comparison function dispatched on the chosen key.

use std::cmp::Ordering;
use std::fmt;

use crate::student::Student;

/// Field that governs sort order (always ascending)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Byte-wise lexicographic
    Name,

    /// Numeric
    Age,

    /// Sign of the difference, no epsilon; NaN by `total_cmp`
    Grade,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Age, SortKey::Grade];

    /// Compare two students by this key
    pub fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortKey::Name => a.name.as_bytes().cmp(b.name.as_bytes()),
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::Grade => {
                // NaN has no sign of difference; order it by bit pattern so
                // the comparison stays a total order.
                if a.grade.is_nan() || b.grade.is_nan() {
                    return a.grade.total_cmp(&b.grade);
                }

                // Only an exactly-zero difference ties.
                let diff = a.grade - b.grade;
                if diff < 0.0 {
                    Ordering::Less
                } else if diff > 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Name => "Name",
            SortKey::Age => "Age",
            SortKey::Grade => "Grade",
        };
        f.write_str(label)
    }
}
