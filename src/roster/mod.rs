//! Roster Module
//!
//! The bounded, insertion-ordered store of student records.
//!
//! ## Responsibilities
//! - Append with capacity and validation checks
//! - Delete by exact name (first match wins)
//! - Linear search by name substring or exact age
//! - Aggregate statistics
//! - In-place sort by a chosen key
//!
//! ## Data Structure Choice
//! A `Vec<Student>` with an explicit capacity:
//! - Insertion order is the storage order
//! - `Vec::remove` shifts later records left on delete
//! - Every lookup is a linear scan; the roster is small and bounded

mod sort;
mod stats;
mod store;

pub use sort::SortKey;
pub use stats::Stats;
pub use store::{DeleteOutcome, Entry, Roster};
