//! # Roster
//!
//! A single-user student roster with:
//! - A bounded, insertion-ordered in-memory store
//! - Linear search by name substring or exact age
//! - Aggregate statistics and in-place sorting
//! - Flat-file persistence that tolerates a corrupt tail
//! - A menu-driven interactive session
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive Session                       │
//! │               (menu loop, one op per cycle)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ owns
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Roster    │◄─────────│   Persist   │
//!   │ (Vec + cap) │  replace │ (text file) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod student;
pub mod roster;
pub mod persist;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use roster::{DeleteOutcome, Roster, SortKey, Stats};
pub use session::Session;
pub use student::Student;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
