//! Persistence Module
//!
//! Flat-file storage for the roster.
//!
//! ## Responsibilities
//! - Render the roster as delimited text
//! - Parse that text back, keeping every record before the first bad line
//! - Save/load a file with scoped handles (nothing held across operations)
//!
//! ## File Format
//! ```text
//! Name,Age,Grade          <- header, always written, never read
//! Ann,20,4.00             <- name,age,grade (grade to 2 decimals)
//! Bob,30,3.50
//! ```
//!
//! There is no quoting or escaping. A name containing `,` shifts the
//! remaining fields and is reported as corrupt on the next load.

mod codec;
mod file;

pub use codec::{deserialize, serialize, CorruptLine, Loaded, HEADER};
pub use file::{load, save, LoadOutcome, LoadReport};
