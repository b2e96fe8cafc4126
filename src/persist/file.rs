//! File save/load
//!
//! Each call opens, fully reads or writes, and closes the file before
//! returning.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::Result;
use crate::roster::Roster;

use super::codec::{deserialize, serialize, CorruptLine};

/// What a load did to the roster
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No file at the path; roster untouched
    Missing,

    /// File had no header line; roster untouched
    Empty,

    /// Roster was reset and replaced
    Loaded(LoadReport),
}

/// Summary of a load that replaced the roster
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Number of records now in the roster
    pub count: usize,

    /// First malformed line, if the parse stopped early
    pub corrupt: Option<CorruptLine>,

    /// Data remained after the roster reached capacity
    pub truncated: bool,
}

/// Write the roster to `path`, replacing any existing file
///
/// Returns the number of records written. On failure the roster is
/// unaffected.
pub fn save(path: &Path, roster: &Roster) -> Result<usize> {
    let text = serialize(roster.students());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    tracing::info!(path = %path.display(), count = roster.len(), "roster saved");
    Ok(roster.len())
}

/// Replace the roster with the contents of `path`
///
/// A missing file is not an error. Malformed content never fails the load;
/// it is reported through [`LoadReport::corrupt`].
pub fn load(path: &Path, roster: &mut Roster) -> Result<LoadOutcome> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no saved roster found");
            return Ok(LoadOutcome::Missing);
        }
        Err(e) => return Err(e.into()),
    };

    let loaded = deserialize(&text, roster.capacity(), roster.max_name_len());
    if !loaded.has_header {
        tracing::info!(path = %path.display(), "saved roster is empty");
        return Ok(LoadOutcome::Empty);
    }

    if let Some(corrupt) = &loaded.corrupt {
        tracing::warn!(
            path = %path.display(),
            line = corrupt.line,
            content = %corrupt.content,
            "corrupt data, keeping records read so far"
        );
    }
    if loaded.truncated {
        tracing::warn!(
            path = %path.display(),
            capacity = roster.capacity(),
            "file holds more records than capacity"
        );
    }

    roster.replace(loaded.students);
    tracing::info!(path = %path.display(), count = roster.len(), "roster loaded");

    Ok(LoadOutcome::Loaded(LoadReport {
        count: roster.len(),
        corrupt: loaded.corrupt,
        truncated: loaded.truncated,
    }))
}
