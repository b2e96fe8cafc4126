//! Text codec for the roster file
//!
//! `serialize` is a pure rendering of the records; `deserialize` parses
//! until the first malformed line and reports what it kept.

use std::fmt::Write;

use crate::error::RosterError;
use crate::student::Student;

/// First line of every saved file
pub const HEADER: &str = "Name,Age,Grade";

const DELIMITER: char = ',';

/// The first line that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptLine {
    /// 1-based line number within the input (the header is line 1)
    pub line: usize,

    /// Raw text of the line
    pub content: String,
}

impl From<CorruptLine> for RosterError {
    fn from(corrupt: CorruptLine) -> Self {
        RosterError::CorruptData {
            line: corrupt.line,
            content: corrupt.content,
        }
    }
}

/// Outcome of parsing roster text
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// Records parsed before the parse stopped, in file order
    pub students: Vec<Student>,

    /// Whether the input had a header line at all
    pub has_header: bool,

    /// Set when a malformed line stopped the parse
    pub corrupt: Option<CorruptLine>,

    /// Set when capacity stopped the parse with data lines remaining
    pub truncated: bool,
}

/// Render students as a header line plus one line per record
pub fn serialize(students: &[Student]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + students.len() * 24);
    out.push_str(HEADER);
    out.push('\n');

    for s in students {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{},{},{:.2}", s.name, s.age, s.grade);
    }
    out
}

/// Parse roster text produced by [`serialize`]
///
/// The header is skipped without inspection and blank lines are ignored.
/// Parsing stops at the first line that is not `name,age,grade`, at end of
/// input, or once `capacity` records have been read. Parsed values are not
/// checked against the add-time ranges.
pub fn deserialize(text: &str, capacity: usize, max_name_len: usize) -> Loaded {
    let mut lines = text.lines().enumerate();
    let has_header = lines.next().is_some();

    let mut loaded = Loaded {
        students: Vec::new(),
        has_header,
        corrupt: None,
        truncated: false,
    };

    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        if loaded.students.len() >= capacity {
            loaded.truncated = true;
            break;
        }

        match parse_line(line, max_name_len) {
            Some(student) => loaded.students.push(student),
            None => {
                loaded.corrupt = Some(CorruptLine {
                    line: index + 1,
                    content: line.to_string(),
                });
                break;
            }
        }
    }

    loaded
}

fn parse_line(line: &str, max_name_len: usize) -> Option<Student> {
    let mut fields = line.splitn(3, DELIMITER);
    let name = fields.next()?.trim_start();
    let age = fields.next()?.trim().parse::<i32>().ok()?;
    let grade = fields.next()?.trim().parse::<f64>().ok()?;

    if name.is_empty() || name.len() > max_name_len {
        return None;
    }

    Some(Student::new(name, age, grade))
}
