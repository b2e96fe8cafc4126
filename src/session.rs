//! Interactive session
//!
//! Menu-driven loop that owns the roster and runs one operation per cycle.
//!
//! ## Responsibilities
//! - Load the data file on start (missing file starts empty)
//! - Prompt, parse and dispatch menu commands
//! - Report every data error and keep going
//! - Stop only on Exit or end of input (no implicit save)
//!
//! Input and output are generic so the loop can be driven from tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::persist::{self, LoadOutcome};
use crate::roster::{DeleteOutcome, Entry, Roster, SortKey};
use crate::student::Student;

const RULE: &str = "--------------------------------------------------";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Search,
    List,
    Stats,
    Sort,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its command
    pub fn from_number(n: i64) -> Option<Self> {
        let choice = match n {
            1 => MenuChoice::Add,
            2 => MenuChoice::Delete,
            3 => MenuChoice::Search,
            4 => MenuChoice::List,
            5 => MenuChoice::Stats,
            6 => MenuChoice::Sort,
            7 => MenuChoice::Save,
            8 => MenuChoice::Load,
            0 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Search mode prompted by the Search command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Name,
    Age,
}

/// An interactive roster session over any line reader and writer
pub struct Session<R, W> {
    config: Config,
    roster: Roster,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty roster
    pub fn new(config: Config, input: R, output: W) -> Result<Self> {
        config.validate()?;
        let roster = Roster::from_config(&config);
        Ok(Self {
            config,
            roster,
            input,
            output,
        })
    }

    /// Run the startup load (if enabled) and then the menu loop
    pub fn run(&mut self) -> Result<()> {
        if self.config.autoload {
            self.load()?;
        }

        loop {
            self.show_menu()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            let choice = match line.trim().parse::<i64>() {
                Ok(n) => MenuChoice::from_number(n),
                Err(_) => {
                    writeln!(self.output, "\n[Error] Input must be a number.")?;
                    continue;
                }
            };

            match choice {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "\nGoodbye. Unsaved changes are discarded.")?;
                    break;
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.output, "\n[Error] Invalid choice. Range is 0-8.")?,
            }
        }

        tracing::debug!(count = self.roster.len(), "session ended");
        Ok(())
    }

    /// Execute a single menu command
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Search => self.search(),
            MenuChoice::List => self.print_list(),
            MenuChoice::Stats => self.show_stats(),
            MenuChoice::Sort => self.sort(),
            MenuChoice::Save => self.save(),
            MenuChoice::Load => self.load(),
            MenuChoice::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn add(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Add Student ---")?;
        if self.roster.is_full() {
            let err = RosterError::CapacityExceeded {
                capacity: self.roster.capacity(),
            };
            return self.report_error(err);
        }

        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt_parse::<i32>("Age: ")? else {
            return Ok(());
        };
        let Some(grade) = self.prompt_parse::<f64>("Grade (0.0-5.0): ")? else {
            return Ok(());
        };

        match self.roster.add(Student::new(name.clone(), age, grade)) {
            Ok(count) => writeln!(
                self.output,
                "\n[Success] {} added. Roster now holds {} students.",
                name, count
            )?,
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Delete Student ---")?;
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };

        match self.roster.delete_by_name(&name) {
            DeleteOutcome::Removed(student) => {
                writeln!(self.output, "\n[Success] Removed '{}'.", student.name)?
            }
            DeleteOutcome::NotFound => {
                writeln!(self.output, "\n[Info] No student named '{}'.", name)?
            }
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Search ---")?;
        writeln!(self.output, "1. By Name\n2. By Age")?;
        let Some(mode) = self.prompt_parse::<i64>("Search mode: ")? else {
            return Ok(());
        };
        let mode = match mode {
            1 => SearchMode::Name,
            2 => SearchMode::Age,
            _ => {
                writeln!(self.output, "[Error] Invalid search option.")?;
                return Ok(());
            }
        };

        let found = match mode {
            SearchMode::Name => {
                let Some(query) = self.prompt("Name contains: ")? else {
                    return Ok(());
                };
                write_matches(&mut self.output, self.roster.search_by_name(&query))?
            }
            SearchMode::Age => {
                let Some(age) = self.prompt_parse::<i32>("Age: ")? else {
                    return Ok(());
                };
                write_matches(&mut self.output, self.roster.search_by_age(age))?
            }
        };

        if found == 0 {
            writeln!(self.output, "Nothing matched that query.")?;
        }
        Ok(())
    }

    fn print_list(&mut self) -> Result<()> {
        if self.roster.is_empty() {
            writeln!(self.output, "\n[Info] The roster is empty.")?;
            return Ok(());
        }

        let out = &mut self.output;
        writeln!(out, "\n--- Full Roster ({} Students) ---", self.roster.len())?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{:<5} | {:<15} | {:<5} | {:<5}", "ID", "Name", "Age", "Grade")?;
        writeln!(out, "{}", RULE)?;
        for Entry { position, student } in self.roster.list() {
            writeln!(
                out,
                "{:<5} | {:<15} | {:<5} | {:<5.2}",
                position, student.name, student.age, student.grade
            )?;
        }
        writeln!(out, "{}", RULE)?;
        Ok(())
    }

    fn show_stats(&mut self) -> Result<()> {
        let stats = match self.roster.stats() {
            Ok(stats) => stats,
            Err(e) => return self.report_info(e),
        };

        writeln!(self.output, "\n--- Roster Statistics ---")?;
        writeln!(self.output, "Total Students: {}", stats.count)?;
        writeln!(self.output, "Average Age: {:.1}", stats.average_age)?;
        writeln!(self.output, "Average Grade: {:.2}", stats.average_grade)?;
        Ok(())
    }

    fn sort(&mut self) -> Result<()> {
        if let Err(e) = self.roster.ensure_sortable() {
            return self.report_info(e);
        }

        writeln!(self.output, "\n--- Sort ---")?;
        writeln!(self.output, "1. Name\n2. Age\n3. Grade")?;
        let Some(choice) = self.prompt_parse::<usize>("Sort by: ")? else {
            return Ok(());
        };
        let key = match choice.checked_sub(1).and_then(|i| SortKey::ALL.get(i)) {
            Some(key) => *key,
            None => {
                writeln!(self.output, "[Error] That wasn't a valid option.")?;
                return Ok(());
            }
        };

        if let Err(e) = self.roster.sort(key).map(|_| ()) {
            return self.report_info(e);
        }
        writeln!(self.output, "\n[Sorted] List sorted by {}.", key)?;
        self.print_list()
    }

    fn save(&mut self) -> Result<()> {
        let path = self.config.data_file.clone();
        match persist::save(&path, &self.roster) {
            Ok(count) => writeln!(
                self.output,
                "\n[Saved] {} students written to {}.",
                count,
                path.display()
            )?,
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let path = self.config.data_file.clone();
        let outcome = match persist::load(&path, &mut self.roster) {
            Ok(outcome) => outcome,
            Err(e) => return self.report_error(e),
        };

        match outcome {
            LoadOutcome::Missing => {
                writeln!(self.output, "\n[Info] No saved file found. Starting fresh.")?
            }
            LoadOutcome::Empty => writeln!(self.output, "\n[Info] Data file was empty.")?,
            LoadOutcome::Loaded(report) => {
                if let Some(corrupt) = report.corrupt {
                    writeln!(self.output, "\n[Warning] {}", RosterError::from(corrupt))?;
                }
                if report.truncated {
                    writeln!(
                        self.output,
                        "\n[Warning] Roster capacity reached, remaining records skipped."
                    )?;
                }
                writeln!(
                    self.output,
                    "\n[Loaded] {} students loaded from {}.",
                    report.count,
                    path.display()
                )?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // I/O helpers
    // =========================================================================

    fn show_menu(&mut self) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n============================================")?;
        writeln!(out, "               Student Roster")?;
        writeln!(out, "============================================")?;
        writeln!(out, "1. Add Student")?;
        writeln!(out, "2. Delete Student")?;
        writeln!(out, "3. Search Students")?;
        writeln!(out, "4. View Full List")?;
        writeln!(out, "5. Show Statistics")?;
        writeln!(out, "6. Sort List")?;
        writeln!(out, "7. Save Data")?;
        writeln!(out, "8. Load Data")?;
        writeln!(out, "0. Exit")?;
        writeln!(out, "--------------------------------------------")?;
        write!(out, "Choice: ")?;
        out.flush()?;
        Ok(())
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for a trimmed line of text
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Prompt for a value; a parse failure is reported and yields `None`
    fn prompt_parse<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "[Error] '{}' is not a valid number.", raw)?;
                Ok(None)
            }
        }
    }

    fn report_error(&mut self, err: impl Display) -> Result<()> {
        writeln!(self.output, "\n[Error] {}", err)?;
        Ok(())
    }

    fn report_info(&mut self, err: impl Display) -> Result<()> {
        writeln!(self.output, "\n[Info] {}", err)?;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The roster owned by this session
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable access, e.g. to seed a roster before `run`
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the session, returning the roster and the output sink
    pub fn into_parts(self) -> (Roster, W) {
        (self.roster, self.output)
    }
}

/// Write one line per match and return how many were written
fn write_matches<'a, W: Write>(
    out: &mut W,
    matches: impl Iterator<Item = Entry<'a>>,
) -> Result<usize> {
    writeln!(out, "\nSearch Results:")?;
    let mut found = 0;
    for Entry { position, student } in matches {
        writeln!(out, "ID: {} | {}", position, student)?;
        found += 1;
    }
    Ok(found)
}
