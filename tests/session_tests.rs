//! Tests for the interactive Session
//!
//! These tests verify:
//! - Menu parsing and re-prompting on bad input
//! - Each menu command end to end
//! - Startup load and explicit save/load
//! - End of input ends the session cleanly

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use roster::session::MenuChoice;
use roster::{Config, Roster, Session, Student};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn config_for(path: &Path) -> Config {
    Config::builder().data_file(path).build()
}

fn setup_temp_config() -> (TempDir, PathBuf, Config) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.csv");
    let config = config_for(&path);
    (temp_dir, path, config)
}

/// Run a full session over `script` and return the final roster and output
fn run_script(config: Config, script: &str) -> (Roster, String) {
    let mut session = Session::new(config, Cursor::new(script.to_string()), Vec::new()).unwrap();
    session.run().unwrap();
    let (roster, output) = session.into_parts();
    (roster, String::from_utf8(output).unwrap())
}

fn names(roster: &Roster) -> Vec<&str> {
    roster.students().iter().map(|s| s.name.as_str()).collect()
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_menu_choice_numbers() {
    assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Add));
    assert_eq!(MenuChoice::from_number(8), Some(MenuChoice::Load));
    assert_eq!(MenuChoice::from_number(0), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::from_number(9), None);
    assert_eq!(MenuChoice::from_number(-1), None);
}

#[test]
fn test_exit_ends_session() {
    let (_temp, _path, config) = setup_temp_config();

    let (roster, output) = run_script(config, "0\n4\n");

    assert!(roster.is_empty());
    assert!(output.contains("Goodbye"));
    // The 4 after exit is never processed
    assert!(!output.contains("The roster is empty"));
}

#[test]
fn test_end_of_input_ends_session() {
    let (_temp, _path, config) = setup_temp_config();

    let (roster, _output) = run_script(config, "");

    assert!(roster.is_empty());
}

#[test]
fn test_non_numeric_choice_reprompts() {
    let (_temp, _path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "abc\n4\n0\n");

    assert!(output.contains("Input must be a number"));
    assert!(output.contains("The roster is empty"));
}

#[test]
fn test_out_of_range_choice_reports_range() {
    let (_temp, _path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "42\n0\n");

    assert!(output.contains("Range is 0-8"));
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_add_and_list() {
    let (_temp, _path, config) = setup_temp_config();

    let (roster, output) = run_script(config, "1\nAnn\n20\n4.0\n1\nBob\n30\n3.5\n4\n0\n");

    assert_eq!(names(&roster), vec!["Ann", "Bob"]);
    assert!(output.contains("Ann added. Roster now holds 1 students."));
    assert!(output.contains("--- Full Roster (2 Students) ---"));
    assert!(output.contains("1     | Ann             | 20    | 4.00"));
    assert!(output.contains("2     | Bob             | 30    | 3.50"));
}

#[test]
fn test_add_invalid_record_is_rejected() {
    let (_temp, _path, config) = setup_temp_config();

    let (roster, output) = run_script(config, "1\nAnn\n0\n4.0\n1\nBob\n20\n7.5\n0\n");

    assert!(roster.is_empty());
    assert!(output.contains("[Error] Invalid student: age must be positive"));
    assert!(output.contains("[Error] Invalid student: grade must be within"));
}

#[test]
fn test_add_non_numeric_age_aborts_operation() {
    let (_temp, _path, config) = setup_temp_config();

    let (roster, output) = run_script(config, "1\nAnn\ntwenty\n4\n0\n");

    assert!(roster.is_empty());
    assert!(output.contains("'twenty' is not a valid number"));
}

#[test]
fn test_add_when_full_skips_prompts() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp.path().join("s.csv"))
        .capacity(1)
        .build();

    let (roster, output) = run_script(config, "1\nAnn\n20\n4.0\n1\n0\n");

    assert_eq!(roster.len(), 1);
    assert!(output.contains("Roster is full (capacity 1)"));
}

#[test]
fn test_delete_found_and_missing() {
    let (_temp, _path, config) = setup_temp_config();

    let (roster, output) = run_script(
        config,
        "1\nAnn\n20\n4.0\n1\nBob\n30\n3.0\n2\nAnn\n2\nZed\n0\n",
    );

    assert_eq!(names(&roster), vec!["Bob"]);
    assert!(output.contains("[Success] Removed 'Ann'."));
    assert!(output.contains("[Info] No student named 'Zed'."));
}

#[test]
fn test_search_by_name_and_age() {
    let (_temp, _path, config) = setup_temp_config();
    let mut session = Session::new(config, Cursor::new("3\n1\nAn\n3\n2\n30\n3\n2\n99\n0\n"), Vec::new()).unwrap();
    {
        let roster = session.roster_mut();
        roster.add(Student::new("Ann", 20, 4.0)).unwrap();
        roster.add(Student::new("Bob", 30, 3.0)).unwrap();
        roster.add(Student::new("Anderson", 40, 2.0)).unwrap();
    }

    session.run().unwrap();
    let (_roster, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("ID: 1 | Name: Ann"));
    assert!(output.contains("ID: 3 | Name: Anderson"));
    assert!(output.contains("ID: 2 | Name: Bob"));
    assert!(output.contains("Nothing matched that query."));
}

#[test]
fn test_search_invalid_mode() {
    let (_temp, _path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "3\n5\n0\n");

    assert!(output.contains("Invalid search option"));
}

#[test]
fn test_stats_empty_and_filled() {
    let (_temp, _path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "5\n1\nA\n20\n4.0\n1\nB\n30\n2.0\n5\n0\n");

    assert!(output.contains("[Info] Roster is empty"));
    assert!(output.contains("Total Students: 2"));
    assert!(output.contains("Average Age: 25.0"));
    assert!(output.contains("Average Grade: 3.00"));
}

#[test]
fn test_sort_by_age_prints_list() {
    let (_temp, _path, config) = setup_temp_config();

    let (roster, output) = run_script(config, "1\nBob\n30\n3.0\n1\nAnn\n20\n4.0\n6\n2\n0\n");

    assert_eq!(names(&roster), vec!["Ann", "Bob"]);
    assert!(output.contains("[Sorted] List sorted by Age."));
    assert!(output.contains("1     | Ann"));
}

#[test]
fn test_sort_needs_two_records() {
    let (_temp, _path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "1\nAnn\n20\n4.0\n6\n0\n");

    assert!(output.contains("Need at least 2 students, have 1"));
    // The key prompt is skipped entirely
    assert!(!output.contains("Sort by: "));
    assert!(output.contains("Goodbye"));
}

#[test]
fn test_sort_by_grade_after_loading_nan_grades() {
    let (_temp, path, config) = setup_temp_config();
    fs::write(&path, "Name,Age,Grade\nAnn,20,4.00\nX,21,nan\nBob,30,1.50\nY,22,NaN\n").unwrap();

    let (roster, output) = run_script(config, "6\n3\n0\n");

    assert!(output.contains("[Sorted] List sorted by Grade."));
    assert_eq!(&names(&roster)[..2], &["Bob", "Ann"]);
    assert!(output.contains("Goodbye"));
}

#[test]
fn test_sort_invalid_key() {
    let (_temp, _path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "6\n4\n6\n0\n0\n");

    assert_eq!(output.matches("That wasn't a valid option").count(), 2);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_writes_data_file() {
    let (_temp, path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "1\nAnn\n20\n4.0\n7\n0\n");

    assert!(output.contains("[Saved] 1 students written to"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Age,Grade\nAnn,20,4.00\n");
}

#[test]
fn test_exit_does_not_save() {
    let (_temp, path, config) = setup_temp_config();

    run_script(config, "1\nAnn\n20\n4.0\n0\n");

    assert!(!path.exists());
}

#[test]
fn test_startup_load_missing_file() {
    let (_temp, _path, config) = setup_temp_config();

    let (_roster, output) = run_script(config, "0\n");

    assert!(output.contains("No saved file found. Starting fresh."));
}

#[test]
fn test_startup_load_existing_file() {
    let (_temp, path, config) = setup_temp_config();
    fs::write(&path, "Name,Age,Grade\nAnn,20,4.00\nBob,30,3.00\n").unwrap();

    let (roster, output) = run_script(config, "0\n");

    assert_eq!(names(&roster), vec!["Ann", "Bob"]);
    assert!(output.contains("[Loaded] 2 students loaded"));
}

#[test]
fn test_startup_load_disabled() {
    let (_temp, path, _config) = setup_temp_config();
    fs::write(&path, "Name,Age,Grade\nAnn,20,4.00\n").unwrap();
    let config = Config::builder().data_file(&path).autoload(false).build();

    let (roster, output) = run_script(config, "0\n");

    assert!(roster.is_empty());
    assert!(!output.contains("[Loaded]"));
}

#[test]
fn test_load_command_replaces_roster_and_warns_on_corruption() {
    let (_temp, path, config) = setup_temp_config();

    let mut session = Session::new(config, Cursor::new("8\n0\n"), Vec::new()).unwrap();
    session.roster_mut().add(Student::new("Stale", 40, 1.0)).unwrap();
    fs::write(&path, "Name,Age,Grade\nAnn,20,4.00\nBo").unwrap();

    session.dispatch(MenuChoice::Load).unwrap();

    let (roster, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(names(&roster), vec!["Ann"]);
    assert!(output.contains("[Warning] Corrupt data at line 3"));
    assert!(output.contains("[Loaded] 1 students loaded"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config::builder().capacity(0).build();

    let result = Session::new(config, Cursor::new(""), Vec::new());

    assert!(result.is_err());
}
