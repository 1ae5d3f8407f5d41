#![cfg(test)]

use std::cell::RefCell;
use std::fs::{self as std_fs, FileTimes};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use std::time::{Duration, SystemTime};

use log::{LevelFilter, Log, Metadata, Record};

use tempfile::{NamedTempFile, TempDir};

use super::*;

const SHOW_VERSION: &str = "\
Cisco IOS Software, C2960 Software, Version 15.0(2)SE4\r
Copyright (c) 1986-2013 by Cisco Systems, Inc.\r
\r
Switch uptime is 1 year, 2 weeks, 3 days, 4 hours, 5 minutes\r
Router uptime is 8 weeks, 1 day, 2 hours\r
System image file is \"flash:c2960-lanbasek9-mz.150-2.SE4.bin\"\r
";

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Counts the descriptors this process has open on `path`.
fn open_descriptors(path: &Path) -> usize {
    let path = path.canonicalize().unwrap();
    std_fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|entry| std_fs::read_link(entry.ok()?.path()).ok())
        .filter(|target| *target == path)
        .count()
}

thread_local! {
    static LOG_LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Collects log messages per thread, so tests running in parallel don't see each other's.
struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        LOG_LINES.with_borrow_mut(|lines| lines.push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

fn capture_logs() {
    // Only the first test to get here installs the logger.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    LOG_LINES.with_borrow_mut(Vec::clear);
}

fn captured_logs() -> Vec<String> {
    LOG_LINES.with_borrow(Clone::clone)
}

#[test]
fn test_search_unspecific_string() {
    let file = temp_file(SHOW_VERSION);

    assert_eq!(
        search_unspecific_string(file.path(), 7, &["Version", "", ""]),
        Ok(Some("15.0(2)SE4".to_owned())),
        "The trailing carriage return should be trimmed."
    );
    assert_eq!(
        search_unspecific_string(file.path(), 4, &["uptime", "Router", ""]),
        Ok(Some("8".to_owned())),
        "Every pattern should be required."
    );
    assert_eq!(
        search_unspecific_string(file.path(), 1, &["uptime"]),
        Ok(Some("Switch".to_owned())),
        "Tokens should be counted from the start of the line."
    );
    assert_eq!(search_unspecific_string(file.path(), 1, &["Firewall", "uptime"]), Ok(None));
    assert_eq!(search_unspecific_string(file.path(), 0, &[""]), Ok(None));
}

#[test]
fn test_token_count_restarts_each_line() {
    let file = temp_file("uptime is\nuptime is 5 days\n");
    assert_eq!(
        search_unspecific_string(file.path(), 3, &["uptime"]),
        Ok(Some("5".to_owned())),
        "A matching line without enough tokens should be skipped."
    );

    let file = temp_file("last line without newline");
    assert_eq!(
        search_unspecific_string(file.path(), 4, &["", "", ""]).unwrap().as_deref(),
        Some("newline")
    );
}

#[test]
fn test_search_unspecific_string_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    assert_eq!(
        search_unspecific_string(&missing, 1, &["x"]),
        Err(ScanError::Open(OpenError::MissingComponent(MissingComponentError)))
    );
    assert!(
        search_unspecific_string("bad\0path", 1, &["x"])
            .unwrap_err()
            .is_open(),
        "An interior null byte should be rejected before reaching the OS."
    );
    assert_eq!(
        search_unspecific_string(dir.path(), 1, &["x"]),
        Err(ScanError::Read(ReadError::IsDirectory(IsDirectoryError))),
        "Directories can be opened but not read."
    );
}

#[test]
fn test_search_closes_file() {
    // A plain file, since a NamedTempFile keeps its own descriptor open.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("show_version.txt");
    std_fs::write(&path, SHOW_VERSION).unwrap();

    assert_eq!(
        search_unspecific_string(&path, 7, &["Version"]),
        Ok(Some("15.0(2)SE4".to_owned()))
    );
    assert_eq!(open_descriptors(&path), 0, "The file should be closed after a match.");

    assert_eq!(search_unspecific_string(&path, 1, &["missing"]), Ok(None));
    assert_eq!(open_descriptors(&path), 0, "The file should be closed at the end of the file.");

    assert!(search_unspecific_string(dir.path(), 1, &["x"]).unwrap_err().is_read());
    assert_eq!(open_descriptors(dir.path()), 0, "The file should be closed after an error.");
}

#[test]
fn test_line_scanner_replaces_invalid_utf8() {
    let mut scanner = LineScanner::new(Cursor::new(b"id \xff1 ok\n".to_vec()));
    assert_eq!(scanner.find(2, &["id"]).unwrap().as_deref(), Some("\u{FFFD}1"));
    let mut scanner = LineScanner::new(Cursor::new(b"id \xff1 ok\n".to_vec()));
    assert_eq!(
        scanner.find(1, &["\u{FFFD}"]).unwrap().as_deref(),
        Some("id"),
        "Patterns are checked against the converted line."
    );
}

#[test]
fn test_scan_traces_transitions() {
    capture_logs();
    let mut scanner = LineScanner::new(Cursor::new("a\na b\n"));
    assert_eq!(scanner.find(2, &["a"]).unwrap().as_deref(), Some("b"));
    assert_eq!(captured_logs(), [
        "line 1: reading line -> pattern check",
        "line 1: pattern check -> tokenizing",
        "line 1 matched but has fewer than 2 tokens",
        "line 1: tokenizing -> reading line",
        "line 2: reading line -> pattern check",
        "line 2: pattern check -> tokenizing",
        "line 2: tokenizing -> found",
    ]);

    capture_logs();
    assert_eq!(scanner.find(2, &["a"]).unwrap(), None);
    assert_eq!(captured_logs(), ["line 2: reading line -> end of file"]);
}

#[test]
fn test_line_scanner_continues_after_match() {
    let mut scanner = LineScanner::new(Cursor::new(SHOW_VERSION));
    assert_eq!(scanner.find(5, &["uptime is"]).unwrap().as_deref(), Some("year"));
    assert_eq!(scanner.line_number(), 4);
    assert_eq!(
        scanner.find(5, &["uptime is"]).unwrap().as_deref(),
        Some("weeks"),
        "A second search should start after the previous match."
    );
    assert_eq!(scanner.find(5, &["uptime is"]).unwrap(), None);
    assert_eq!(scanner.line_number(), 6);
}

#[test]
fn test_scan_states() {
    let mut scanner = LineScanner::new(Cursor::new("a b c\nd e\n"));
    let patterns = ["e"];

    let state = scanner.step(ScanState::ReadingLine, 2, &patterns).unwrap();
    assert_eq!(state, ScanState::PatternCheck("a b c".to_owned()));
    let state = scanner.step(state, 2, &patterns).unwrap();
    assert_eq!(state, ScanState::ReadingLine);

    let state = scanner.step(state, 2, &patterns).unwrap();
    assert_eq!(state, ScanState::PatternCheck("d e".to_owned()));
    let state = scanner.step(state, 2, &patterns).unwrap();
    assert_eq!(state, ScanState::Tokenizing("d e".to_owned()));
    let state = scanner.step(state, 2, &patterns).unwrap();
    assert_eq!(state, ScanState::Found("e".to_owned()));
    assert!(state.is_terminal());
    assert_eq!(
        scanner.step(state.clone(), 2, &patterns).unwrap(),
        state,
        "Terminal states shouldn't change."
    );

    let state = scanner.step(ScanState::ReadingLine, 2, &patterns).unwrap();
    assert_eq!(state, ScanState::EndOfFile);
    assert!(state.is_terminal());

    let state = scanner.step(ScanState::Tokenizing("one".to_owned()), 2, &patterns).unwrap();
    assert_eq!(state, ScanState::ReadingLine, "Too few tokens should move on to the next line.");
}

#[test]
fn test_file_read() {
    let file = temp_file("contents");
    let mut opened = File::open(file.path()).unwrap();
    let mut contents = String::new();
    opened.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "contents");
    assert_eq!(opened.close(), Ok(()));
}

#[test]
fn test_remove_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entry");
    std_fs::write(&path, "x").unwrap();

    assert_eq!(remove_entry(&path), Ok(()));
    assert!(!path.exists());
    assert_eq!(
        remove_entry(&path),
        Err(RemoveError::MissingComponent(MissingComponentError))
    );
    assert_eq!(
        remove_entry(dir.path()),
        Err(RemoveError::IsDirectory(IsDirectoryError))
    );
}

#[test]
fn test_remove_older_than() {
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("old.log");
    let new = dir.path().join("new.log");
    let sub_dir = dir.path().join("archive");
    std_fs::write(&old, "old").unwrap();
    std_fs::write(&new, "new").unwrap();
    std_fs::create_dir(&sub_dir).unwrap();
    std_fs::write(sub_dir.join("nested.log"), "nested").unwrap();

    let ten_days_ago = SystemTime::now() - Duration::from_secs(10 * 24 * 60 * 60);
    let times = FileTimes::new().set_modified(ten_days_ago);
    std_fs::File::options().write(true).open(&old).unwrap().set_times(times).unwrap();

    let one_day = Duration::from_secs(24 * 60 * 60);
    assert_eq!(remove_older_than(dir.path(), one_day), Ok(1));
    assert!(!old.exists());
    assert!(new.exists());
    assert!(sub_dir.join("nested.log").exists(), "Subdirectories shouldn't be touched.");

    assert_eq!(remove_older_than(dir.path(), Duration::MAX), Ok(0));
    assert_eq!(
        remove_older_than(dir.path().join("missing"), one_day),
        Err(CleanupError::Open(OpenError::MissingComponent(MissingComponentError)))
    );
}

#[test]
fn test_directory_entries() {
    let dir = TempDir::new().unwrap();
    // Long names, so the listing doesn't fit in a single read.
    let mut expected: Vec<String> = (0..200).map(|i| format!("{i:03}-{}", "x".repeat(60))).collect();
    for name in &expected {
        std_fs::write(dir.path().join(name), "").unwrap();
    }
    std_fs::create_dir(dir.path().join("sub")).unwrap();
    expected.push("sub".to_owned());

    let opened = Directory::open(dir.path()).unwrap();
    let mut names: Vec<String> = opened
        .entries()
        .map(|entry| entry.unwrap().name.into_string().unwrap())
        .collect();
    names.sort();
    expected.sort();
    assert_eq!(names, expected, "Every entry except . and .. should be listed once.");

    let status = opened.status(c"sub").unwrap();
    assert!(!status.is_file);
    assert!(opened.status(c"000-").is_err());
    drop(opened);
    assert_eq!(open_descriptors(dir.path()), 0);
}

#[test]
fn test_remove_older_than_needs_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("file.log");
    std_fs::write(&path, "x").unwrap();

    assert_eq!(
        remove_older_than(&path, Duration::ZERO),
        Err(CleanupError::Open(OpenError::NonDirComponent(NonDirComponentError)))
    );
    assert!(path.exists());

    std::os::unix::fs::symlink(&path, dir.path().join("link.log")).unwrap();
    std::thread::sleep(Duration::from_millis(10));
    assert_eq!(
        remove_older_than(dir.path(), Duration::from_millis(1)),
        Ok(1),
        "Only the file should be removed, not the symlink to it."
    );
    assert!(!path.exists());
    assert!(std_fs::symlink_metadata(dir.path().join("link.log")).is_ok());
    assert_eq!(open_descriptors(dir.path()), 0);
}
