use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use super::{File, ReadError, ScanError};
use crate::text::{find, kill_nl, nth_token};

/// The states a [`LineScanner`] moves through while looking for a token.
///
/// Scanning starts at `ReadingLine` and ends at either `Found` or `EndOfFile`. A line that fails
/// the pattern check, or doesn't have enough tokens, goes back to `ReadingLine`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    ReadingLine,
    PatternCheck(String),
    Tokenizing(String),
    Found(String),
    EndOfFile,
}

impl ScanState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Found(_) | ScanState::EndOfFile)
    }

    const fn label(&self) -> &'static str {
        match self {
            ScanState::ReadingLine => "reading line",
            ScanState::PatternCheck(_) => "pattern check",
            ScanState::Tokenizing(_) => "tokenizing",
            ScanState::Found(_) => "found",
            ScanState::EndOfFile => "end of file",
        }
    }
}

/// Searches a reader line by line for the first line containing every one of a set of patterns,
/// returning a token from it.
///
/// The scanner never rewinds, so calling [`find`](LineScanner::find) again continues from the
/// line after the last match. Start a new scanner to search from the beginning again.
///
/// Lines are converted to text before they are checked, with any invalid UTF-8 replaced by
/// `U+FFFD`. A token containing such bytes comes back with the replacement character in their
/// place, not the bytes from the input.
#[derive(Debug)]
pub struct LineScanner<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub const fn new(reader: R) -> LineScanner<R> {
        LineScanner {
            reader,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Returns the number of lines read so far.
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Finds the next line that contains all of `patterns` and has at least `offset` tokens,
    /// returning its `offset`-th token (counting from 1, from the start of the line) without any
    /// trailing line ending. Empty patterns match every line. Returns [`None`] once the end of
    /// the input is reached.
    ///
    /// # Errors
    /// Returns any error produced by the reader. Lines read before the error are consumed.
    ///
    /// # Examples
    /// ```
    /// # use ganylib::fs::LineScanner;
    /// # use std::io::Cursor;
    /// let input = Cursor::new("Router uptime is 2 weeks\nSwitch uptime is 3 days\n");
    /// let mut scanner = LineScanner::new(input);
    /// assert_eq!(scanner.find(4, &["uptime", "Switch", ""]).unwrap().as_deref(), Some("3"));
    /// assert_eq!(scanner.find(4, &["uptime"]).unwrap(), None);
    /// ```
    pub fn find(&mut self, offset: usize, patterns: &[&str]) -> io::Result<Option<String>> {
        let mut state = ScanState::ReadingLine;
        loop {
            state = match state {
                ScanState::Found(token) => return Ok(Some(token)),
                ScanState::EndOfFile => return Ok(None),
                state => self.step(state, offset, patterns)?,
            };
        }
    }

    /// Advances the scan by a single state. Terminal states are returned as they are.
    ///
    /// # Errors
    /// Returns any error produced by the reader while in [`ScanState::ReadingLine`].
    pub fn step(&mut self, state: ScanState, offset: usize, patterns: &[&str]) -> io::Result<ScanState> {
        if state.is_terminal() {
            return Ok(state);
        }

        let from = state.label();
        let next = match state {
            ScanState::ReadingLine => self.read_line()?,
            ScanState::PatternCheck(line) => {
                if patterns.iter().all(|p| find(line.as_bytes(), p.as_bytes()).is_ok()) {
                    ScanState::Tokenizing(line)
                } else {
                    ScanState::ReadingLine
                }
            },
            ScanState::Tokenizing(line) => match nth_token(&line, offset) {
                Some(token) => ScanState::Found(token),
                None => {
                    trace!("line {} matched but has fewer than {offset} tokens", self.line_number);
                    ScanState::ReadingLine
                },
            },
            terminal => terminal,
        };
        trace!("line {}: {from} -> {}", self.line_number, next.label());
        Ok(next)
    }

    fn read_line(&mut self) -> io::Result<ScanState> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(ScanState::EndOfFile);
        }
        self.line_number += 1;

        let mut line = String::from_utf8_lossy(&self.buf).into_owned();
        kill_nl(&mut line);
        Ok(ScanState::PatternCheck(line))
    }
}

/// Opens the file at `file_path` and returns the `offset`-th token (counting from 1) of the first
/// line that contains every one of `patterns`. Empty patterns act as wildcards. Returns
/// [`None`] if no line qualifies.
///
/// The file is closed before returning, whatever the outcome. Lines that aren't valid UTF-8 are
/// converted lossily, as described for [`LineScanner`].
///
/// # Errors
/// Returns [`ScanError::Open`] if the file can't be opened and [`ScanError::Read`] if reading
/// from it fails.
///
/// # Examples
/// ```no_run
/// # use ganylib::fs::search_unspecific_string;
/// // " *  Copyright (C) Apr. 2020: ..."
/// let year = search_unspecific_string("notes.txt", 5, &["Copyright", "", ""]).unwrap();
/// ```
pub fn search_unspecific_string<P: AsRef<Path>>(
    file_path: P,
    offset: usize,
    patterns: &[&str],
) -> Result<Option<String>, ScanError> {
    let file_path = file_path.as_ref();
    let file = File::open(file_path)?;
    let mut scanner = LineScanner::new(BufReader::new(file));
    let token = scanner.find(offset, patterns).map_err(ReadError::from)?;

    debug!(
        "searched {} lines of {} for {patterns:?}, found {token:?}",
        scanner.line_number(),
        file_path.display()
    );
    Ok(token)
}
