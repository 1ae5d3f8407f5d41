use std::iter::FusedIterator;

use super::find;

/// The bytes that separate tokens: space, comma and tab.
pub const DELIMITERS: &[u8] = b" ,\t";

/// An iterator over the tokens of a line, split on any of the [`DELIMITERS`].
///
/// Runs of delimiters count as a single separator, so no empty tokens are produced. Line endings
/// are not delimiters; a token at the end of a line keeps any `\n` or `\r` until passed through
/// [`trim_line_ending`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub const fn new(line: &'a str) -> Tokens<'a> {
        Tokens { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let trimmed = self.rest.trim_start_matches(|c: char| c.is_ascii() && DELIMITERS.contains(&(c as u8)));
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed
            .bytes()
            .position(|b| DELIMITERS.contains(&b))
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Strips a trailing `\n`, then a trailing `\r`, from a token.
pub fn trim_line_ending(token: &str) -> &str {
    let token = token.strip_suffix('\n').unwrap_or(token);
    token.strip_suffix('\r').unwrap_or(token)
}

/// Returns the `position`-th token (counting from 1) of `line`, starting from where `pattern`
/// first occurs. The matched token itself is number 1.
///
/// The token is returned as an owned copy, with any trailing line ending removed. Returns
/// [`None`] if `pattern` isn't in the line, if `position` is 0, or if there are fewer than
/// `position` tokens from the match onwards.
///
/// # Examples
/// ```
/// # use ganylib::text::unspecific_search;
/// let line = "System uptime is, 3 days 8 hours";
/// assert_eq!(unspecific_search(line, "days", 1).as_deref(), Some("days"));
/// assert_eq!(unspecific_search(line, "days", 2).as_deref(), Some("8"));
/// assert_eq!(unspecific_search(line, "days", 4), None);
/// assert_eq!(unspecific_search(line, "weeks", 1), None);
/// ```
pub fn unspecific_search(line: &str, pattern: &str, position: usize) -> Option<String> {
    let start = find(line.as_bytes(), pattern.as_bytes()).ok()?;
    nth_token(&line[start..], position)
}

/// Returns an owned copy of the `position`-th token (counting from 1) of `line`, trimmed of any
/// trailing line ending.
pub fn nth_token(line: &str, position: usize) -> Option<String> {
    let token = Tokens::new(line).nth(position.checked_sub(1)?)?;
    Some(trim_line_ending(token).to_owned())
}
