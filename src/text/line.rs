use std::io::{self, BufRead};

/// Removes exactly one trailing `\n` from `line`, if present.
///
/// # Examples
/// ```
/// # use ganylib::text::kill_nl;
/// let mut line = String::from("uptime\n\n");
/// kill_nl(&mut line);
/// assert_eq!(line, "uptime\n");
/// kill_nl(&mut line);
/// kill_nl(&mut line);
/// assert_eq!(line, "uptime");
/// ```
pub fn kill_nl(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
    }
}

/// Discards everything up to and including the next `\n` from `reader`, such as the rest of a
/// line left behind after parsing a number from it. Returns the number of bytes discarded, which
/// is 0 at end of input.
///
/// # Errors
/// Returns any error produced while reading, other than [`io::ErrorKind::Interrupted`], which is
/// retried.
///
/// # Examples
/// ```
/// # use ganylib::text::dump_buffer;
/// # use std::io::{BufRead, Cursor};
/// let mut input = Cursor::new("42 trailing junk\nnext line\n");
/// input.set_position(2);
/// assert_eq!(dump_buffer(&mut input).unwrap(), 15);
/// let mut line = String::new();
/// input.read_line(&mut line).unwrap();
/// assert_eq!(line, "next line\n");
/// ```
pub fn dump_buffer<R: BufRead>(mut reader: R) -> io::Result<usize> {
    let mut discarded = 0;
    loop {
        let (done, used) = match reader.fill_buf() {
            Ok([]) => return Ok(discarded),
            Ok(available) => match available.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, available.len()),
            },
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        reader.consume(used);
        discarded += used;
        if done {
            return Ok(discarded);
        }
    }
}
