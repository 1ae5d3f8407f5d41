//! Printing the contents of a slice on one line.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

#[cfg(test)]
mod tests;

/// Displays the items of a slice separated by single spaces.
///
/// Any precision given to the formatter is applied to each item, not to the whole output.
///
/// # Examples
/// ```
/// # use ganylib::print::VectorDisplay;
/// assert_eq!(VectorDisplay(&[1, 2, 3]).to_string(), "1 2 3");
/// assert_eq!(format!("{:.1}", VectorDisplay(&[0.5, 1.0])), "0.5 1.0");
/// assert_eq!(VectorDisplay::<u8>(&[]).to_string(), "");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VectorDisplay<'a, T>(pub &'a [T]);

impl<T: Display> Display for VectorDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{item:.precision$}")?,
                None => write!(f, "{item}")?,
            }
        }
        Ok(())
    }
}

/// Writes the items of `vec` to `out` on a single line, separated by spaces.
///
/// # Errors
/// Returns any error produced while writing to `out`.
pub fn write_vector<W: Write, T: Display>(mut out: W, vec: &[T]) -> io::Result<()> {
    writeln!(out, "{}", VectorDisplay(vec))
}

/// Prints the items of `vec` to stdout on a single line, separated by spaces.
pub fn print_vector<T: Display>(vec: &[T]) {
    println!("{}", VectorDisplay(vec));
}

/// Prints a slice of integers to stdout on a single line.
pub fn print_int_vector(vec: &[i32]) {
    print_vector(vec);
}

/// Prints a slice of floats to stdout on a single line, each with six decimal places.
pub fn print_double_vector(vec: &[f64]) {
    println!("{:.6}", VectorDisplay(vec));
}
