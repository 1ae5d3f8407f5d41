use std::fmt::{self, Debug, Formatter};

/// Writes the wrapped string as-is when debug formatted, without the quotes and escapes that
/// [`str`]'s Debug implementation adds.
pub struct DebugRaw(pub String);

impl DebugRaw {
    /// Renders a byte string with ASCII escapes for anything non-printable, so buffers can be
    /// shown without requiring them to be valid UTF-8.
    pub fn escaped(bytes: &[u8]) -> DebugRaw {
        DebugRaw(format!("\"{}\"", bytes.escape_ascii()))
    }
}

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
