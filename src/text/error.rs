use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("required input is absent")]
pub struct NullInputError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("pattern not found")]
pub struct PatternNotFoundError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("buffer contains no terminating null byte")]
pub struct MissingTerminatorError;

/// A span that can't be applied to the text it was given for. Only reported by the strict
/// (`try_`) splice methods, the others treat it as a no-op.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Range {start}..{end} is invalid for text with {len} characters!")]
pub struct RangeError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

/// A fixed buffer that is too small to hold the result of an operation, including the
/// terminating null byte.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Buffer with capacity {cap} can't hold {required} bytes!")]
pub struct CapacityError {
    pub required: usize,
    pub cap: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum SearchError {
    NullInput(NullInputError),
    PatternNotFound(PatternNotFoundError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum SpliceError {
    Range(RangeError),
    Capacity(CapacityError),
}
