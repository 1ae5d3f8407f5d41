use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("permission denied for the provided path or one of its directories")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file is too large to be opened")]
pub struct OversizedFileError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains a null byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("entry is in use by the system or another process")]
pub struct BusyError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file system is read only")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub i32);
