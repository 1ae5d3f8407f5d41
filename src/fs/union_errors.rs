use std::io;

use derive_more::{Display, Error, From, IsVariant, TryInto};
use libc::c_int;

use super::error::*;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum OpenError {
    Access(AccessError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    Interrupt(InterruptError),
    InvalidPath(InvalidPathError),
    IO(IOError),
    IsDirectory(IsDirectoryError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    OversizedFile(OversizedFileError),
    PathLength(PathLengthError),
    Unexpected(UnexpectedError),
}

impl OpenError {
    pub(crate) const fn from_errno(errno: c_int) -> OpenError {
        match errno {
            libc::EACCES | libc::EPERM => OpenError::Access(AccessError),
            libc::ELOOP => OpenError::ExcessiveLinks(ExcessiveLinksError),
            libc::EMFILE | libc::ENFILE => OpenError::FileCount(FileCountError),
            libc::EINTR => OpenError::Interrupt(InterruptError),
            libc::EIO => OpenError::IO(IOError),
            libc::EISDIR => OpenError::IsDirectory(IsDirectoryError),
            libc::ENOENT => OpenError::MissingComponent(MissingComponentError),
            libc::ENOTDIR => OpenError::NonDirComponent(NonDirComponentError),
            libc::ENOMEM => OpenError::OOM(OOMError),
            libc::EOVERFLOW | libc::EFBIG => OpenError::OversizedFile(OversizedFileError),
            libc::ENAMETOOLONG => OpenError::PathLength(PathLengthError),
            e => OpenError::Unexpected(UnexpectedError(e)),
        }
    }
}

impl From<io::Error> for OpenError {
    fn from(value: io::Error) -> Self {
        match value.raw_os_error() {
            Some(errno) => OpenError::from_errno(errno),
            None => IOError.into(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum ReadError {
    Interrupt(InterruptError),
    IO(IOError),
    IsDirectory(IsDirectoryError),
    Unexpected(UnexpectedError),
}

impl ReadError {
    pub(crate) const fn from_errno(errno: c_int) -> ReadError {
        match errno {
            libc::EINTR => ReadError::Interrupt(InterruptError),
            libc::EIO => ReadError::IO(IOError),
            libc::EISDIR => ReadError::IsDirectory(IsDirectoryError),
            e => ReadError::Unexpected(UnexpectedError(e)),
        }
    }
}

impl From<io::Error> for ReadError {
    /// Errors that didn't come from the OS, like those produced by in-memory readers, are
    /// reported as generic I/O errors.
    fn from(value: io::Error) -> Self {
        match value.raw_os_error() {
            Some(errno) => ReadError::from_errno(errno),
            None => IOError.into(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum RemoveError {
    Access(AccessError),
    Busy(BusyError),
    ExcessiveLinks(ExcessiveLinksError),
    InvalidPath(InvalidPathError),
    IO(IOError),
    IsDirectory(IsDirectoryError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    PathLength(PathLengthError),
    ReadOnlyFS(ReadOnlyFSError),
    Unexpected(UnexpectedError),
}

impl RemoveError {
    pub(crate) const fn from_errno(errno: c_int) -> RemoveError {
        match errno {
            libc::EACCES | libc::EPERM => RemoveError::Access(AccessError),
            libc::EBUSY => RemoveError::Busy(BusyError),
            libc::ELOOP => RemoveError::ExcessiveLinks(ExcessiveLinksError),
            libc::EIO => RemoveError::IO(IOError),
            libc::EISDIR => RemoveError::IsDirectory(IsDirectoryError),
            libc::ENOENT => RemoveError::MissingComponent(MissingComponentError),
            libc::ENOTDIR => RemoveError::NonDirComponent(NonDirComponentError),
            libc::ENOMEM => RemoveError::OOM(OOMError),
            libc::ENAMETOOLONG => RemoveError::PathLength(PathLengthError),
            libc::EROFS => RemoveError::ReadOnlyFS(ReadOnlyFSError),
            e => RemoveError::Unexpected(UnexpectedError(e)),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum ScanError {
    Open(OpenError),
    Read(ReadError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum CleanupError {
    Open(OpenError),
    Read(ReadError),
    Remove(RemoveError),
}
