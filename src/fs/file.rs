use std::io::{self, Read};
use std::path::Path;

use log::debug;

use super::{syscall, CloseError, Fd, OpenError};

/// A file opened for reading.
///
/// The underlying descriptor is closed when the File is dropped, so every path out of a function
/// holding one releases it. Use [`close`](File::close) to observe errors from closing instead.
#[derive(Debug)]
pub struct File {
    pub(crate) fd: Fd,
}

impl File {
    /// Opens the file at `file_path` for reading.
    ///
    /// # Errors
    /// Returns an [`OpenError`] describing why the file couldn't be opened, such as
    /// [`MissingComponentError`](super::MissingComponentError) when it doesn't exist.
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<File, OpenError> {
        let file_path = file_path.as_ref();
        let pathname = syscall::path_name(file_path)?;

        // SAFETY: pathname is a valid, null-terminated string which outlives the call.
        match unsafe { libc::open(pathname.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) } {
            -1 => Err(OpenError::from_errno(syscall::err_no())),
            fd => {
                debug!("opened {} as file descriptor {fd}", file_path.display());
                Ok(File { fd: Fd(fd) })
            },
        }
    }

    pub fn close(self) -> Result<(), CloseError> {
        self.fd.close()
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { libc::read(*self.fd, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(io::Error::from_raw_os_error(syscall::err_no())),
            count => Ok(count as usize),
        }
    }
}
