use std::mem::ManuallyDrop;
use std::ops::Deref;

use derive_more::{Display, Error};
use libc::c_int;
use log::warn;

use super::{syscall, CloseError, IOError, InterruptError, UnexpectedError};

/// Closing a descriptor we own can only report `EBADF` if something else closed it first, after
/// which no file operation can be trusted.
#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub(crate) struct BadFdPanic;

/// An owned file descriptor, closed when dropped.
#[derive(Debug)]
pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn close(self) -> Result<(), CloseError> {
        // Drop would close the descriptor a second time.
        let fd = ManuallyDrop::new(self);
        // SAFETY: close invalidates the provided file descriptor regardless of the outcome, and
        // self has been consumed so it can't be used again.
        if unsafe { libc::close(fd.0) } == -1 {
            match syscall::err_no() {
                libc::EBADF => panic!("{}", BadFdPanic),
                libc::EINTR => Err(InterruptError)?,
                libc::EIO => Err(IOError)?,
                e => warn!("{} while closing file descriptor {}", UnexpectedError(e), fd.0),
            }
        }
        Ok(())
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            // There is no one to return an error to, the descriptor is released either way.
            warn!("error while dropping file descriptor {}: {}", self.0, match syscall::err_no() {
                libc::EBADF => BadFdPanic.to_string(),
                libc::EINTR => InterruptError.to_string(),
                libc::EIO => IOError.to_string(),
                e => UnexpectedError(e).to_string(),
            });
        }
    }
}
