use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_int, c_void};

use super::InvalidPathError;

pub fn err_no() -> c_int {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// Converts a path into the null-terminated form expected by syscalls.
pub fn path_name(path: &Path) -> Result<CString, InvalidPathError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| InvalidPathError)
}

/// Reads directory entries from `fd` into `dirp` in the kernel's `linux_dirent64` format,
/// returning the number of bytes written, 0 at the end of the directory or -1 on error.
///
/// # Safety
/// `dirp` must be valid for writes of `bytes` bytes.
pub unsafe fn getdents(fd: c_int, dirp: *mut c_void, bytes: usize) -> isize {
    // SAFETY: The caller guarantees that dirp can hold bytes bytes.
    unsafe { libc::syscall(libc::SYS_getdents64, fd, dirp, bytes) as isize }
}
