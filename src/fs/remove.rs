use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::time::{Duration, SystemTime};

use log::{debug, trace};

use super::{syscall, CleanupError, Directory, RemoveError};

/// Removes the file (or symlink, etc.) at `entry_path`. Directories can't be removed this way.
///
/// # Errors
/// Returns a [`RemoveError`] if the entry couldn't be removed, including
/// [`IsDirectoryError`](super::IsDirectoryError) for directories and
/// [`MissingComponentError`](super::MissingComponentError) if there is nothing to remove.
pub fn remove_entry<P: AsRef<Path>>(entry_path: P) -> Result<(), RemoveError> {
    let entry_path = entry_path.as_ref();
    let pathname = syscall::path_name(entry_path)?;

    // SAFETY: pathname is a valid, null-terminated string which outlives the call.
    if unsafe { libc::unlink(pathname.as_ptr()) } == -1 {
        Err(RemoveError::from_errno(syscall::err_no()))?
    }
    debug!("removed {}", entry_path.display());
    Ok(())
}

/// Removes every regular file directly within `dir` that was last modified more than `max_age`
/// ago, returning how many were removed. Subdirectories and their contents are left alone, as
/// are symlinks.
///
/// # Errors
/// Returns a [`CleanupError`] if the directory can't be listed or an entry can't be inspected or
/// removed. Files removed before the error remain removed.
pub fn remove_older_than<P: AsRef<Path>>(dir: P, max_age: Duration) -> Result<usize, CleanupError> {
    let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
        // Nothing can be older than the start of time.
        return Ok(0);
    };

    let dir_path = dir.as_ref();
    let dir = Directory::open(dir_path)?;
    let mut removed = 0;
    for entry in dir.entries() {
        let entry = entry?;
        if entry.file_type != libc::DT_REG && entry.file_type != libc::DT_UNKNOWN {
            continue;
        }
        let status = dir.status(&entry.name)?;
        if !status.is_file {
            continue;
        }

        let entry_path = dir_path.join(OsStr::from_bytes(entry.name.to_bytes()));
        if status.modified < cutoff {
            remove_entry(&entry_path)?;
            removed += 1;
        } else {
            trace!("keeping {}", entry_path.display());
        }
    }
    Ok(removed)
}
