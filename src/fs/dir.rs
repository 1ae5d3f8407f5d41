use std::ffi::{CStr, CString};
use std::mem::MaybeUninit;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::debug;

use super::{syscall, Fd, IOError, OpenError, ReadError};

const BUFFER_SIZE: usize = 4096;

// Offsets into a linux_dirent64 record: d_ino (u64), d_off (i64), d_reclen (u16), d_type (u8),
// then the null-terminated name.
const RECLEN_OFFSET: usize = 16;
const TYPE_OFFSET: usize = 18;
const NAME_OFFSET: usize = 19;

/// A directory opened for listing.
#[derive(Debug)]
pub(crate) struct Directory {
    fd: Fd,
}

/// An entry read from a [`Directory`]. `.` and `..` are never produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirEntry {
    pub name: CString,
    /// One of the `libc::DT_*` constants. Some filesystems always report `DT_UNKNOWN`.
    pub file_type: u8,
}

/// The parts of an entry's status that are needed for cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryStatus {
    pub is_file: bool,
    pub modified: SystemTime,
}

impl Directory {
    pub fn open(dir_path: &Path) -> Result<Directory, OpenError> {
        let pathname = syscall::path_name(dir_path)?;
        let flags = libc::O_RDONLY | libc::O_DIRECTORY | libc::O_CLOEXEC;

        // SAFETY: pathname is a valid, null-terminated string which outlives the call.
        match unsafe { libc::open(pathname.as_ptr(), flags) } {
            -1 => Err(OpenError::from_errno(syscall::err_no())),
            fd => {
                debug!("opened directory {} as file descriptor {fd}", dir_path.display());
                Ok(Directory { fd: Fd(fd) })
            },
        }
    }

    pub fn entries(&self) -> DirEntries<'_> {
        DirEntries {
            dir: self,
            buf: vec![0; BUFFER_SIZE].into_boxed_slice(),
            head: 0,
            filled: 0,
            done: false,
        }
    }

    /// Returns the status of the entry called `name` within this directory. Symlinks are not
    /// followed.
    pub fn status(&self, name: &CStr) -> Result<EntryStatus, ReadError> {
        let mut stat = MaybeUninit::<libc::stat>::uninit();
        // SAFETY: name is null-terminated and stat is valid for writes of a whole libc::stat.
        let result = unsafe {
            libc::fstatat(*self.fd, name.as_ptr(), stat.as_mut_ptr(), libc::AT_SYMLINK_NOFOLLOW)
        };
        if result == -1 {
            Err(ReadError::from_errno(syscall::err_no()))?
        }
        // SAFETY: fstatat succeeded, so stat has been initialized.
        let stat = unsafe { stat.assume_init() };

        Ok(EntryStatus {
            is_file: stat.st_mode & libc::S_IFMT == libc::S_IFREG,
            modified: system_time(stat.st_mtime as i64, stat.st_mtime_nsec as i64),
        })
    }
}

fn system_time(secs: i64, nsecs: i64) -> SystemTime {
    let whole = Duration::from_secs(secs.unsigned_abs());
    let base = if secs < 0 { UNIX_EPOCH - whole } else { UNIX_EPOCH + whole };
    base + Duration::from_nanos(nsecs.unsigned_abs())
}

/// Iterates over the entries of a [`Directory`], refilling its buffer with `getdents64` as
/// needed. Iteration stops after the first error.
pub(crate) struct DirEntries<'a> {
    dir: &'a Directory,
    buf: Box<[u8]>,
    head: usize,
    filled: usize,
    done: bool,
}

impl DirEntries<'_> {
    fn fill(&mut self) -> Result<bool, ReadError> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { syscall::getdents(*self.dir.fd, self.buf.as_mut_ptr().cast(), self.buf.len()) } {
            -1 => Err(ReadError::from_errno(syscall::err_no())),
            0 => Ok(false),
            count => {
                self.head = 0;
                self.filled = count as usize;
                Ok(true)
            },
        }
    }

    /// Splits the record at head into its length, type and name.
    fn record(&self) -> Option<(usize, u8, &CStr)> {
        let record = self.buf.get(self.head..self.filled)?;
        let reclen = u16::from_ne_bytes([*record.get(RECLEN_OFFSET)?, *record.get(RECLEN_OFFSET + 1)?]);
        let reclen = usize::from(reclen);
        let name = CStr::from_bytes_until_nul(record.get(NAME_OFFSET..reclen)?).ok()?;
        Some((reclen, *record.get(TYPE_OFFSET)?, name))
    }
}

impl Iterator for DirEntries<'_> {
    type Item = Result<DirEntry, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if self.head >= self.filled {
                match self.fill() {
                    Ok(true) => {},
                    Ok(false) => self.done = true,
                    Err(err) => {
                        self.done = true;
                        return Some(Err(err));
                    },
                }
                continue;
            }

            let Some((reclen, file_type, name)) = self.record() else {
                self.done = true;
                return Some(Err(IOError.into()));
            };
            let entry = match name.to_bytes() {
                b"." | b".." => None,
                _ => Some(DirEntry { name: name.to_owned(), file_type }),
            };
            self.head += reclen;
            if let Some(entry) = entry {
                return Some(Ok(entry));
            }
        }
        None
    }
}
