//! Owned handle to the kernel's change-notification facility.
use crate::flags::WatchFlags;
use std::{
    ffi::CString,
    io,
    os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd},
    os::unix::ffi::OsStrExt,
    path::Path,
};

/// Identifier the facility hands out for a directory registration.
pub(crate) type WatchHandle = i32;

/// The facility descriptor.
/// Acquired once at construction and released exactly once when dropped.
pub(crate) struct Inotify {
    fd: OwnedFd,
}

impl Inotify {
    /// Create a facility instance.
    ///
    /// # Errors
    /// If the facility cannot be created (resource exhaustion, permission).
    /// This is unrecoverable for the watcher's purpose.
    pub fn init() -> io::Result<Self> {
        let fd = unsafe { libc::inotify_init1(libc::IN_CLOEXEC) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(Self {
            fd: unsafe { OwnedFd::from_raw_fd(fd) },
        })
    }

    /// Register a directory with the facility.
    ///
    /// # Notes
    /// + Registering a directory that is already watched merges into the
    ///   existing registration and returns the same handle.
    pub fn add_watch(&self, path: impl AsRef<Path>, flags: WatchFlags) -> io::Result<WatchHandle> {
        let path = CString::new(path.as_ref().as_os_str().as_bytes())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

        let handle =
            unsafe { libc::inotify_add_watch(self.fd.as_raw_fd(), path.as_ptr(), flags.bits()) };
        if handle < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(handle)
    }

    /// Number of bytes currently queued on the descriptor, without
    /// blocking.
    pub fn bytes_available(&self) -> io::Result<usize> {
        let mut available: libc::c_int = 0;
        let rc = unsafe { libc::ioctl(self.fd.as_raw_fd(), libc::FIONREAD, &mut available) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(available as usize)
    }

    /// Read up to `buffer.len()` queued bytes.
    pub fn read_into(&self, buffer: &mut [u8]) -> io::Result<usize> {
        let count =
            unsafe { libc::read(self.fd.as_raw_fd(), buffer.as_mut_ptr().cast(), buffer.len()) };
        if count < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(count as usize)
    }
}

impl AsRawFd for Inotify {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}
