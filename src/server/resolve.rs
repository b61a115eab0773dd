//! Classify user paths into a directory to watch and an optional filename
//! to filter on.
use crate::error::{Error, Result};
use std::{
    ffi::OsStr,
    os::unix::ffi::OsStrExt,
    path::{Path, PathBuf},
};

const SEPARATOR: u8 = b'/';

/// Where a user path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolved {
    /// Directory the facility will watch.
    pub directory: PathBuf,

    /// Entry name inside the directory, when the caller's interest is a
    /// single file rather than the directory itself.
    pub filename: Option<String>,
}

/// Classify `path` into the directory to watch and the filename to filter
/// on. In priority order:
/// 1. an existing regular file watches its containing directory, resolved
///    to a canonical path, filtered to the file's name;
/// 2. an existing directory is watched as given;
/// 3. a nonexistent path with a trailing separator is taken wholesale as a
///    directory, anticipating its creation;
/// 4. a nonexistent path without one anticipates a file: it splits at the
///    last separator into directory and filename.
///
/// # Errors
/// + [`Error::UnresolvablePath`] when the path does not exist and contains
///   no separator at all.
/// + I/O errors from canonicalizing an existing file's directory.
pub(crate) fn classify(path: impl AsRef<Path>) -> Result<Resolved> {
    let path = path.as_ref();
    if path.is_file() {
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.canonicalize()?,
            // A bare relative name lives in the current directory.
            _ => PathBuf::from(".").canonicalize()?,
        };

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        return Ok(Resolved {
            directory,
            filename,
        });
    }

    // Directories, and anything else that exists without being a regular
    // file, are watched as given.
    if path.exists() {
        return Ok(Resolved {
            directory: path.to_path_buf(),
            filename: None,
        });
    }

    let raw = path.as_os_str().as_bytes();
    if raw.last() == Some(&SEPARATOR) {
        return Ok(Resolved {
            directory: path.to_path_buf(),
            filename: None,
        });
    }

    // Anticipates a file that does not exist yet.
    match raw.iter().rposition(|&byte| byte == SEPARATOR) {
        Some(split) => Ok(Resolved {
            directory: PathBuf::from(OsStr::from_bytes(&raw[..=split])),
            filename: Some(String::from_utf8_lossy(&raw[split + 1..]).into_owned()),
        }),
        None => Err(Error::UnresolvablePath(path.to_path_buf())),
    }
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;
