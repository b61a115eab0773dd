use std::path::PathBuf;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred with the underlying notification facility.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The path does not exist and contains no separator, so there is no
    /// directory to resolve it against.
    #[error("could not resolve {0:?} into a directory to watch")]
    UnresolvablePath(PathBuf),

    /// The facility's buffer did not divide into whole change records.
    /// Scoped to a single drain cycle; the watcher resumes on the next one.
    #[error("truncated change record at byte {offset}")]
    Decode { offset: usize },

    /// The operation is declared but not implemented.
    #[error("not supported")]
    NotSupported,

    /// The watcher is no longer running.
    #[error("watcher disconnected")]
    Disconnected,
}
