//! Client to communicate with the watcher server.
use crate::{
    command::Command,
    error::{Error, Result},
    flags::WatchFlags,
};
use crossbeam::channel::{self, Sender};
use std::path::PathBuf;

/// Communicate with the file system watcher.
pub struct Client {
    tx: Sender<Command>,
}

impl Client {
    pub fn new(tx: Sender<Command>) -> Self {
        Self { tx }
    }

    /// Register interest in a path, watching for every change kind.
    pub fn add_path(&self, path: impl Into<PathBuf>) -> Result {
        self.add_path_with(path, true, WatchFlags::ALL_EVENTS)
    }

    /// Register interest in a path.
    ///
    /// The path may name an existing file, an existing directory, or a
    /// file that does not exist yet. Interest lands on the containing
    /// directory, filtered to the file's name where one is present.
    ///
    /// # Arguments
    /// 1. `path`: Path to watch.
    /// 2. `recursive`: Carried for future use; subdirectories are not yet
    ///    discovered automatically.
    /// 3. `flags`: Changes to be notified about.
    ///
    /// # Errors
    /// + [`Error::UnresolvablePath`] if the path does not exist and has no
    ///   separator to split at.
    /// + [`Error::Io`] if the facility rejects the resolved directory.
    pub fn add_path_with(
        &self,
        path: impl Into<PathBuf>,
        recursive: bool,
        flags: WatchFlags,
    ) -> Result {
        let (tx, rx) = channel::bounded(1);
        self.tx
            .send(Command::AddPath {
                path: path.into(),
                recursive,
                flags,
                tx,
            })
            .map_err(|_| Error::Disconnected)?;

        rx.recv().map_err(|_| Error::Disconnected)?
    }

    /// Remove interest in a path.
    ///
    /// # Errors
    /// Always [`Error::NotSupported`]; unwatching is not implemented.
    pub fn remove_path(&self, path: impl Into<PathBuf>) -> Result {
        let (tx, rx) = channel::bounded(1);
        self.tx
            .send(Command::RemovePath {
                path: path.into(),
                tx,
            })
            .map_err(|_| Error::Disconnected)?;

        rx.recv().map_err(|_| Error::Disconnected)?
    }

    /// Shutdown the watcher.
    ///
    /// # Notes
    /// + Consumes self to close the channel.
    pub fn shutdown(self) {
        let _ = self.tx.send(Command::Shutdown);
    }
}
