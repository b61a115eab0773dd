use crate::{error::Result, flags::WatchFlags};
use crossbeam::channel::Sender;
use std::path::PathBuf;

pub enum Command {
    /// Register interest in a path.
    AddPath {
        path: PathBuf,

        /// Carried for future use; subdirectories are not yet discovered
        /// automatically.
        recursive: bool,

        /// Changes to be notified about, passed to the facility verbatim.
        flags: WatchFlags,

        tx: Sender<Result>,
    },

    /// Remove interest in a path.
    RemovePath { path: PathBuf, tx: Sender<Result> },

    /// Shutdown the watcher.
    Shutdown,
}
