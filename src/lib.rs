//! Change notifications for files and directories.
//!
//! Callers register interest in paths through a [`Client`]; a
//! [`server::Watcher`] owns the kernel's inotify facility, decodes its
//! change records, and delivers [`Event`] batches over a channel.
//!
//! Linux only.
pub(crate) mod client;
pub(crate) mod command;
pub mod error;
pub(crate) mod event;
pub mod flags;
pub mod server;

pub use client::Client;
pub use command::Command;
pub use error::{Error, Result};
pub use event::{Event, EventKind, EventResult};
pub use flags::{EventFlags, WatchFlags};
