//! Watcher server.
use super::{
    event::{self, RawEvent},
    inotify::{Inotify, WatchHandle},
    poller::{Poller, Readable},
    registry::Registry,
    resolve,
};
use crate::{
    command::Command,
    error::{Error, Result},
    event::{Event, EventKind, EventResult},
    flags::{EventFlags, WatchFlags},
};
use crossbeam::channel::{Receiver, Sender};
use std::{collections::HashMap, os::fd::AsRawFd, path::PathBuf, thread};

/// Baseline drain buffer size; grows when the facility reports more.
const BASE_BUFFER_LEN: usize = 4096;

pub struct Builder {
    /// Sends event batches to the client.
    event_tx: Sender<EventResult>,

    /// Receives commands from the client.
    command_rx: Receiver<Command>,

    /// Initial paths to watch.
    paths: Vec<PathBuf>,
}

impl Builder {
    /// # Arguments
    /// 1. `command_rx`: Channel to receive commands over.
    /// 2. `event_tx`: Channel to send event batches over.
    pub fn new(command_rx: Receiver<Command>, event_tx: Sender<EventResult>) -> Self {
        Self {
            event_tx,
            command_rx,
            paths: vec![],
        }
    }

    /// Watch `path` from startup, with every change kind.
    pub fn add_path(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Run the watcher.
    ///
    /// Acquires the notification facility, spawns the readiness poller,
    /// and registers the initial paths, then services commands and change
    /// records until shutdown.
    ///
    /// # Notes
    /// + Initial paths that cannot be registered are reported on the event
    ///   channel; an empty `Ok` batch follows once startup registration is
    ///   done.
    ///
    /// # Errors
    /// + If the facility cannot be created.
    /// + If reading from the facility fails later.
    pub fn run(self) -> Result {
        let inotify = Inotify::init()?;

        let (readable_tx, readable_rx) = crossbeam::channel::bounded(1);
        let (shutdown_tx, shutdown_rx) = crossbeam::channel::bounded(0);
        let mut poller = Poller::new(inotify.as_raw_fd(), readable_tx, shutdown_rx);
        thread::Builder::new()
            .name("dirwatch readiness poller".to_string())
            .spawn(move || poller.run())
            .unwrap();

        let mut watcher = Watcher {
            event_tx: self.event_tx,
            command_rx: self.command_rx,
            readable_rx,
            _poller_shutdown_tx: shutdown_tx,
            inotify,
            registry: Registry::new(),
            untracked_records: 0,
        };

        for path in self.paths {
            if let Err(err) = watcher.add_path(path.clone(), true, WatchFlags::ALL_EVENTS) {
                tracing::error!("could not watch {path:?}: {err}");
                if watcher.event_tx.send(Err(err)).is_err() {
                    return Ok(());
                }
            }
        }

        tracing::debug!(
            "startup registration complete, {} directories tracked",
            watcher.registry.len()
        );
        if watcher.event_tx.send(Ok(vec![])).is_err() {
            tracing::debug!("event channel closed before startup");
            return Ok(());
        }

        watcher.run()
    }
}

/// Listens for change records on the facility descriptor and dispatches
/// notifications for tracked entities.
pub struct Watcher {
    /// Sends event batches to the client.
    event_tx: Sender<EventResult>,

    /// Receives commands from the client.
    command_rx: Receiver<Command>,

    /// Receives readiness tokens from the poller.
    readable_rx: Receiver<Readable>,

    /// Dropping this tells the poller to exit.
    _poller_shutdown_tx: Sender<()>,

    /// The notification facility, owned for the watcher's whole life.
    inotify: Inotify,

    /// Watch registrations.
    registry: Registry,

    /// Change records received for handles never registered.
    untracked_records: u64,
}

impl Watcher {
    /// Service commands and change records until shutdown.
    ///
    /// # Errors
    /// + If reading from the facility fails.
    pub(crate) fn run(&mut self) -> Result {
        loop {
            crossbeam::select! {
                recv(self.command_rx) -> cmd => match cmd {
                    Ok(Command::Shutdown) => {
                        tracing::debug!("shutting down");
                        break;
                    }
                    Ok(cmd) => self.handle_command(cmd),
                    Err(_) => {
                        tracing::debug!("command channel closed, shutting down");
                        break;
                    }
                },

                recv(self.readable_rx) -> token => match token {
                    Ok(Readable) => self.handle_readable()?,
                    Err(_) => {
                        tracing::error!("poller channel closed, shutting down");
                        break;
                    }
                },
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::AddPath {
                path,
                recursive,
                flags,
                tx,
            } => {
                let result = self.add_path(path, recursive, flags);
                if let Err(err) = tx.send(result) {
                    tracing::error!(?err);
                }
            }

            Command::RemovePath { path, tx } => {
                tracing::debug!("unwatching {path:?} is not supported");
                if let Err(err) = tx.send(Err(Error::NotSupported)) {
                    tracing::error!(?err);
                }
            }

            Command::Shutdown => unreachable!("intercepted by the run loop"),
        }
    }

    /// Resolve `path` and register the interest with the facility.
    fn add_path(&mut self, path: PathBuf, recursive: bool, flags: WatchFlags) -> Result {
        tracing::debug!(
            "setting a {}watch on {path:?}",
            if recursive { "recursive " } else { "" }
        );

        let resolved = resolve::classify(&path)?;
        let handle = self.inotify.add_watch(&resolved.directory, flags)?;
        self.registry
            .register(handle, resolved.directory, resolved.filename);

        tracing::debug!(
            "watching {:?} in {:?}",
            self.registry.filter(handle),
            self.registry.directory(handle)
        );

        Ok(())
    }

    /// One drain cycle: read everything the facility has queued, decode,
    /// coalesce, and dispatch. The cycle is atomic with respect to the run
    /// loop; commands are not serviced until it completes.
    ///
    /// Decode faults are scoped to the cycle: the batch is discarded, the
    /// fault is logged and forwarded on the event channel, and the watcher
    /// resumes on the next readiness token.
    ///
    /// # Errors
    /// + If reading from the facility fails.
    fn handle_readable(&mut self) -> Result {
        let events = match self.drain_cycle() {
            Ok(events) => events,
            Err(err @ Error::Decode { .. }) => {
                tracing::error!("discarding drain cycle: {err}");
                if self.event_tx.send(Err(err)).is_err() {
                    tracing::debug!("event channel closed");
                }

                return Ok(());
            }
            Err(err) => return Err(err),
        };

        if events.is_empty() {
            return Ok(());
        }

        if self.event_tx.send(Ok(events)).is_err() {
            tracing::debug!("event channel closed");
        }

        Ok(())
    }

    fn drain_cycle(&mut self) -> Result<Vec<Event>> {
        let available = self.inotify.bytes_available()?;
        if available == 0 {
            return Ok(vec![]);
        }

        let mut buffer = vec![0u8; available.max(BASE_BUFFER_LEN)];
        let read = self.inotify.read_into(&mut buffer[..available])?;
        let records = event::decode_all(&buffer[..read])?;
        Ok(self.dispatch(event::coalesce(records)))
    }

    /// Emit one notification per coalesced record that names a tracked
    /// entity.
    fn dispatch(&mut self, merged: HashMap<WatchHandle, RawEvent>) -> Vec<Event> {
        let mut events = Vec::with_capacity(merged.len());
        for record in merged.into_values() {
            let Some(entry) = self.registry.get(record.handle) else {
                self.untracked_records += 1;
                tracing::debug!("notified about a watch we are not tracking: {}", record.handle);
                continue;
            };

            if !entry.filter().matches(&record.name) {
                continue;
            }

            events.push(Event::new(EventKind::File {
                name: record.name,
                flags: EventFlags::from_bits_retain(record.mask),
            }));
        }

        events
    }
}

#[cfg(test)]
#[path = "watcher_test.rs"]
mod watcher_test;
