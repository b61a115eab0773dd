//! Mapping from facility watch handles to tracked interests.
use super::inotify::WatchHandle;
use std::{
    collections::{hash_map::Entry, HashMap},
    path::{Path, PathBuf},
};

/// What part of a watched directory a caller cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Filter {
    /// The directory itself; every entry name matches.
    WholeDirectory,

    /// Only the listed entry names match.
    /// Names may repeat when the same interest is registered twice.
    Names(Vec<String>),
}

impl Filter {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::WholeDirectory => true,
            Self::Names(names) => names.iter().any(|candidate| candidate == name),
        }
    }
}

/// A watched directory and the interests registered against it.
#[derive(Debug)]
pub(crate) struct WatchEntry {
    directory: PathBuf,
    filter: Filter,
}

impl WatchEntry {
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

/// Watch registrations, keyed by the facility's handle.
///
/// Entries are only ever added; they are invalidated wholesale when the
/// watcher, and with it the facility descriptor, is torn down.
#[derive(Debug)]
pub(crate) struct Registry {
    entries: HashMap<WatchHandle, WatchEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Record an interest resolved against `handle`.
    ///
    /// A filename accumulates onto any name list already registered for
    /// the handle; registering without a filename widens the entry to the
    /// whole directory.
    pub fn register(
        &mut self,
        handle: WatchHandle,
        directory: impl Into<PathBuf>,
        filename: Option<String>,
    ) {
        match self.entries.entry(handle) {
            Entry::Vacant(entry) => {
                entry.insert(WatchEntry {
                    directory: directory.into(),
                    filter: match filename {
                        Some(name) => Filter::Names(vec![name]),
                        None => Filter::WholeDirectory,
                    },
                });
            }
            Entry::Occupied(mut entry) => match (&mut entry.get_mut().filter, filename) {
                (Filter::Names(names), Some(name)) => names.push(name),
                (filter, None) => *filter = Filter::WholeDirectory,
                (Filter::WholeDirectory, Some(_)) => {}
            },
        }
    }

    pub fn get(&self, handle: WatchHandle) -> Option<&WatchEntry> {
        self.entries.get(&handle)
    }

    /// Directory covered by `handle`.
    pub fn directory(&self, handle: WatchHandle) -> Option<&Path> {
        self.get(handle).map(|entry| entry.directory())
    }

    /// Filter registered against `handle`.
    pub fn filter(&self, handle: WatchHandle) -> Option<&Filter> {
        self.get(handle).map(|entry| entry.filter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
