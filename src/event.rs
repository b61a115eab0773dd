//! Change notifications delivered to subscribers.
use crate::flags::EventFlags;
use uuid::Uuid;

/// Payload of the event channel: one batch per drain cycle, or the fault
/// that ended a cycle.
pub type EventResult = std::result::Result<Vec<Event>, crate::Error>;

/// A change notification for a tracked entity.
#[derive(Debug, Clone)]
pub struct Event {
    /// Id used to track the event across boundaries.
    id: Uuid,

    kind: EventKind,
}

impl Event {
    pub(crate) fn new(kind: EventKind) -> Self {
        Self {
            id: Uuid::now_v7(),
            kind,
        }
    }

    /// # Returns
    /// The unique id (uuid v7) assigned to the event.
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A tracked file inside a watched directory changed.
    File {
        /// Name of the entry inside the watched directory.
        /// Empty when the change concerns the watched directory itself.
        name: String,
        flags: EventFlags,
    },

    /// A watched directory itself changed.
    ///
    /// Declared for subscribers, but not yet produced; directory-level
    /// notification is an open extension point.
    Folder { name: String, flags: EventFlags },
}
