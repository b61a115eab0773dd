//! Change-interest and change-report flag sets.
//!
//! Both sets share the facility's numeric encoding, so a mask requested
//! with [`WatchFlags`] and a mask reported in [`EventFlags`] stay
//! wire-compatible, but the types are distinct: report-only conditions
//! such as [`EventFlags::OVERFLOW`] cannot be passed where an interest
//! mask is expected.
use bitflags::bitflags;

bitflags! {
    /// Changes a caller can register interest in, plus request-only
    /// modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WatchFlags: u32 {
        /// File was accessed.
        const ACCESS = 0x0000_0001;
        /// File content was modified.
        const MODIFIED = 0x0000_0002;
        /// Metadata changed.
        const ATTR_MODIFIED = 0x0000_0004;
        /// A file open for writing was closed.
        const CLOSE_WRITE = 0x0000_0008;
        /// A file not open for writing was closed.
        const CLOSE_READ = 0x0000_0010;
        /// File was opened.
        const OPEN = 0x0000_0020;
        /// File was moved out of the watched directory.
        const MOVE_FROM = 0x0000_0040;
        /// File was moved into the watched directory.
        const MOVE_TO = 0x0000_0080;
        /// File or directory was created inside the watched directory.
        const CREATE = 0x0000_0100;
        /// File or directory was deleted from the watched directory.
        const DELETE = 0x0000_0200;
        /// The watched path itself was deleted.
        const DELETE_SELF = 0x0000_0400;
        /// The watched path itself was moved.
        const MOVE_SELF = 0x0000_0800;

        /// Either close event.
        const CLOSE = Self::CLOSE_WRITE.bits() | Self::CLOSE_READ.bits();
        /// Either move event.
        const MOVE = Self::MOVE_FROM.bits() | Self::MOVE_TO.bits();
        /// Every file event.
        const ALL_EVENTS = 0x0000_0FFF;

        /// Only watch the path if it is a directory.
        const ONLY_DIR = 0x0100_0000;
        /// Do not follow the path if it is a symlink.
        const DONT_FOLLOW = 0x0200_0000;
        /// Exclude events on unlinked objects.
        const EXCLUDE_UNLINKED = 0x0400_0000;
        /// Add to the mask of an existing watch instead of replacing it.
        const MASK_ADD = 0x2000_0000;
        /// Remove the watch after its first event.
        const ONE_SHOT = 0x8000_0000;
    }
}

bitflags! {
    /// Changes reported for a watched entity, plus report-only conditions
    /// the facility raises on its own.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventFlags: u32 {
        /// File was accessed.
        const ACCESS = 0x0000_0001;
        /// File content was modified.
        const MODIFIED = 0x0000_0002;
        /// Metadata changed.
        const ATTR_MODIFIED = 0x0000_0004;
        /// A file open for writing was closed.
        const CLOSE_WRITE = 0x0000_0008;
        /// A file not open for writing was closed.
        const CLOSE_READ = 0x0000_0010;
        /// File was opened.
        const OPEN = 0x0000_0020;
        /// File was moved out of the watched directory.
        const MOVE_FROM = 0x0000_0040;
        /// File was moved into the watched directory.
        const MOVE_TO = 0x0000_0080;
        /// File or directory was created inside the watched directory.
        const CREATE = 0x0000_0100;
        /// File or directory was deleted from the watched directory.
        const DELETE = 0x0000_0200;
        /// The watched path itself was deleted.
        const DELETE_SELF = 0x0000_0400;
        /// The watched path itself was moved.
        const MOVE_SELF = 0x0000_0800;

        /// Either close event.
        const CLOSE = Self::CLOSE_WRITE.bits() | Self::CLOSE_READ.bits();
        /// Either move event.
        const MOVE = Self::MOVE_FROM.bits() | Self::MOVE_TO.bits();

        /// The backing filesystem was unmounted.
        const UNMOUNT = 0x0000_2000;
        /// The facility's event queue overflowed; records were lost.
        const OVERFLOW = 0x0000_4000;
        /// The watch was removed by the facility.
        const IGNORED = 0x0000_8000;
        /// The subject of the event is a directory.
        const IS_DIR = 0x4000_0000;
    }
}

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;
