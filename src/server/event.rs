//! Raw change records decoded from the facility's byte stream.
//! Records are coalesced per drain cycle and then processed into
//! [`crate::Event`]s.
use super::inotify::WatchHandle;
use crate::error::Error;
use std::collections::{hash_map::Entry, HashMap};

/// Bytes in a record header: handle, mask, cookie, and name length.
pub(crate) const HEADER_LEN: usize = 16;

/// One decoded change record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEvent {
    pub handle: WatchHandle,

    pub mask: u32,

    /// Name of the entry the change applies to, relative to the watched
    /// directory. Empty when the change concerns the directory itself.
    pub name: String,
}

/// Decode a drain-cycle buffer into records.
///
/// Each record is a fixed header followed by a NUL-padded name whose
/// length the header declares. A buffer that does not divide into whole
/// records is a protocol fault.
///
/// # Errors
/// + [`Error::Decode`] with the offset of the offending record.
pub(crate) fn decode_all(buffer: &[u8]) -> Result<Vec<RawEvent>, Error> {
    let mut records = Vec::new();
    let mut at = 0;
    while at < buffer.len() {
        let Some(header) = buffer.get(at..at + HEADER_LEN) else {
            return Err(Error::Decode { offset: at });
        };

        let handle = i32::from_ne_bytes(header[0..4].try_into().unwrap());
        let mask = u32::from_ne_bytes(header[4..8].try_into().unwrap());
        // Bytes 8..12 carry the record's cookie, which nothing here
        // consults.
        let name_len = u32::from_ne_bytes(header[12..16].try_into().unwrap()) as usize;

        let Some(name) = buffer.get(at + HEADER_LEN..at + HEADER_LEN + name_len) else {
            return Err(Error::Decode { offset: at });
        };

        records.push(RawEvent {
            handle,
            mask,
            name: decode_name(name),
        });

        at += HEADER_LEN + name_len;
    }

    Ok(records)
}

/// The name field is padded with NULs to the facility's alignment.
fn decode_name(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Merge records sharing a watch handle into one record per handle.
///
/// The first record seen for a handle keeps its name; later records only
/// contribute their mask.
pub(crate) fn coalesce(records: Vec<RawEvent>) -> HashMap<WatchHandle, RawEvent> {
    let mut merged = HashMap::with_capacity(records.len());
    for record in records {
        match merged.entry(record.handle) {
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
            Entry::Occupied(mut entry) => {
                let aggregate: &mut RawEvent = entry.get_mut();
                aggregate.mask |= record.mask;
            }
        }
    }

    merged
}

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;
