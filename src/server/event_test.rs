use super::*;

/// Encode one wire record: header, name bytes, then `pad` NULs.
fn encode(handle: i32, mask: u32, cookie: u32, name: &str, pad: usize) -> Vec<u8> {
    let mut record = Vec::with_capacity(HEADER_LEN + name.len() + pad);
    record.extend(handle.to_ne_bytes());
    record.extend(mask.to_ne_bytes());
    record.extend(cookie.to_ne_bytes());
    record.extend(((name.len() + pad) as u32).to_ne_bytes());
    record.extend(name.as_bytes());
    record.extend(std::iter::repeat(0u8).take(pad));
    record
}

#[test]
fn decode_walks_every_record() {
    let mut buffer = encode(1, libc::IN_CREATE, 0, "created.txt", 5);
    buffer.extend(encode(2, libc::IN_MODIFY, 0, "", 0));
    buffer.extend(encode(1, libc::IN_CLOSE_WRITE, 7, "closed.txt", 0));

    let records = decode_all(&buffer).unwrap();
    assert_eq!(
        records,
        vec![
            RawEvent {
                handle: 1,
                mask: libc::IN_CREATE,
                name: "created.txt".to_string(),
            },
            RawEvent {
                handle: 2,
                mask: libc::IN_MODIFY,
                name: String::new(),
            },
            RawEvent {
                handle: 1,
                mask: libc::IN_CLOSE_WRITE,
                name: "closed.txt".to_string(),
            },
        ]
    );
}

#[test]
fn decode_trims_nul_padding() {
    let buffer = encode(3, libc::IN_DELETE, 0, "a.txt", 11);
    let records = decode_all(&buffer).unwrap();
    assert_eq!(records[0].name, "a.txt");
}

#[test]
fn decode_of_an_empty_buffer_is_empty() {
    assert!(decode_all(&[]).unwrap().is_empty());
}

#[test]
fn decode_rejects_a_truncated_header() {
    let mut buffer = encode(1, libc::IN_OPEN, 0, "whole.txt", 3);
    let offset = buffer.len();
    buffer.extend([0u8; 8]);

    let err = decode_all(&buffer).unwrap_err();
    assert!(matches!(err, crate::Error::Decode { offset: at } if at == offset));
}

#[test]
fn decode_rejects_a_truncated_name() {
    let mut buffer = encode(1, libc::IN_OPEN, 0, "", 0);
    // Declare more name bytes than the buffer holds.
    buffer[12..16].copy_from_slice(&32u32.to_ne_bytes());
    buffer.extend([0u8; 4]);

    let err = decode_all(&buffer).unwrap_err();
    assert!(matches!(err, crate::Error::Decode { offset: 0 }));
}

#[test]
fn coalesce_unions_masks_and_keeps_the_first_name() {
    let records = vec![
        RawEvent {
            handle: 1,
            mask: libc::IN_OPEN,
            name: "first.txt".to_string(),
        },
        RawEvent {
            handle: 1,
            mask: libc::IN_MODIFY,
            name: "second.txt".to_string(),
        },
        RawEvent {
            handle: 2,
            mask: libc::IN_CREATE,
            name: "other.txt".to_string(),
        },
    ];

    let merged = coalesce(records);
    assert_eq!(merged.len(), 2);

    let first = &merged[&1];
    assert_eq!(first.mask, libc::IN_OPEN | libc::IN_MODIFY);
    assert_eq!(first.name, "first.txt");

    let other = &merged[&2];
    assert_eq!(other.mask, libc::IN_CREATE);
    assert_eq!(other.name, "other.txt");
}
