use crate::foundation::error::{IconforgeError, IconforgeResult};

/// Largest pixel size an ICO directory entry can describe.
pub const ICO_MAX_SIZE: u32 = 256;

const HEADER_LEN: usize = 6;
const DIR_ENTRY_LEN: usize = 16;

/// One image payload scheduled for the container, in entry order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IcoEntry {
    /// Square pixel size of the payload image.
    pub size: u32,
    /// Independently compressed image byte stream (PNG).
    pub payload: Vec<u8>,
}

impl IcoEntry {
    /// Pair a pixel size with its compressed payload.
    pub fn new(size: u32, payload: Vec<u8>) -> Self {
        Self { size, payload }
    }
}

/// Serialize entries into an ICO container byte stream.
///
/// Layout: a 6-byte header (reserved=0, type=1, count), one 16-byte
/// little-endian directory record per surviving entry, then the payload byte
/// streams back to back with no padding. `payloadOffset` of entry `i` is
/// `6 + 16*N + sum(payloadLength of entries 0..i)`.
///
/// Entries larger than [`ICO_MAX_SIZE`] cannot be represented and are skipped
/// without aborting the batch; callers that need a signal for dropped entries
/// check sizes up front. An empty surviving list is reported as an explicit
/// [`IconforgeError::Encode`]. Any mismatch between the computed directory
/// arithmetic and the bytes actually written is an
/// [`IconforgeError::Invariant`].
pub fn encode_ico(entries: &[IcoEntry]) -> IconforgeResult<Vec<u8>> {
    let surviving: Vec<&IcoEntry> = entries.iter().filter(|e| e.size <= ICO_MAX_SIZE).collect();
    if surviving.is_empty() {
        return Err(IconforgeError::encode(
            "nothing to encode: no entries representable in an ico container",
        ));
    }
    for e in &surviving {
        if e.size == 0 {
            return Err(IconforgeError::validation("ico entry size must be > 0"));
        }
    }
    let count = u16::try_from(surviving.len())
        .map_err(|_| IconforgeError::validation("too many ico entries for a u16 count"))?;

    let dir_end = HEADER_LEN + DIR_ENTRY_LEN * surviving.len();
    let total = dir_end + surviving.iter().map(|e| e.payload.len()).sum::<usize>();

    let mut buf = Vec::with_capacity(total);
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());

    let mut next_offset = dir_end as u64;
    let mut offsets = Vec::with_capacity(surviving.len());
    for e in &surviving {
        let len = u32::try_from(e.payload.len())
            .map_err(|_| IconforgeError::encode(format!("{0}x{0} payload exceeds u32", e.size)))?;
        let offset = u32::try_from(next_offset)
            .map_err(|_| IconforgeError::encode("container exceeds the u32 offset range"))?;

        let dim = dimension_byte(e.size);
        buf.push(dim); // width
        buf.push(dim); // height
        buf.push(0); // color count (no palette)
        buf.push(0); // reserved
        buf.extend_from_slice(&1u16.to_le_bytes()); // planes
        buf.extend_from_slice(&32u16.to_le_bytes()); // bit count
        buf.extend_from_slice(&len.to_le_bytes());
        buf.extend_from_slice(&offset.to_le_bytes());

        offsets.push(offset);
        next_offset += u64::from(len);
    }

    if buf.len() != dir_end {
        return Err(IconforgeError::invariant(format!(
            "directory ends at {} instead of {dir_end}",
            buf.len()
        )));
    }
    for (e, offset) in surviving.iter().zip(offsets) {
        if buf.len() != offset as usize {
            return Err(IconforgeError::invariant(format!(
                "{0}x{0} payload would land at {1} but its directory entry says {offset}",
                e.size,
                buf.len()
            )));
        }
        buf.extend_from_slice(&e.payload);
    }
    if buf.len() != total {
        return Err(IconforgeError::invariant(format!(
            "container is {} bytes, directory arithmetic says {total}",
            buf.len()
        )));
    }

    Ok(buf)
}

/// ICO dimension byte: 256 encodes as 0, 1..=255 literally.
pub(crate) fn dimension_byte(size: u32) -> u8 {
    if size == ICO_MAX_SIZE { 0 } else { size as u8 }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ico.rs"]
mod tests;
