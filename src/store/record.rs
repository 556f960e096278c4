//! Journal record framing
//!
//! Each journal entry is framed as:
//!
//! ```text
//! +------------------+
//! | Payload Length   | (u32 LE)
//! +------------------+
//! | Payload          | (JSON-encoded entry)
//! +------------------+
//! | Checksum         | (u32 LE, CRC32 of payload)
//! +------------------+
//! ```
//!
//! The checksum is verified on every replayed frame; a mismatch or a
//! truncated frame fails the open with a corruption error carrying the
//! byte offset of the bad frame.

use std::io;

use serde::{Deserialize, Serialize};

use crate::domain::Planet;

use super::errors::{StoreError, StoreResult};

/// One logical mutation recorded in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JournalEntry {
    /// A row was inserted (id already assigned).
    Insert { planet: Planet },
    /// A row was deleted.
    Delete { id: u64 },
}

impl JournalEntry {
    /// Encode this entry as a framed record.
    pub fn encode(&self) -> StoreResult<Vec<u8>> {
        let payload = serde_json::to_vec(self)
            .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let mut frame = Vec::with_capacity(payload.len() + 8);
        frame.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        frame.extend_from_slice(&payload);
        frame.extend_from_slice(&compute_checksum(&payload).to_le_bytes());
        Ok(frame)
    }

    /// Decode every framed record in `bytes`, verifying each checksum.
    pub fn decode_all(bytes: &[u8]) -> StoreResult<Vec<JournalEntry>> {
        let mut entries = Vec::new();
        let mut offset: usize = 0;

        while offset < bytes.len() {
            let frame_start = offset as u64;

            let header = bytes
                .get(offset..offset + 4)
                .ok_or_else(|| StoreError::corruption_at_offset(frame_start, "truncated length prefix"))?;
            let len = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
            offset += 4;

            let payload = bytes
                .get(offset..offset + len)
                .ok_or_else(|| StoreError::corruption_at_offset(frame_start, "truncated payload"))?;
            offset += len;

            let stored = bytes
                .get(offset..offset + 4)
                .ok_or_else(|| StoreError::corruption_at_offset(frame_start, "truncated checksum"))?;
            let stored = u32::from_le_bytes([stored[0], stored[1], stored[2], stored[3]]);
            offset += 4;

            let computed = compute_checksum(payload);
            if computed != stored {
                return Err(StoreError::corruption_at_offset(
                    frame_start,
                    format!("checksum mismatch (stored {stored:#010x}, computed {computed:#010x})"),
                ));
            }

            let entry = serde_json::from_slice(payload)
                .map_err(|e| StoreError::corruption_at_offset(frame_start, format!("undecodable payload: {e}")))?;
            entries.push(entry);
        }

        Ok(entries)
    }
}

/// CRC32 over a payload.
pub fn compute_checksum(payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<JournalEntry> {
        vec![
            JournalEntry::Insert {
                planet: Planet::new("Tatooine", "arid", "desert").with_id(1),
            },
            JournalEntry::Delete { id: 1 },
        ]
    }

    #[test]
    fn test_encode_decode_preserves_entries() {
        let mut bytes = Vec::new();
        for entry in sample_entries() {
            bytes.extend_from_slice(&entry.encode().unwrap());
        }

        let decoded = JournalEntry::decode_all(&bytes).unwrap();
        assert_eq!(decoded, sample_entries());
    }

    #[test]
    fn test_flipped_payload_byte_fails_checksum() {
        let entry = JournalEntry::Insert {
            planet: Planet::new("Hoth", "frozen", "tundra, ice caves").with_id(4),
        };
        let mut bytes = entry.encode().unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;

        let err = JournalEntry::decode_all(&bytes).unwrap_err();
        assert!(err.to_string().contains("corruption"));
    }

    #[test]
    fn test_truncated_frame_is_corruption_not_silence() {
        let entry = JournalEntry::Delete { id: 7 };
        let bytes = entry.encode().unwrap();

        let err = JournalEntry::decode_all(&bytes[..bytes.len() - 2]).unwrap_err();
        assert!(matches!(err, StoreError::Corruption { .. }));
    }

    #[test]
    fn test_second_frame_offset_is_reported() {
        let first = JournalEntry::Delete { id: 1 }.encode().unwrap();
        let second = JournalEntry::Delete { id: 2 }.encode().unwrap();

        let mut bytes = first.clone();
        bytes.extend_from_slice(&second);
        let tamper_at = first.len() + 5;
        bytes[tamper_at] ^= 0xFF;

        match JournalEntry::decode_all(&bytes).unwrap_err() {
            StoreError::Corruption { offset, .. } => assert_eq!(offset, first.len() as u64),
            other => panic!("expected corruption, got {other}"),
        }
    }
}
