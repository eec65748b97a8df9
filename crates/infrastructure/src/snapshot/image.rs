use arpscope_domain::InspectError;
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

/// Raw bytes of the target's cache array region, extracted from a core file
/// or written by a debug dump.
///
/// Every read is bounds-checked; nothing here interprets field meaning.
/// `big_endian` selects the target's byte order, not the host's.
#[derive(Debug, Clone)]
pub struct MemoryImage {
    data: Bytes,
    big_endian: bool,
}

impl MemoryImage {
    pub fn open(path: impl AsRef<Path>, big_endian: bool) -> Result<Self, InspectError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| InspectError::SnapshotRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Snapshot loaded");
        Ok(Self {
            data: Bytes::from(data),
            big_endian,
        })
    }

    pub fn from_bytes(data: impl Into<Bytes>, big_endian: bool) -> Self {
        Self {
            data: data.into(),
            big_endian,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn checked(&self, offset: usize, len: usize) -> Result<&[u8], InspectError> {
        let end = offset
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(InspectError::SnapshotTruncated {
                offset,
                len,
                image_len: self.data.len(),
            })?;
        Ok(&self.data[offset..end])
    }

    pub fn u32_at(&self, offset: usize) -> Result<u32, InspectError> {
        let b = self.checked(offset, 4)?;
        let raw = [b[0], b[1], b[2], b[3]];
        Ok(if self.big_endian {
            u32::from_be_bytes(raw)
        } else {
            u32::from_le_bytes(raw)
        })
    }

    pub fn i32_at(&self, offset: usize) -> Result<i32, InspectError> {
        let b = self.checked(offset, 4)?;
        let raw = [b[0], b[1], b[2], b[3]];
        Ok(if self.big_endian {
            i32::from_be_bytes(raw)
        } else {
            i32::from_le_bytes(raw)
        })
    }

    pub fn bytes_at(&self, offset: usize, len: usize) -> Result<&[u8], InspectError> {
        self.checked(offset, len)
    }
}
