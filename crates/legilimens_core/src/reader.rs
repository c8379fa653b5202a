use thiserror::Error;

/// A read that would run past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("read of {len} bytes at offset {offset} exceeds buffer length {buffer_len}")]
pub struct OutOfBounds {
    pub offset: usize,
    pub len: usize,
    pub buffer_len: usize,
}

/// Random-access little-endian reads over a borrowed save buffer.
///
/// Every read is bounds-checked; nothing here panics on short or hostile
/// input.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn read_u32_le(&self, offset: usize) -> Result<u32, OutOfBounds> {
        let raw = self.read_bytes(offset, 4)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(raw);
        Ok(u32::from_le_bytes(buf))
    }

    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], OutOfBounds> {
        let end = offset.checked_add(len).ok_or(OutOfBounds {
            offset,
            len,
            buffer_len: self.bytes.len(),
        })?;
        self.bytes.get(offset..end).ok_or(OutOfBounds {
            offset,
            len,
            buffer_len: self.bytes.len(),
        })
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes.starts_with(prefix)
    }

    pub fn find(&self, marker: &[u8]) -> Option<usize> {
        find_marker(self.bytes, marker)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Offset of the first occurrence of `marker` in `bytes`.
///
/// Later occurrences are never considered, even if the first one sits inside
/// unrelated data.
pub fn find_marker(bytes: &[u8], marker: &[u8]) -> Option<usize> {
    if marker.is_empty() || marker.len() > bytes.len() {
        return None;
    }
    bytes.windows(marker.len()).position(|window| window == marker)
}
