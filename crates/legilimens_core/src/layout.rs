use serde::Serialize;

use crate::reader::{ByteReader, OutOfBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A length-prefixed payload located relative to a marker.
///
/// The `u32` length sits in the four bytes immediately before
/// `marker_offset + payload_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerField {
    pub name: &'static str,
    pub marker: &'static [u8],
    pub payload_offset: usize,
}

const LENGTH_PREFIX_WIDTH: usize = 4;

impl MarkerField {
    /// Offset of the marker, first occurrence only.
    pub fn locate(&self, reader: &ByteReader<'_>) -> Option<usize> {
        reader.find(self.marker)
    }

    /// Reads the length prefix stored before the payload of a marker found
    /// at `marker_offset`.
    pub fn read_length(
        &self,
        reader: &ByteReader<'_>,
        marker_offset: usize,
    ) -> Result<u32, OutOfBounds> {
        let payload = self.payload_start(reader, marker_offset)?;
        let prefix = payload
            .checked_sub(LENGTH_PREFIX_WIDTH)
            .ok_or(OutOfBounds {
                offset: payload,
                len: LENGTH_PREFIX_WIDTH,
                buffer_len: reader.len(),
            })?;
        reader.read_u32_le(prefix)
    }

    /// Start of the payload, bounds-checked against the buffer.
    pub fn payload_start(
        &self,
        reader: &ByteReader<'_>,
        marker_offset: usize,
    ) -> Result<usize, OutOfBounds> {
        let out_of_bounds = OutOfBounds {
            offset: marker_offset,
            len: self.payload_offset,
            buffer_len: reader.len(),
        };
        let start = marker_offset
            .checked_add(self.payload_offset)
            .ok_or(out_of_bounds)?;
        if start >= reader.len() {
            return Err(out_of_bounds);
        }
        Ok(start)
    }

    /// Range of `len` payload bytes for a marker found at `marker_offset`.
    pub fn payload_range(
        &self,
        reader: &ByteReader<'_>,
        marker_offset: usize,
        len: usize,
    ) -> Result<ByteRange, OutOfBounds> {
        let start = self.payload_start(reader, marker_offset)?;
        reader.read_bytes(start, len)?;
        Ok(ByteRange {
            start,
            end: start + len,
        })
    }
}

/// `CharacterName` `StrProperty`: name, type name, size and guid flag
/// precede the string length.
pub const CHARACTER_NAME: MarkerField = MarkerField {
    name: "CharacterName",
    marker: b"CharacterName\0",
    payload_offset: 43,
};

/// `CharacterHouse` `StrProperty`, one byte longer marker than the name.
pub const CHARACTER_HOUSE: MarkerField = MarkerField {
    name: "CharacterHouse",
    marker: b"CharacterHouse\0",
    payload_offset: 44,
};

/// `RawDatabaseImage` `ArrayProperty` of `ByteProperty`; the element count
/// is the image size in bytes.
pub const RAW_DATABASE_IMAGE: MarkerField = MarkerField {
    name: "RawDatabaseImage",
    marker: b"RawDatabaseImage",
    payload_offset: 65,
};
