use serde::Serialize;

use crate::core_api::{CoreError, CoreErrorCode};
use crate::layout::{
    ByteRange, CHARACTER_HOUSE, CHARACTER_NAME, MarkerField, RAW_DATABASE_IMAGE,
};
use crate::reader::ByteReader;

pub const MAGIC_HEADER: &[u8; 4] = b"GVAS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveInfo {
    pub character_name: Option<String>,
    pub character_house: Option<String>,
}

impl SaveInfo {
    pub fn is_complete(&self) -> bool {
        self.character_name.is_some() && self.character_house.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDatabase {
    pub bytes: Vec<u8>,
    pub range: ByteRange,
}

impl ExtractedDatabase {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub fn has_magic_header(bytes: &[u8]) -> bool {
    bytes.starts_with(MAGIC_HEADER)
}

fn check_magic_header(reader: &ByteReader<'_>) -> Result<(), CoreError> {
    if reader.starts_with(MAGIC_HEADER) {
        return Ok(());
    }
    Err(CoreError::new(
        CoreErrorCode::InvalidFormat,
        "file doesn't seem to be a Hogwarts Legacy save file (missing GVAS header)",
    ))
}

/// Character name and house. Fails only on a bad header; each field is
/// independently absent when its marker or length prefix doesn't check out.
pub fn parse_save_info(bytes: &[u8]) -> Result<SaveInfo, CoreError> {
    let reader = ByteReader::new(bytes);
    check_magic_header(&reader)?;

    Ok(SaveInfo {
        character_name: read_string_field(&reader, &CHARACTER_NAME),
        character_house: read_string_field(&reader, &CHARACTER_HOUSE),
    })
}

pub fn extract_database(bytes: &[u8]) -> Result<ExtractedDatabase, CoreError> {
    let reader = ByteReader::new(bytes);
    check_magic_header(&reader)?;

    let not_found = |detail: String| {
        CoreError::new(
            CoreErrorCode::DatabaseNotFound,
            format!("unable to find the SQL database in the save file: {detail}"),
        )
    };

    let marker_offset = RAW_DATABASE_IMAGE
        .locate(&reader)
        .ok_or_else(|| not_found("RawDatabaseImage marker is missing".to_string()))?;
    let size = RAW_DATABASE_IMAGE
        .read_length(&reader, marker_offset)
        .map_err(|e| not_found(e.to_string()))?;
    let range = RAW_DATABASE_IMAGE
        .payload_range(&reader, marker_offset, size as usize)
        .map_err(|e| not_found(e.to_string()))?;

    log::debug!(
        "database image at bytes {}..{} ({} bytes)",
        range.start,
        range.end,
        range.len()
    );

    Ok(ExtractedDatabase {
        bytes: bytes[range.start..range.end].to_vec(),
        range,
    })
}

fn read_string_field(reader: &ByteReader<'_>, field: &MarkerField) -> Option<String> {
    let marker_offset = field.locate(reader)?;
    let stored_len = field.read_length(reader, marker_offset).ok()?;
    // The stored length counts the trailing NUL.
    let len = stored_len.checked_sub(1)? as usize;
    if len == 0 {
        return None;
    }
    let range = match field.payload_range(reader, marker_offset, len) {
        Ok(range) => range,
        Err(e) => {
            log::debug!("{} present but unreadable: {e}", field.name);
            return None;
        }
    };
    let payload = reader.read_bytes(range.start, range.len()).ok()?;
    Some(String::from_utf8_lossy(payload).into_owned())
}
