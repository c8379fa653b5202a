#![allow(dead_code)]

use std::fs;

use rusqlite::Connection;
use tempfile::NamedTempFile;

/// Every table the queries read, with the columns they filter on.
pub const FULL_SCHEMA: &str = "
    CREATE TABLE CollectionDynamic (CollectionName TEXT, CollectionState TEXT);
    CREATE TABLE SphinxPuzzleDynamic (PuzzleName TEXT, PuzzleState TEXT);
    CREATE TABLE LootDropComponentDynamic (ActorID TEXT, Opened INTEGER);
    CREATE TABLE EconomicExpiryDynamic (UniqueID TEXT, ExpiryType TEXT);
    CREATE TABLE MiscDataDynamic (DataName TEXT, DataValue TEXT);
    CREATE TABLE MapLocationDataDynamic (MapLocationID TEXT, State TEXT);
    CREATE TABLE MissionDynamic (MissionID TEXT, MissionState TEXT);
    CREATE TABLE ConjurationDynamic (ItemID TEXT);
";

/// Builds a SQLite database with `sql` and returns the raw file image.
pub fn sqlite_image(sql: &str) -> Vec<u8> {
    let file = NamedTempFile::new().expect("create temp db");
    {
        let conn = Connection::open(file.path()).expect("open temp db");
        conn.execute_batch(sql).expect("populate temp db");
    }
    fs::read(file.path()).expect("read temp db")
}

/// Synthetic GVAS container builder. Fields are written in call order, each
/// with the same property header spacing the game uses.
pub struct SaveBuilder {
    bytes: Vec<u8>,
}

impl SaveBuilder {
    pub fn new() -> Self {
        let mut bytes = b"GVAS".to_vec();
        bytes.extend_from_slice(&[0u8; 28]);
        Self { bytes }
    }

    pub fn without_header() -> Self {
        Self {
            bytes: vec![0u8; 32],
        }
    }

    pub fn name(self, name: &str) -> Self {
        self.string_field(b"CharacterName\0", 43, name)
    }

    pub fn house(self, house: &str) -> Self {
        self.string_field(b"CharacterHouse\0", 44, house)
    }

    pub fn database(self, image: &[u8]) -> Self {
        self.database_with_len(image, image.len() as u32)
    }

    /// Writes `image` after a length prefix that may disagree with it.
    pub fn database_with_len(mut self, image: &[u8], declared: u32) -> Self {
        self.field_header(b"RawDatabaseImage", 65, declared);
        self.bytes.extend_from_slice(image);
        self.bytes.extend_from_slice(&[0u8; 8]);
        self
    }

    /// A string property whose length prefix is `declared` and whose payload
    /// is cut short at the end of the buffer.
    pub fn truncated_name(mut self, declared: u32) -> Self {
        self.field_header(b"CharacterName\0", 43, declared);
        self.bytes.extend_from_slice(b"Ab");
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    fn string_field(mut self, marker: &[u8], payload_offset: usize, value: &str) -> Self {
        self.field_header(marker, payload_offset, value.len() as u32 + 1);
        self.bytes.extend_from_slice(value.as_bytes());
        self.bytes.push(0);
        self.bytes.extend_from_slice(&[0u8; 6]);
        self
    }

    fn field_header(&mut self, marker: &[u8], payload_offset: usize, len: u32) {
        let start = self.bytes.len();
        self.bytes.extend_from_slice(marker);
        self.bytes.resize(start + payload_offset - 4, 0);
        self.bytes.extend_from_slice(&len.to_le_bytes());
    }
}

/// A complete save carrying `sql` as its database.
pub fn save_with_database(name: &str, house: &str, sql: &str) -> Vec<u8> {
    SaveBuilder::new()
        .name(name)
        .house(house)
        .database(&sqlite_image(sql))
        .build()
}
