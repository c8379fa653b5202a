#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rusqlite::Connection;
use tempfile::NamedTempFile;

pub const SCHEMA: &str = "
    CREATE TABLE CollectionDynamic (CollectionName TEXT, CollectionState TEXT);
    CREATE TABLE SphinxPuzzleDynamic (PuzzleName TEXT, PuzzleState TEXT);
    CREATE TABLE LootDropComponentDynamic (ActorID TEXT, Opened INTEGER);
    CREATE TABLE EconomicExpiryDynamic (UniqueID TEXT, ExpiryType TEXT);
    CREATE TABLE MiscDataDynamic (DataName TEXT, DataValue TEXT);
    CREATE TABLE MapLocationDataDynamic (MapLocationID TEXT, State TEXT);
    CREATE TABLE MissionDynamic (MissionID TEXT, MissionState TEXT);
    CREATE TABLE ConjurationDynamic (ItemID TEXT);
";

pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_legilimens"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run legilimens CLI")
}

fn sqlite_image(sql: &str) -> Vec<u8> {
    let file = NamedTempFile::new().expect("create temp db");
    {
        let conn = Connection::open(file.path()).expect("open temp db");
        conn.execute_batch(sql).expect("populate temp db");
    }
    fs::read(file.path()).expect("read temp db")
}

fn push_field(out: &mut Vec<u8>, marker: &[u8], payload_offset: usize, len: u32) {
    let start = out.len();
    out.extend_from_slice(marker);
    out.resize(start + payload_offset - 4, 0);
    out.extend_from_slice(&len.to_le_bytes());
}

/// A GVAS container carrying a name, a house and a database built from
/// `SCHEMA` plus `inserts`.
pub fn save_bytes(name: &str, house: &str, inserts: &str) -> Vec<u8> {
    let mut out = b"GVAS".to_vec();
    out.extend_from_slice(&[0u8; 28]);

    for (marker, offset, value) in [
        (&b"CharacterName\0"[..], 43, name),
        (&b"CharacterHouse\0"[..], 44, house),
    ] {
        push_field(&mut out, marker, offset, value.len() as u32 + 1);
        out.extend_from_slice(value.as_bytes());
        out.push(0);
    }

    let image = sqlite_image(&format!("{SCHEMA}{inserts}"));
    push_field(&mut out, b"RawDatabaseImage", 65, image.len() as u32);
    out.extend_from_slice(&image);
    out
}

pub fn write_save(dir: &Path, file_name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, bytes).expect("write save");
    path
}
