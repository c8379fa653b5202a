mod common;

use common::SaveBuilder;
use legilimens_core::container::{extract_database, has_magic_header, parse_save_info};
use legilimens_core::core_api::CoreErrorCode;

#[test]
fn parses_name_and_house() {
    let bytes = SaveBuilder::new()
        .name("Ellie Stone")
        .house("Ravenclaw")
        .database(b"db")
        .build();

    let info = parse_save_info(&bytes).expect("valid header");
    assert_eq!(info.character_name.as_deref(), Some("Ellie Stone"));
    assert_eq!(info.character_house.as_deref(), Some("Ravenclaw"));
    assert!(info.is_complete());
}

#[test]
fn missing_header_is_invalid_format() {
    let bytes = SaveBuilder::without_header()
        .name("Ellie")
        .database(b"db")
        .build();

    assert!(!has_magic_header(&bytes));
    let err = parse_save_info(&bytes).expect_err("no header");
    assert_eq!(err.code, CoreErrorCode::InvalidFormat);
    let err = extract_database(&bytes).expect_err("no header");
    assert_eq!(err.code, CoreErrorCode::InvalidFormat);
}

#[test]
fn short_buffers_never_panic() {
    for len in 0..8 {
        let bytes = &b"GVAS\0\0\0\0"[..len];
        let _ = parse_save_info(bytes);
        let _ = extract_database(bytes);
    }
}

#[test]
fn fields_are_independently_optional() {
    let bytes = SaveBuilder::new().house("Hufflepuff").database(b"db").build();
    let info = parse_save_info(&bytes).expect("valid header");
    assert_eq!(info.character_name, None);
    assert_eq!(info.character_house.as_deref(), Some("Hufflepuff"));
    assert!(!info.is_complete());
}

#[test]
fn length_past_end_yields_absent_name() {
    let bytes = SaveBuilder::new().house("Slytherin").truncated_name(200).build();
    let info = parse_save_info(&bytes).expect("valid header");
    assert_eq!(info.character_name, None);
    assert_eq!(info.character_house.as_deref(), Some("Slytherin"));
}

#[test]
fn zero_and_one_length_names_are_absent() {
    for declared in [0, 1] {
        let bytes = SaveBuilder::new().truncated_name(declared).build();
        let info = parse_save_info(&bytes).expect("valid header");
        assert_eq!(info.character_name, None, "declared length {declared}");
    }
}

#[test]
fn unrecognized_house_is_kept_verbatim() {
    let bytes = SaveBuilder::new().house("Durmstrang").build();
    let info = parse_save_info(&bytes).expect("valid header");
    assert_eq!(info.character_house.as_deref(), Some("Durmstrang"));
}

#[test]
fn longer_property_names_do_not_match_the_name_marker() {
    let mut decoy = b"CharacterNameColor".to_vec();
    decoy.resize(39, 0);
    decoy.extend_from_slice(&8u32.to_le_bytes());
    decoy.extend_from_slice(b"Scarlet\0");

    let bytes = SaveBuilder::new().raw(&decoy).name("Ellie Stone").build();
    let info = parse_save_info(&bytes).expect("valid header");
    assert_eq!(info.character_name.as_deref(), Some("Ellie Stone"));
}

#[test]
fn extracts_exact_database_bytes() {
    let image = b"SQLite format 3\0 payload".to_vec();
    let bytes = SaveBuilder::new().name("Ellie").database(&image).build();

    let db = extract_database(&bytes).expect("database present");
    assert_eq!(db.bytes, image);
    assert_eq!(db.len(), image.len());
    assert_eq!(&bytes[db.range.start..db.range.end], image.as_slice());
}

#[test]
fn missing_database_marker_is_not_found() {
    let bytes = SaveBuilder::new().name("Ellie").house("Gryffindor").build();
    let err = extract_database(&bytes).expect_err("no database");
    assert_eq!(err.code, CoreErrorCode::DatabaseNotFound);
}

#[test]
fn database_length_past_end_is_not_found() {
    let bytes = SaveBuilder::new().database_with_len(b"tiny", 10_000).build();
    let err = extract_database(&bytes).expect_err("declared length too large");
    assert_eq!(err.code, CoreErrorCode::DatabaseNotFound);
}

#[test]
fn first_marker_occurrence_wins() {
    let bytes = SaveBuilder::new()
        .name("First")
        .name("Second")
        .database(b"one")
        .database(b"two")
        .build();

    let info = parse_save_info(&bytes).expect("valid header");
    assert_eq!(info.character_name.as_deref(), Some("First"));
    assert_eq!(extract_database(&bytes).expect("database").bytes, b"one");
}
