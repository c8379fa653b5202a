use std::fmt::Write as _;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use legilimens_core::catalog::{Catalog, CatalogEntry, Grouping};
use legilimens_core::container::SaveInfo;
use legilimens_core::core_api::Report;
use legilimens_core::reconcile::{GroupKey, MissingGroup};
use legilimens_core::saves::{CharacterSaves, UNKNOWN_HOUSE, UNKNOWN_NAME};
use serde_json::{Map as JsonMap, Value as JsonValue};

pub const CONGRATULATIONS: &str =
    "Congratulations! You've gotten every collectible that Legilimens can detect.";
pub const QUEST_CHEST_WARNING: &str = "The butterfly quest is complete but its reward chest \
     was never opened. This is a known game bug; the chest can't be opened anymore.";
pub const CONJURATION_WARNING: &str = "More conjuration chests were opened than conjurations \
     exist in this save. A conjuration reward was probably lost to a game bug.";

const SAVE_LIST_CHOICE_WIDTH: usize = 4;
const SAVE_LIST_FILE_WIDTH: usize = 14;
const SAVE_LIST_KIND_WIDTH: usize = 16;
const SAVE_LIST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// Print `Name (House)` above the missing list.
    pub show_character: bool,
}

pub fn render_text(report: &Report, catalog: &Catalog) -> String {
    render_text_with_options(report, catalog, TextRenderOptions::default())
}

pub fn render_text_with_options(
    report: &Report,
    catalog: &Catalog,
    options: TextRenderOptions,
) -> String {
    let mut out = String::new();
    if options.show_character {
        writeln!(&mut out, "{}", character_line(&report.save))
            .expect("writing to String cannot fail");
        writeln!(&mut out).expect("writing to String cannot fail");
    }

    if report.is_complete() {
        writeln!(&mut out, "{CONGRATULATIONS}").expect("writing to String cannot fail");
        return out;
    }

    for (i, group) in report.groups.iter().enumerate() {
        if i > 0 {
            writeln!(&mut out).expect("writing to String cannot fail");
        }
        write_group(&mut out, group, catalog);
    }
    out
}

/// `Name (House)`, with placeholders for whatever the save didn't carry.
pub fn character_line(info: &SaveInfo) -> String {
    format!(
        "{} ({})",
        info.character_name.as_deref().unwrap_or(UNKNOWN_NAME),
        info.character_house.as_deref().unwrap_or(UNKNOWN_HOUSE)
    )
}

/// `Field Guide Page #3 (Revelio) - https://youtu.be/...`
pub fn entry_line(entry: &CatalogEntry, catalog: &Catalog) -> String {
    match catalog.video_url(entry) {
        Some(url) => format!("{} - {url}", entry.label()),
        None => entry.label(),
    }
}

/// Plain warning messages, bug heuristics first. Styling is left to the
/// caller.
pub fn warning_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();
    if report.bugs.quest_chest {
        lines.push(QUEST_CHEST_WARNING.to_string());
    }
    if report.bugs.missing_conjuration {
        lines.push(CONJURATION_WARNING.to_string());
    }
    if !report.unreliable_types.is_empty() {
        lines.push(format!(
            "Some tables couldn't be read; these results may be incomplete: {}",
            report.unreliable_types.join(", ")
        ));
    }
    lines
}

fn write_group(out: &mut String, group: &MissingGroup, catalog: &Catalog) {
    writeln!(out, "{}", group.key.title()).expect("writing to String cannot fail");
    for entry in &group.entries {
        writeln!(out, "\t{}", entry_line(entry, catalog)).expect("writing to String cannot fail");
    }
}

pub fn render_json(report: &Report, catalog: &Catalog, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(report_json(report, catalog)),
    }
}

fn report_json(report: &Report, catalog: &Catalog) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert(
        "character".to_string(),
        optional_string(report.save.character_name.as_deref()),
    );
    out.insert(
        "house".to_string(),
        optional_string(report.save.character_house.as_deref()),
    );
    out.insert(
        "grouping".to_string(),
        JsonValue::String(grouping_name(report.grouping).to_string()),
    );
    out.insert(
        "missing_count".to_string(),
        JsonValue::from(report.missing_count),
    );
    out.insert(
        "groups".to_string(),
        JsonValue::Array(
            report
                .groups
                .iter()
                .map(|group| group_to_json(group, catalog))
                .collect(),
        ),
    );

    let mut bugs = JsonMap::new();
    bugs.insert(
        "quest_chest".to_string(),
        JsonValue::Bool(report.bugs.quest_chest),
    );
    bugs.insert(
        "missing_conjuration".to_string(),
        JsonValue::Bool(report.bugs.missing_conjuration),
    );
    out.insert("bugs".to_string(), JsonValue::Object(bugs));

    out.insert(
        "unreliable_types".to_string(),
        JsonValue::Array(
            report
                .unreliable_types
                .iter()
                .map(|name| JsonValue::String(name.to_string()))
                .collect(),
        ),
    );
    out
}

fn group_to_json(group: &MissingGroup, catalog: &Catalog) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("title".to_string(), JsonValue::String(group.key.title()));
    let key = match group.key {
        GroupKey::Region(region) => format!("{region:?}"),
        GroupKey::Type(kind) => format!("{kind:?}"),
    };
    m.insert("key".to_string(), JsonValue::String(key));
    m.insert(
        "entries".to_string(),
        JsonValue::Array(
            group
                .entries
                .iter()
                .map(|entry| entry_to_json(entry, catalog))
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

fn entry_to_json(entry: &CatalogEntry, catalog: &Catalog) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("type".to_string(), JsonValue::String(format!("{:?}", entry.kind)));
    m.insert("key".to_string(), JsonValue::String(entry.key.to_string()));
    m.insert("label".to_string(), JsonValue::String(entry.label()));
    m.insert("region".to_string(), JsonValue::String(entry.region.title()));
    if let Some(url) = catalog.video_url(entry) {
        m.insert("url".to_string(), JsonValue::String(url));
    }
    JsonValue::Object(m)
}

fn optional_string(value: Option<&str>) -> JsonValue {
    value
        .map(|v| JsonValue::String(v.to_string()))
        .unwrap_or(JsonValue::Null)
}

fn grouping_name(grouping: Grouping) -> &'static str {
    match grouping {
        Grouping::ByRegion => "region",
        Grouping::ByType => "type",
    }
}

/// One block per character, saves numbered from 1 across the whole list in
/// the order they are printed.
pub fn render_save_list(characters: &[CharacterSaves]) -> String {
    let mut out = String::new();
    if characters.is_empty() {
        writeln!(&mut out, "Legilimens was unable to detect any save files.")
            .expect("writing to String cannot fail");
        return out;
    }

    let mut choice = 1;
    for (i, character) in characters.iter().enumerate() {
        if i > 0 {
            writeln!(&mut out).expect("writing to String cannot fail");
        }
        writeln!(
            &mut out,
            "{} ({}) [user {}, character {}]",
            character.character_name,
            character.character_house,
            character.user,
            character.character_slot
        )
        .expect("writing to String cannot fail");

        for save in &character.saves {
            let line = format!(
                "  {:>cw$}  {:<fw$}{:<kw$}{}",
                choice,
                fit_column(&save.file_name(), SAVE_LIST_FILE_WIDTH - 1),
                save.kind.to_string(),
                format_modified(save.modified),
                cw = SAVE_LIST_CHOICE_WIDTH,
                fw = SAVE_LIST_FILE_WIDTH,
                kw = SAVE_LIST_KIND_WIDTH,
            );
            writeln!(&mut out, "{}", line.trim_end()).expect("writing to String cannot fail");
            choice += 1;
        }
    }
    out
}

pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(SAVE_LIST_TIME_FORMAT)
        .to_string()
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out: String = value.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::fit_column;

    #[test]
    fn fit_column_truncates_with_ellipsis() {
        assert_eq!(fit_column("HL-01-00.sav", 13), "HL-01-00.sav");
        assert_eq!(fit_column("HL-01-00.sav.bak", 13), "HL-01-00.s...");
        assert_eq!(fit_column("abcdef", 2), "ab");
    }
}
