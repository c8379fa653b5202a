// Saves live under `<LocalAppData>/HogwartsLegacy/Saved/SaveGames/<user>/`
// and are named `HL-<character>-<slot>.sav`.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

use crate::container::{self, SaveInfo};

const SAVE_FILE_NAME_LEN: usize = 12;
const SAVE_FILE_PREFIX: &str = "HL-";
const SAVE_FILE_SUFFIX: &str = ".sav";
const SAVE_DIR_NAMES: [&str; 2] = ["HogwartsLegacy", "Hogwarts Legacy"];

pub const UNKNOWN_NAME: &str = "Unknown name";
pub const UNKNOWN_HOUSE: &str = "Unknown house";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveKind {
    Manual(u8),
    Autosave(u8),
}

impl SaveKind {
    /// `HL-01-11.sav`: a leading `0` in the slot marks a manual save; the
    /// second digit is the zero-based save number.
    pub fn from_file_name(name: &str) -> Option<Self> {
        if !is_save_file_name(name) {
            return None;
        }
        let bytes = name.as_bytes();
        let number = bytes[7].checked_sub(b'0').filter(|n| *n <= 9)? + 1;
        if bytes[6] == b'0' {
            Some(Self::Manual(number))
        } else {
            Some(Self::Autosave(number))
        }
    }
}

impl fmt::Display for SaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual(n) => write!(f, "Manual Save #{n}"),
            Self::Autosave(n) => write!(f, "Autosave #{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    pub path: PathBuf,
    pub kind: SaveKind,
    pub modified: SystemTime,
}

impl SaveFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Every save for one character of one user, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSaves {
    pub user: String,
    pub character_slot: String,
    pub character_name: String,
    pub character_house: String,
    pub saves: Vec<SaveFile>,
}

pub fn is_save_file_name(name: &str) -> bool {
    name.len() == SAVE_FILE_NAME_LEN
        && name.is_ascii()
        && name.starts_with(SAVE_FILE_PREFIX)
        && name.ends_with(SAVE_FILE_SUFFIX)
}

/// `"01"` for `HL-01-11.sav`.
pub fn character_slot(name: &str) -> Option<&str> {
    if !is_save_file_name(name) {
        return None;
    }
    name.get(3..5)
}

/// Reads only the first four bytes.
pub fn has_save_header(path: &Path) -> io::Result<bool> {
    let mut header = [0u8; 4];
    let mut file = File::open(path)?;
    match file.read_exact(&mut header) {
        Ok(()) => Ok(container::has_magic_header(&header)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

pub fn is_valid_save_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    is_save_file_name(name) && path.is_file() && has_save_header(path).unwrap_or(false)
}

/// First existing `SaveGames` directory under the local app data dir.
pub fn default_save_root() -> Option<PathBuf> {
    let local = dirs::data_local_dir()?;
    SAVE_DIR_NAMES
        .iter()
        .map(|name| local.join(name).join("Saved").join("SaveGames"))
        .find(|path| path.is_dir())
}

/// Groups the valid saves under `root` by user folder and character slot.
pub fn discover_saves(root: &Path) -> io::Result<Vec<CharacterSaves>> {
    let mut users: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_dir())
        .collect();
    users.sort();

    let mut result = Vec::new();
    for user_dir in users {
        let user = user_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let entries = match fs::read_dir(&user_dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("skipping {}: {e}", user_dir.display());
                continue;
            }
        };

        let mut by_character: BTreeMap<String, Vec<SaveFile>> = BTreeMap::new();
        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            if !is_valid_save_file(&path) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let (Some(slot), Some(kind)) = (character_slot(&name), SaveKind::from_file_name(&name))
            else {
                continue;
            };
            let modified = match entry.metadata().and_then(|meta| meta.modified()) {
                Ok(modified) => modified,
                Err(e) => {
                    log::debug!("skipping {}: {e}", path.display());
                    continue;
                }
            };
            by_character
                .entry(slot.to_string())
                .or_default()
                .push(SaveFile {
                    path,
                    kind,
                    modified,
                });
        }

        for (character_slot, mut saves) in by_character {
            saves.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.path.cmp(&b.path)));
            let info = character_info(&saves);
            result.push(CharacterSaves {
                user: user.clone(),
                character_slot,
                character_name: info.character_name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                character_house: info
                    .character_house
                    .unwrap_or_else(|| UNKNOWN_HOUSE.to_string()),
                saves,
            });
        }
    }

    Ok(result)
}

/// Name and house from the newest saves that carry them.
fn character_info(saves: &[SaveFile]) -> SaveInfo {
    let mut info = SaveInfo::default();
    for save in saves {
        if info.is_complete() {
            break;
        }
        let parsed = match fs::read(&save.path)
            .ok()
            .and_then(|bytes| container::parse_save_info(&bytes).ok())
        {
            Some(parsed) => parsed,
            None => continue,
        };
        if info.character_name.is_none() {
            info.character_name = parsed.character_name;
        }
        if info.character_house.is_none() {
            info.character_house = parsed.character_house;
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::{SaveKind, character_slot, is_save_file_name};

    #[test]
    fn recognizes_save_file_names() {
        assert!(is_save_file_name("HL-01-11.sav"));
        assert!(!is_save_file_name("HL-01-11.sav.bak"));
        assert!(!is_save_file_name("XX-01-11.sav"));
        assert!(!is_save_file_name("HL-1-11.sav"));
        assert!(!is_save_file_name("HL-01-11.txt"));
    }

    #[test]
    fn save_kind_from_slot_digits() {
        assert_eq!(SaveKind::from_file_name("HL-01-00.sav"), Some(SaveKind::Manual(1)));
        assert_eq!(SaveKind::from_file_name("HL-01-04.sav"), Some(SaveKind::Manual(5)));
        assert_eq!(SaveKind::from_file_name("HL-02-12.sav"), Some(SaveKind::Autosave(3)));
        assert_eq!(SaveKind::from_file_name("HL-02-1x.sav"), None);
        assert_eq!(SaveKind::Autosave(3).to_string(), "Autosave #3");
        assert_eq!(SaveKind::Manual(1).to_string(), "Manual Save #1");
    }

    #[test]
    fn character_slot_is_the_first_pair() {
        assert_eq!(character_slot("HL-07-11.sav"), Some("07"));
        assert_eq!(character_slot("notes.txt"), None);
    }
}
