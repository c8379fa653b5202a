use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use super::CollectibleType;
use super::CollectibleType::*;

pub const ALL_TOKEN: &str = "all";
pub const GROUP_BY_TYPE_TOKEN: &str = "type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Grouping {
    #[default]
    ByRegion,
    ByType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub token: &'static str,
    pub display_name: &'static str,
    pub included_types: &'static [CollectibleType],
}

const CHESTS: &[CollectibleType] = &[
    ButterflyChest,
    VivariumChest,
    MiscChest,
    ArithmancyChest,
    DungeonChest,
    CampChest,
];

/// Position in this list is the choice number offered interactively.
#[rustfmt::skip]
pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption { token: ALL_TOKEN,            display_name: "All collectibles",        included_types: &CollectibleType::ALL },
    FilterOption { token: "revelio",            display_name: "Revelio pages",           included_types: &[Revelio] },
    FilterOption { token: "flying",             display_name: "Flying pages",            included_types: &[Flying] },
    FilterOption { token: "moths",              display_name: "Moth frames",             included_types: &[Moth] },
    FilterOption { token: "braziers",           display_name: "Braziers",                included_types: &[Brazier] },
    FilterOption { token: "statues",            display_name: "Statues",                 included_types: &[Statue] },
    FilterOption { token: "keys",               display_name: "Daedalian keys",          included_types: &[DaedalianKey] },
    FilterOption { token: "demiguise",          display_name: "Demiguise moons",         included_types: &[Demiguise] },
    FilterOption { token: "balloons",           display_name: "Balloon sets",            included_types: &[Balloon] },
    FilterOption { token: "landing",            display_name: "Landing platforms",       included_types: &[Landing] },
    FilterOption { token: "merlin",             display_name: "Merlin trials",           included_types: &[Merlin] },
    FilterOption { token: "astronomy",          display_name: "Astronomy tables",        included_types: &[Astronomy] },
    FilterOption { token: "ancient",            display_name: "Ancient magic hotspots",  included_types: &[AncientMagic] },
    FilterOption { token: "foes",               display_name: "Foes",                    included_types: &[Foe] },
    FilterOption { token: "chests",             display_name: "All chests",              included_types: CHESTS },
    FilterOption { token: "butterfly",          display_name: "Butterfly chests",        included_types: &[ButterflyChest] },
    FilterOption { token: "vivarium",           display_name: "Vivarium chests",         included_types: &[VivariumChest] },
    FilterOption { token: "collection",         display_name: "Collection chests",       included_types: &[MiscChest] },
    FilterOption { token: "arithmancy",         display_name: "Arithmancy chests",       included_types: &[ArithmancyChest] },
    FilterOption { token: "dungeon",            display_name: "Dungeon chests",          included_types: &[DungeonChest] },
    FilterOption { token: "camp",               display_name: "Camp chests",             included_types: &[CampChest] },
    FilterOption { token: GROUP_BY_TYPE_TOKEN,  display_name: "Group by type",           included_types: &[] },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter \"{0}\"")]
    UnknownToken(String),
    #[error("invalid choice {choice}, must be between 0 and {max}")]
    UnknownChoice { choice: usize, max: usize },
}

/// Allowed collectible types plus the grouping mode for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub allowed: BTreeSet<CollectibleType>,
    pub grouping: Grouping,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl FilterSelection {
    pub fn all() -> Self {
        Self {
            allowed: CollectibleType::ALL.into_iter().collect(),
            grouping: Grouping::ByRegion,
        }
    }

    /// Resolves CLI tokens. Tokens are case-insensitive; a bare number
    /// selects the option at that position in [`FILTER_OPTIONS`].
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim().to_ascii_lowercase();
            if token.is_empty() {
                continue;
            }
            let option = match token.parse::<usize>() {
                Ok(choice) => option_at(choice)?,
                Err(_) => FILTER_OPTIONS
                    .iter()
                    .find(|option| option.token == token)
                    .ok_or(FilterError::UnknownToken(token.clone()))?,
            };
            options.push(option);
        }
        Ok(Self::from_options(options))
    }

    fn from_options(options: Vec<&FilterOption>) -> Self {
        let mut grouping = Grouping::ByRegion;
        let mut allowed = BTreeSet::new();
        for option in options {
            if option.token == GROUP_BY_TYPE_TOKEN {
                grouping = Grouping::ByType;
                continue;
            }
            allowed.extend(option.included_types.iter().copied());
        }

        if allowed.is_empty() {
            return Self {
                grouping,
                ..Self::all()
            };
        }
        Self { allowed, grouping }
    }

    pub fn allows(&self, kind: CollectibleType) -> bool {
        self.allowed.contains(&kind)
    }
}

fn option_at(choice: usize) -> Result<&'static FilterOption, FilterError> {
    FILTER_OPTIONS.get(choice).ok_or(FilterError::UnknownChoice {
        choice,
        max: FILTER_OPTIONS.len() - 1,
    })
}
