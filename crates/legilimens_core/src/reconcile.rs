use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{
    Catalog, CatalogEntry, CollectibleType, FilterSelection, Grouping, Region, Table,
};
use crate::query::QueryOutcome;

/// Mission key the game records once the butterfly quest line is complete.
pub const QUEST_COMPLETE_KEY: &str = "COM_11";
pub const QUEST_TABLE: Table = Table::MissionDynamic;
/// The chest that completing the quest should have opened is the first
/// catalog entry of this type.
pub const QUEST_REWARD_CHEST: CollectibleType = CollectibleType::ButterflyChest;
pub const CONJURATION_TABLE: Table = Table::ConjurationDynamic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GroupKey {
    Region(Region),
    Type(CollectibleType),
}

impl GroupKey {
    pub fn title(&self) -> String {
        match self {
            Self::Region(region) => region.title(),
            Self::Type(kind) => kind.plural_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingGroup {
    pub key: GroupKey,
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BugFlags {
    /// The quest reports complete but its reward chest was never opened.
    pub quest_chest: bool,
    /// More conjuration chests were opened than conjurations exist.
    pub missing_conjuration: bool,
}

impl BugFlags {
    pub fn any(&self) -> bool {
        self.quest_chest || self.missing_conjuration
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub grouping: Grouping,
    pub groups: Vec<MissingGroup>,
    pub bugs: BugFlags,
    pub collected: usize,
    /// Entries whose backing table failed; neither collected nor missing.
    pub undecidable: usize,
    pub conjuration_chests_opened: usize,
}

impl Reconciliation {
    pub fn missing_count(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.groups.is_empty()
    }
}

pub struct Reconciler<'a> {
    catalog: &'a Catalog,
}

impl<'a> Reconciler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn reconcile(&self, outcome: &QueryOutcome, selection: &FilterSelection) -> Reconciliation {
        let mut groups: BTreeMap<GroupKey, Vec<CatalogEntry>> = BTreeMap::new();
        let mut collected = 0;
        let mut undecidable = 0;
        let mut conjuration_chests_opened = 0;

        for entry in self.catalog.entries() {
            let Some(keys) = outcome.keys(entry.kind.table()) else {
                undecidable += 1;
                continue;
            };

            if keys.contains(entry.key) {
                collected += 1;
                if CollectibleType::CONJURATION_CHESTS.contains(&entry.kind) {
                    conjuration_chests_opened += 1;
                }
                continue;
            }

            if !selection.allows(entry.kind) {
                continue;
            }

            let key = match selection.grouping {
                Grouping::ByRegion => GroupKey::Region(entry.region),
                Grouping::ByType => GroupKey::Type(entry.kind),
            };
            groups.entry(key).or_default().push(*entry);
        }

        let bugs = BugFlags {
            quest_chest: self.quest_chest_bug(outcome),
            missing_conjuration: conjuration_bug(outcome, conjuration_chests_opened),
        };

        Reconciliation {
            grouping: selection.grouping,
            groups: groups
                .into_iter()
                .map(|(key, entries)| MissingGroup { key, entries })
                .collect(),
            bugs,
            collected,
            undecidable,
            conjuration_chests_opened,
        }
    }

    fn quest_chest_bug(&self, outcome: &QueryOutcome) -> bool {
        let Some(chest) = self.catalog.first_of_kind(QUEST_REWARD_CHEST) else {
            return false;
        };
        let (Some(missions), Some(chests)) =
            (outcome.keys(QUEST_TABLE), outcome.keys(chest.kind.table()))
        else {
            return false;
        };
        missions.contains(QUEST_COMPLETE_KEY) && !chests.contains(chest.key)
    }
}

fn conjuration_bug(outcome: &QueryOutcome, chests_opened: usize) -> bool {
    let chest_tables_ok = CollectibleType::CONJURATION_CHESTS
        .iter()
        .all(|kind| outcome.keys(kind.table()).is_some());
    match outcome.keys(CONJURATION_TABLE) {
        Some(conjurations) if chest_tables_ok => chests_opened > conjurations.len(),
        _ => false,
    }
}
