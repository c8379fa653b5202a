use serde::Serialize;

use super::CollectibleType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Table {
    CollectionDynamic,
    SphinxPuzzleDynamic,
    LootDropComponentDynamic,
    EconomicExpiryDynamic,
    MiscDataDynamic,
    MapLocationDataDynamic,
    MissionDynamic,
    ConjurationDynamic,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Self::CollectionDynamic,
        Self::SphinxPuzzleDynamic,
        Self::LootDropComponentDynamic,
        Self::EconomicExpiryDynamic,
        Self::MiscDataDynamic,
        Self::MapLocationDataDynamic,
        Self::MissionDynamic,
        Self::ConjurationDynamic,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn spec(&self) -> &'static TableSpec {
        &TABLE_SPECS[self.index()]
    }

    /// Collectible types backed by this table, in type order.
    pub fn collectible_types(&self) -> impl Iterator<Item = CollectibleType> + '_ {
        CollectibleType::ALL
            .into_iter()
            .filter(move |kind| kind.table() == *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub table: Table,
    pub name: &'static str,
    pub query: &'static str,
    /// The single result row is a delimited list of keys rather than one
    /// key per row.
    pub aggregate_row: bool,
    /// What becomes unreliable when this table can't be queried.
    pub affected_types: &'static [&'static str],
}

/// Queried in this order, one spec per [`Table`] variant.
pub static TABLE_SPECS: [TableSpec; 8] = [
    TableSpec {
        table: Table::CollectionDynamic,
        name: "CollectionDynamic",
        query: "SELECT CollectionName FROM CollectionDynamic WHERE CollectionState = 'Obtained'",
        aggregate_row: false,
        affected_types: &["Revelio Pages", "Flying Pages", "Demiguise Moons", "Foes"],
    },
    TableSpec {
        table: Table::SphinxPuzzleDynamic,
        name: "SphinxPuzzleDynamic",
        query: "SELECT PuzzleName FROM SphinxPuzzleDynamic WHERE PuzzleState = 'Solved'",
        aggregate_row: false,
        affected_types: &["Merlin Trials", "Arithmancy Chests"],
    },
    TableSpec {
        table: Table::LootDropComponentDynamic,
        name: "LootDropComponentDynamic",
        query: "SELECT ActorID FROM LootDropComponentDynamic WHERE Opened = 1",
        aggregate_row: false,
        affected_types: &[
            "Butterfly Chests",
            "Collection Chests",
            "Dungeon Chests",
            "Camp Chests",
        ],
    },
    TableSpec {
        table: Table::EconomicExpiryDynamic,
        name: "EconomicExpiryDynamic",
        query: "SELECT UniqueID FROM EconomicExpiryDynamic WHERE ExpiryType = 'VivariumChest'",
        aggregate_row: false,
        affected_types: &["Vivarium Chests"],
    },
    TableSpec {
        table: Table::MiscDataDynamic,
        name: "MiscDataDynamic",
        query: "SELECT DataValue FROM MiscDataDynamic WHERE DataName = 'CompletedLocations'",
        aggregate_row: true,
        affected_types: &[
            "Landing Platforms",
            "Astronomy Tables",
            "Ancient Magic Hotspots",
        ],
    },
    TableSpec {
        table: Table::MapLocationDataDynamic,
        name: "MapLocationDataDynamic",
        query: "SELECT MapLocationID FROM MapLocationDataDynamic WHERE State = 'Completed'",
        aggregate_row: false,
        affected_types: &[
            "Moth Frames",
            "Braziers",
            "Statues",
            "Daedalian Keys",
            "Balloon Sets",
        ],
    },
    TableSpec {
        table: Table::MissionDynamic,
        name: "MissionDynamic",
        query: "SELECT MissionID FROM MissionDynamic WHERE MissionState = 'Completed'",
        aggregate_row: false,
        affected_types: &["Butterfly chest bug detection"],
    },
    TableSpec {
        table: Table::ConjurationDynamic,
        name: "ConjurationDynamic",
        query: "SELECT ItemID FROM ConjurationDynamic",
        aggregate_row: false,
        affected_types: &["Conjuration bug detection"],
    },
];

#[cfg(test)]
mod tests {
    use super::{TABLE_SPECS, Table};

    #[test]
    fn specs_are_indexed_by_table() {
        for table in Table::ALL {
            assert_eq!(TABLE_SPECS[table.index()].table, table);
            assert_eq!(table.spec().name, format!("{table:?}"));
        }
    }

    #[test]
    fn affected_types_match_type_mapping() {
        for table in Table::ALL {
            let from_mapping: Vec<&str> = table
                .collectible_types()
                .map(|kind| kind.plural_name())
                .collect();
            if from_mapping.is_empty() {
                assert_eq!(table.spec().affected_types.len(), 1);
                continue;
            }
            assert_eq!(table.spec().affected_types, from_mapping.as_slice());
        }
    }
}
