mod data;
pub mod filters;
pub mod tables;

use std::sync::LazyLock;

use serde::Serialize;

pub use filters::{FILTER_OPTIONS, FilterError, FilterOption, FilterSelection, Grouping};
pub use tables::{TABLE_SPECS, Table, TableSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CollectibleType {
    Revelio,
    Flying,
    Moth,
    Brazier,
    Statue,
    DaedalianKey,
    Demiguise,
    Balloon,
    Landing,
    Merlin,
    Astronomy,
    AncientMagic,
    Foe,
    ButterflyChest,
    VivariumChest,
    MiscChest,
    ArithmancyChest,
    DungeonChest,
    CampChest,
}

impl CollectibleType {
    pub const ALL: [CollectibleType; 19] = [
        Self::Revelio,
        Self::Flying,
        Self::Moth,
        Self::Brazier,
        Self::Statue,
        Self::DaedalianKey,
        Self::Demiguise,
        Self::Balloon,
        Self::Landing,
        Self::Merlin,
        Self::Astronomy,
        Self::AncientMagic,
        Self::Foe,
        Self::ButterflyChest,
        Self::VivariumChest,
        Self::MiscChest,
        Self::ArithmancyChest,
        Self::DungeonChest,
        Self::CampChest,
    ];

    /// Chest types whose reward is a Room of Requirement conjuration.
    pub const CONJURATION_CHESTS: [CollectibleType; 3] = [
        Self::ButterflyChest,
        Self::VivariumChest,
        Self::ArithmancyChest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Revelio | Self::Flying | Self::Brazier | Self::Statue | Self::Foe => {
                "Field Guide Page"
            }
            Self::Moth => "Moth Frame",
            Self::DaedalianKey => "Daedalian Key",
            Self::Demiguise => "Demiguise Moon",
            Self::Balloon => "Balloon Set",
            Self::Landing => "Landing Platform",
            Self::Merlin => "Merlin Trial",
            Self::Astronomy => "Astronomy Table",
            Self::AncientMagic => "Ancient Magic Hotspot",
            Self::ButterflyChest => "Butterfly Chest",
            Self::VivariumChest => "Vivarium Chest",
            Self::MiscChest => "Collection Chest",
            Self::ArithmancyChest => "Arithmancy Chest",
            Self::DungeonChest => "Dungeon Chest",
            Self::CampChest => "Camp Chest",
        }
    }

    /// Parenthetical shown after the item number, for types that share a
    /// name.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Self::Revelio => Some("Revelio"),
            Self::Flying => Some("Flying"),
            Self::Brazier => Some("Brazier"),
            Self::Statue => Some("Statue"),
            Self::Foe => Some("Foe"),
            _ => None,
        }
    }

    pub fn plural_name(&self) -> &'static str {
        match self {
            Self::Revelio => "Revelio Pages",
            Self::Flying => "Flying Pages",
            Self::Moth => "Moth Frames",
            Self::Brazier => "Braziers",
            Self::Statue => "Statues",
            Self::DaedalianKey => "Daedalian Keys",
            Self::Demiguise => "Demiguise Moons",
            Self::Balloon => "Balloon Sets",
            Self::Landing => "Landing Platforms",
            Self::Merlin => "Merlin Trials",
            Self::Astronomy => "Astronomy Tables",
            Self::AncientMagic => "Ancient Magic Hotspots",
            Self::Foe => "Foes",
            Self::ButterflyChest => "Butterfly Chests",
            Self::VivariumChest => "Vivarium Chests",
            Self::MiscChest => "Collection Chests",
            Self::ArithmancyChest => "Arithmancy Chests",
            Self::DungeonChest => "Dungeon Chests",
            Self::CampChest => "Camp Chests",
        }
    }

    /// The database table that records whether an item of this type was
    /// collected.
    pub fn table(&self) -> Table {
        match self {
            Self::Revelio | Self::Flying | Self::Demiguise | Self::Foe => Table::CollectionDynamic,
            Self::Merlin | Self::ArithmancyChest => Table::SphinxPuzzleDynamic,
            Self::ButterflyChest | Self::MiscChest | Self::DungeonChest | Self::CampChest => {
                Table::LootDropComponentDynamic
            }
            Self::VivariumChest => Table::EconomicExpiryDynamic,
            Self::Landing | Self::Astronomy | Self::AncientMagic => Table::MiscDataDynamic,
            Self::Moth | Self::Brazier | Self::Statue | Self::DaedalianKey | Self::Balloon => {
                Table::MapLocationDataDynamic
            }
        }
    }

    pub fn is_chest(&self) -> bool {
        matches!(
            self,
            Self::ButterflyChest
                | Self::VivariumChest
                | Self::MiscChest
                | Self::ArithmancyChest
                | Self::DungeonChest
                | Self::CampChest
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Region {
    Butterflies,
    DaedalianKeys,
    Hogsmeade,
    TheAstronomyWing,
    TheBellTowerWing,
    TheGrandStaircase,
    TheGreatHall,
    TheLibraryAnnex,
    TheSouthWing,
    Vivariums,
    ClagmarCoast,
    CoastalCavern,
    Cragcroftshire,
    FeldcroftRegion,
    ForbiddenForest,
    HogsmeadeValley,
    HogwartsValley,
    ManorCape,
    MarunweemLake,
    NorthFordBog,
    NorthHogwartsRegion,
    PoidsearCoast,
    SouthHogwartsRegion,
    SouthSeaBog,
}

impl Region {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Butterflies => "Butterflies",
            Self::DaedalianKeys => "Daedalian Keys",
            Self::Hogsmeade => "Hogsmeade",
            Self::TheAstronomyWing => "The Astronomy Wing",
            Self::TheBellTowerWing => "The Bell Tower Wing",
            Self::TheGrandStaircase => "The Grand Staircase",
            Self::TheGreatHall => "The Great Hall",
            Self::TheLibraryAnnex => "The Library Annex",
            Self::TheSouthWing => "The South Wing",
            Self::Vivariums => "Vivariums",
            Self::ClagmarCoast => "Clagmar Coast",
            Self::CoastalCavern => "Coastal Cavern",
            Self::Cragcroftshire => "Cragcroftshire",
            Self::FeldcroftRegion => "Feldcroft Region",
            Self::ForbiddenForest => "Forbidden Forest",
            Self::HogsmeadeValley => "Hogsmeade Valley",
            Self::HogwartsValley => "Hogwarts Valley",
            Self::ManorCape => "Manor Cape",
            Self::MarunweemLake => "Marunweem Lake",
            Self::NorthFordBog => "North Ford Bog",
            Self::NorthHogwartsRegion => "North Hogwarts Region",
            Self::PoidsearCoast => "Poidsear Coast",
            Self::SouthHogwartsRegion => "South Hogwarts Region",
            Self::SouthSeaBog => "South Sea Bog",
        }
    }

    /// Enclosing area shown before the region name, if any.
    pub fn area(&self) -> Option<&'static str> {
        match self {
            Self::TheAstronomyWing
            | Self::TheBellTowerWing
            | Self::TheGrandStaircase
            | Self::TheGreatHall
            | Self::TheLibraryAnnex
            | Self::TheSouthWing => Some("Hogwarts"),
            Self::Vivariums => Some("Room of Requirement"),
            _ => None,
        }
    }

    /// `Area - Region`, or just the region name.
    pub fn title(&self) -> String {
        match self.area() {
            Some(area) => format!("{area} - {}", self.name()),
            None => self.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub kind: CollectibleType,
    pub key: &'static str,
    /// Index into the catalog's guide video list.
    pub video: Option<u8>,
    /// Seconds into the guide video.
    pub timestamp: u32,
    pub region: Region,
    pub index: &'static str,
}

impl CatalogEntry {
    /// `Field Guide Page #3 (Revelio)`
    pub fn label(&self) -> String {
        match self.kind.detail() {
            Some(detail) => format!("{} #{} ({})", self.kind.name(), self.index, detail),
            None => format!("{} #{}", self.kind.name(), self.index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    videos: Vec<&'static str>,
}

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(data::ENTRIES.to_vec(), data::VIDEO_IDS.to_vec()));

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>, videos: Vec<&'static str>) -> Self {
        Self { entries, videos }
    }

    /// The compiled-in catalog, built once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn first_of_kind(&self, kind: CollectibleType) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.kind == kind)
    }

    pub fn video_url(&self, entry: &CatalogEntry) -> Option<String> {
        let id = self.videos.get(usize::from(entry.video?))?;
        Some(format!("https://youtu.be/{id}?t={}", entry.timestamp))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
