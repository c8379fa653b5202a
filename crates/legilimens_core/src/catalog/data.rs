//! Built-in collectible catalog.
//!
//! These rows are placeholders: a few keys per collectible type, shaped like
//! the identifiers the game writes to each backing table, with no guide
//! videos attached. They keep every type and region exercised until the full
//! key list is supplied through [`Catalog::new`](super::Catalog::new) or
//! pasted in here. Entries without a video render without a link.

use super::CatalogEntry;
use super::CollectibleType::*;
use super::Region::*;

pub(super) const VIDEO_IDS: &[&str] = &[];

#[rustfmt::skip]
pub(super) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry { kind: Revelio,         key: "Revelio_AstronomyWing_01",          video: None, timestamp: 0, region: TheAstronomyWing,    index: "1" },
    CatalogEntry { kind: Revelio,         key: "Revelio_BellTower_01",              video: None, timestamp: 0, region: TheBellTowerWing,    index: "2" },
    CatalogEntry { kind: Revelio,         key: "Revelio_GreatHall_01",              video: None, timestamp: 0, region: TheGreatHall,        index: "3" },
    CatalogEntry { kind: Revelio,         key: "Revelio_Hogsmeade_01",              video: None, timestamp: 0, region: Hogsmeade,           index: "4" },
    CatalogEntry { kind: Revelio,         key: "Revelio_Feldcroft_01",              video: None, timestamp: 0, region: FeldcroftRegion,     index: "5" },

    CatalogEntry { kind: Flying,          key: "FlyingPage_NorthHogwarts_01",       video: None, timestamp: 0, region: NorthHogwartsRegion, index: "1" },
    CatalogEntry { kind: Flying,          key: "FlyingPage_HogwartsValley_01",      video: None, timestamp: 0, region: HogwartsValley,      index: "2" },
    CatalogEntry { kind: Flying,          key: "FlyingPage_ManorCape_01",           video: None, timestamp: 0, region: ManorCape,           index: "3" },

    CatalogEntry { kind: Moth,            key: "MothFrame_LibraryAnnex_01",         video: None, timestamp: 0, region: TheLibraryAnnex,     index: "1" },
    CatalogEntry { kind: Moth,            key: "MothFrame_GrandStaircase_01",       video: None, timestamp: 0, region: TheGrandStaircase,   index: "2" },
    CatalogEntry { kind: Moth,            key: "MothFrame_Hogsmeade_01",            video: None, timestamp: 0, region: Hogsmeade,           index: "3" },

    CatalogEntry { kind: Brazier,         key: "Brazier_ForbiddenForest_01",        video: None, timestamp: 0, region: ForbiddenForest,     index: "1" },
    CatalogEntry { kind: Brazier,         key: "Brazier_SouthSeaBog_01",            video: None, timestamp: 0, region: SouthSeaBog,         index: "2" },
    CatalogEntry { kind: Brazier,         key: "Brazier_Cragcroftshire_01",         video: None, timestamp: 0, region: Cragcroftshire,      index: "3" },

    CatalogEntry { kind: Statue,          key: "Statue_SouthWing_01",               video: None, timestamp: 0, region: TheSouthWing,        index: "1" },
    CatalogEntry { kind: Statue,          key: "Statue_Hogsmeade_01",               video: None, timestamp: 0, region: Hogsmeade,           index: "2" },
    CatalogEntry { kind: Statue,          key: "Statue_MarunweemLake_01",           video: None, timestamp: 0, region: MarunweemLake,       index: "3" },

    CatalogEntry { kind: DaedalianKey,    key: "DaedalianKey_AstronomyWing",        video: None, timestamp: 0, region: DaedalianKeys,       index: "1" },
    CatalogEntry { kind: DaedalianKey,    key: "DaedalianKey_GreatHall",            video: None, timestamp: 0, region: DaedalianKeys,       index: "2" },
    CatalogEntry { kind: DaedalianKey,    key: "DaedalianKey_SouthWing",            video: None, timestamp: 0, region: DaedalianKeys,       index: "3" },

    CatalogEntry { kind: Demiguise,       key: "Demiguise_GrandStaircase_01",       video: None, timestamp: 0, region: TheGrandStaircase,   index: "1" },
    CatalogEntry { kind: Demiguise,       key: "Demiguise_Hogsmeade_01",            video: None, timestamp: 0, region: Hogsmeade,           index: "2" },
    CatalogEntry { kind: Demiguise,       key: "Demiguise_Feldcroft_01",            video: None, timestamp: 0, region: FeldcroftRegion,     index: "3" },

    CatalogEntry { kind: Balloon,         key: "BalloonSet_HogsmeadeValley_01",     video: None, timestamp: 0, region: HogsmeadeValley,     index: "1" },
    CatalogEntry { kind: Balloon,         key: "BalloonSet_PoidsearCoast_01",       video: None, timestamp: 0, region: PoidsearCoast,       index: "2" },
    CatalogEntry { kind: Balloon,         key: "BalloonSet_ClagmarCoast_01",        video: None, timestamp: 0, region: ClagmarCoast,        index: "3" },

    CatalogEntry { kind: Landing,         key: "LandingPlatform_HogwartsValley_01", video: None, timestamp: 0, region: HogwartsValley,      index: "1" },
    CatalogEntry { kind: Landing,         key: "LandingPlatform_NorthFordBog_01",   video: None, timestamp: 0, region: NorthFordBog,        index: "2" },
    CatalogEntry { kind: Landing,         key: "LandingPlatform_ManorCape_01",      video: None, timestamp: 0, region: ManorCape,           index: "3" },

    CatalogEntry { kind: Merlin,          key: "MerlinTrial_HogsmeadeValley_01",    video: None, timestamp: 0, region: HogsmeadeValley,     index: "1" },
    CatalogEntry { kind: Merlin,          key: "MerlinTrial_SouthHogwarts_01",      video: None, timestamp: 0, region: SouthHogwartsRegion, index: "2" },
    CatalogEntry { kind: Merlin,          key: "MerlinTrial_CoastalCavern_01",      video: None, timestamp: 0, region: CoastalCavern,       index: "3" },

    CatalogEntry { kind: Astronomy,       key: "AstronomyTable_AstronomyWing_01",   video: None, timestamp: 0, region: TheAstronomyWing,    index: "1" },
    CatalogEntry { kind: Astronomy,       key: "AstronomyTable_NorthFordBog_01",    video: None, timestamp: 0, region: NorthFordBog,        index: "2" },
    CatalogEntry { kind: Astronomy,       key: "AstronomyTable_Cragcroftshire_01",  video: None, timestamp: 0, region: Cragcroftshire,      index: "3" },

    CatalogEntry { kind: AncientMagic,    key: "AncientMagic_ForbiddenForest_01",   video: None, timestamp: 0, region: ForbiddenForest,     index: "1" },
    CatalogEntry { kind: AncientMagic,    key: "AncientMagic_SouthSeaBog_01",       video: None, timestamp: 0, region: SouthSeaBog,         index: "2" },
    CatalogEntry { kind: AncientMagic,    key: "AncientMagic_PoidsearCoast_01",     video: None, timestamp: 0, region: PoidsearCoast,       index: "3" },

    CatalogEntry { kind: Foe,             key: "Foe_Acromantula",                   video: None, timestamp: 0, region: ForbiddenForest,     index: "1" },
    CatalogEntry { kind: Foe,             key: "Foe_DarkWizard",                    video: None, timestamp: 0, region: NorthHogwartsRegion, index: "2" },
    CatalogEntry { kind: Foe,             key: "Foe_Troll",                         video: None, timestamp: 0, region: CoastalCavern,       index: "3" },

    CatalogEntry { kind: ButterflyChest,  key: "ButterflyChest_HogsmeadeValley_01", video: None, timestamp: 0, region: Butterflies,         index: "1" },
    CatalogEntry { kind: ButterflyChest,  key: "ButterflyChest_SouthHogwarts_01",   video: None, timestamp: 0, region: Butterflies,         index: "2" },
    CatalogEntry { kind: ButterflyChest,  key: "ButterflyChest_Feldcroft_01",       video: None, timestamp: 0, region: Butterflies,         index: "3" },

    CatalogEntry { kind: VivariumChest,   key: "VivariumChest_Forest_01",           video: None, timestamp: 0, region: Vivariums,           index: "1" },
    CatalogEntry { kind: VivariumChest,   key: "VivariumChest_Grasslands_01",       video: None, timestamp: 0, region: Vivariums,           index: "2" },
    CatalogEntry { kind: VivariumChest,   key: "VivariumChest_Coastal_01",          video: None, timestamp: 0, region: Vivariums,           index: "3" },

    CatalogEntry { kind: MiscChest,       key: "CollectionChest_LibraryAnnex_01",   video: None, timestamp: 0, region: TheLibraryAnnex,     index: "1" },
    CatalogEntry { kind: MiscChest,       key: "CollectionChest_BellTower_01",      video: None, timestamp: 0, region: TheBellTowerWing,    index: "2" },
    CatalogEntry { kind: MiscChest,       key: "CollectionChest_Hogsmeade_01",      video: None, timestamp: 0, region: Hogsmeade,           index: "3" },

    CatalogEntry { kind: ArithmancyChest, key: "ArithmancyDoor_SouthHogwarts_01",   video: None, timestamp: 0, region: SouthHogwartsRegion, index: "1" },
    CatalogEntry { kind: ArithmancyChest, key: "ArithmancyDoor_MarunweemLake_01",   video: None, timestamp: 0, region: MarunweemLake,       index: "2" },
    CatalogEntry { kind: ArithmancyChest, key: "ArithmancyDoor_ClagmarCoast_01",    video: None, timestamp: 0, region: ClagmarCoast,        index: "3" },

    CatalogEntry { kind: DungeonChest,    key: "DungeonChest_CoastalCavern_01",     video: None, timestamp: 0, region: CoastalCavern,       index: "1" },
    CatalogEntry { kind: DungeonChest,    key: "DungeonChest_NorthFordBog_01",      video: None, timestamp: 0, region: NorthFordBog,        index: "2" },
    CatalogEntry { kind: DungeonChest,    key: "DungeonChest_ForbiddenForest_01",   video: None, timestamp: 0, region: ForbiddenForest,     index: "3" },

    CatalogEntry { kind: CampChest,       key: "CampChest_Cragcroftshire_01",       video: None, timestamp: 0, region: Cragcroftshire,      index: "1" },
    CatalogEntry { kind: CampChest,       key: "CampChest_ManorCape_01",            video: None, timestamp: 0, region: ManorCape,           index: "2" },
    CatalogEntry { kind: CampChest,       key: "CampChest_PoidsearCoast_01",        video: None, timestamp: 0, region: PoidsearCoast,       index: "3" },
];
