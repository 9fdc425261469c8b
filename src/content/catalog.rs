//! Base catalogs - Attribute definitions and the monsters shared by all maps
//!
//! Map content introduced with a map (see `MapSpec::new_monsters`) is not
//! listed here; it joins the catalog while its map is initialized.

use tracing::info;

use crate::application::dto::MonsterSpec;
use crate::application::ports::outbound::EntityContext;
use crate::application::services::{CatalogIndex, MonsterBuilder, SeedError};
use crate::domain::aggregates::GameConfiguration;
use crate::domain::entities::MonsterKind;
use crate::domain::value_objects::stats;

/// Combat stats in catalog order: level, health, damage range, defense, attack and defense rate
macro_rules! combat {
    ($level:expr, $health:expr, $min:expr, $max:expr, $defense:expr, $attack_rate:expr, $defense_rate:expr) => {
        &[
            ($crate::domain::value_objects::stats::LEVEL, $level as f32),
            ($crate::domain::value_objects::stats::MAXIMUM_HEALTH, $health as f32),
            ($crate::domain::value_objects::stats::MINIMUM_PHYSICAL_DAMAGE, $min as f32),
            ($crate::domain::value_objects::stats::MAXIMUM_PHYSICAL_DAMAGE, $max as f32),
            ($crate::domain::value_objects::stats::DEFENSE_BASE, $defense as f32),
            ($crate::domain::value_objects::stats::ATTACK_RATE, $attack_rate as f32),
            ($crate::domain::value_objects::stats::DEFENSE_RATE, $defense_rate as f32),
        ]
    };
}
pub(crate) use combat;

pub const BASE_MONSTERS: &[MonsterSpec] = &[
    // Lorencia
    MonsterSpec::monster(0, "Bull Fighter", combat!(6, 100, 16, 20, 6, 28, 6)),
    MonsterSpec::monster(1, "Hound", combat!(9, 140, 22, 27, 9, 39, 9)),
    MonsterSpec::monster(2, "Budge Dragon", combat!(4, 60, 10, 13, 3, 18, 3)),
    MonsterSpec::monster(3, "Spider", combat!(2, 30, 4, 7, 1, 8, 1)),
    MonsterSpec::monster(4, "Elite Bull Fighter", combat!(12, 190, 31, 36, 12, 50, 12)),
    MonsterSpec::monster(6, "Lich", combat!(14, 255, 41, 46, 14, 62, 14)),
    MonsterSpec::monster(7, "Giant", combat!(17, 400, 57, 62, 18, 80, 18)),
    MonsterSpec::monster(14, "Skeleton Warrior", combat!(19, 525, 68, 74, 22, 93, 22)),
    // Dungeon
    MonsterSpec::monster(5, "Hell Hound", combat!(38, 1400, 130, 150, 55, 165, 55)),
    MonsterSpec::monster(8, "Poison Bull", combat!(46, 2500, 185, 200, 75, 225, 75)),
    MonsterSpec::monster(9, "Thunder Lich", combat!(44, 2200, 165, 180, 70, 205, 70)),
    MonsterSpec::monster(10, "Dark Knight", combat!(42, 2000, 155, 165, 65, 190, 65)),
    MonsterSpec::monster(11, "Ghost", combat!(32, 920, 105, 115, 42, 135, 42)),
    MonsterSpec::monster(12, "Larva", combat!(25, 750, 80, 90, 30, 110, 30)),
    MonsterSpec::monster(13, "Hell Spider", combat!(40, 1600, 140, 155, 60, 180, 60)),
    MonsterSpec::monster(15, "Skeleton Archer", combat!(34, 1050, 115, 125, 45, 145, 45)),
    MonsterSpec::monster(16, "Elite Skeleton", combat!(36, 1200, 125, 135, 50, 155, 50)),
    MonsterSpec::monster(17, "Cyclops", combat!(28, 850, 90, 100, 35, 120, 35)),
    MonsterSpec::monster(18, "Gorgon", combat!(55, 6000, 260, 290, 100, 320, 100)),
    // Devias
    MonsterSpec::monster(19, "Yeti", combat!(30, 900, 100, 110, 37, 130, 37)),
    MonsterSpec::monster(20, "Elite Yeti", combat!(36, 1200, 120, 130, 50, 155, 50)),
    MonsterSpec::monster(21, "Assassin", combat!(26, 800, 85, 95, 33, 115, 33)),
    MonsterSpec::monster(22, "Ice Monster", combat!(22, 650, 75, 80, 27, 100, 27)),
    MonsterSpec::monster(23, "Hommerd", combat!(24, 700, 80, 85, 29, 105, 29)),
    MonsterSpec::monster(24, "Worm", combat!(20, 600, 70, 75, 25, 95, 25)),
    MonsterSpec::monster(25, "Ice Queen", combat!(52, 4000, 155, 175, 90, 260, 90)),
    // Noria
    MonsterSpec::monster(26, "Goblin", combat!(3, 45, 7, 10, 2, 13, 2)),
    MonsterSpec::monster(27, "Chain Scorpion", combat!(5, 80, 13, 17, 4, 23, 4)),
    MonsterSpec::monster(28, "Beetle Monster", combat!(10, 165, 26, 31, 10, 44, 10)),
    MonsterSpec::monster(29, "Hunter", combat!(13, 220, 36, 41, 13, 56, 13)),
    MonsterSpec::monster(30, "Forest Monster", combat!(15, 295, 46, 51, 15, 68, 15)),
    MonsterSpec::monster(31, "Agon", combat!(16, 340, 51, 57, 16, 74, 16)),
    MonsterSpec::monster(32, "Stone Golem", combat!(18, 465, 62, 68, 20, 86, 20)),
    // Lost Tower
    MonsterSpec::monster(34, "Cursed Wizard", combat!(54, 4000, 200, 210, 95, 280, 95)),
    MonsterSpec::monster(35, "Death Gorgon", combat!(64, 6000, 300, 330, 130, 400, 130)),
    MonsterSpec::monster(36, "Shadow", combat!(47, 2800, 180, 195, 80, 230, 80)),
    MonsterSpec::monster(37, "Devil", combat!(60, 5000, 270, 290, 115, 350, 115)),
    MonsterSpec::monster(38, "Balrog", combat!(66, 9000, 350, 400, 150, 450, 150)),
    MonsterSpec::monster(39, "Poison Shadow", combat!(50, 3500, 210, 230, 85, 255, 85)),
    MonsterSpec::monster(40, "Death Knight", combat!(62, 5500, 285, 305, 125, 380, 125)),
    MonsterSpec::monster(41, "Death Cow", combat!(57, 4500, 245, 265, 105, 330, 105)),
    // Atlans
    MonsterSpec::monster(45, "Bahamut", combat!(43, 2000, 150, 165, 68, 200, 68)),
    MonsterSpec::monster(46, "Vepar", combat!(45, 2300, 170, 185, 72, 215, 72)),
    MonsterSpec::monster(47, "Valkyrie", combat!(46, 2500, 175, 190, 75, 220, 75)),
    MonsterSpec::monster(48, "Lizard King", combat!(58, 5000, 255, 275, 110, 340, 110)),
    MonsterSpec::monster(49, "Hydra", combat!(74, 12000, 450, 500, 180, 520, 180)),
    MonsterSpec::monster(50, "Sea Worm", combat!(48, 3000, 190, 205, 80, 235, 80)),
    MonsterSpec::monster(51, "Great Bahamut", combat!(53, 3900, 230, 250, 92, 270, 92)),
    MonsterSpec::monster(52, "Silver Valkyrie", combat!(56, 4400, 240, 260, 102, 310, 102)),
    // Tarkan
    MonsterSpec::monster(57, "Iron Wheel", combat!(70, 9000, 370, 400, 170, 480, 170)),
    MonsterSpec::monster(58, "Tantallos", combat!(83, 17000, 550, 600, 230, 600, 230)),
    MonsterSpec::monster(59, "Zaikan", combat!(90, 21000, 620, 680, 260, 660, 260)),
    MonsterSpec::monster(60, "Bloody Wolf", combat!(76, 12500, 470, 510, 190, 540, 190)),
    MonsterSpec::monster(61, "Beam Knight", combat!(84, 18000, 560, 610, 240, 610, 240)),
    MonsterSpec::monster(62, "Mutant", combat!(72, 10000, 400, 430, 175, 500, 175)),
    // Traps
    MonsterSpec::npc(100, "Lance", MonsterKind::Trap),
    MonsterSpec::npc(101, "Iron Stick", MonsterKind::Trap),
    MonsterSpec::npc(102, "Fire", MonsterKind::Trap),
    MonsterSpec::npc(103, "Meteorite", MonsterKind::Trap),
    // Town guards and merchants
    MonsterSpec::npc(229, "Marlon", MonsterKind::Npc),
    MonsterSpec::npc(232, "Archangel", MonsterKind::Npc),
    MonsterSpec::npc(233, "Messenger of Archangel", MonsterKind::Npc),
    MonsterSpec::npc(238, "Chaos Goblin", MonsterKind::Npc),
    MonsterSpec::npc(240, "Safety Guard", MonsterKind::Guard),
    MonsterSpec::npc(242, "Elf Lala", MonsterKind::Npc),
    MonsterSpec::npc(243, "Eo the Craftsman", MonsterKind::Npc),
    MonsterSpec::npc(244, "Caren the Barmaid", MonsterKind::Npc),
    MonsterSpec::npc(245, "Izabel the Wizard", MonsterKind::Npc),
    MonsterSpec::npc(246, "Zienna the Weapons Merchant", MonsterKind::Npc),
    MonsterSpec::npc(247, "Guard", MonsterKind::Guard),
    MonsterSpec::npc(248, "Wandering Merchant", MonsterKind::Npc),
    MonsterSpec::npc(249, "Berdysh Guard", MonsterKind::Guard),
    MonsterSpec::npc(250, "Weapon Merchant", MonsterKind::Npc),
    MonsterSpec::npc(251, "Hanzo the Blacksmith", MonsterKind::Npc),
    MonsterSpec::npc(253, "Potion Girl Amy", MonsterKind::Npc),
    MonsterSpec::npc(254, "Pasi the Mage", MonsterKind::Npc),
    MonsterSpec::npc(255, "Lumen the Barmaid", MonsterKind::Npc),
];

/// Counts of catalog entries created by [`populate_catalogs`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub attributes: usize,
    pub monsters: usize,
}

/// Fill the attribute and monster catalogs with the base content
///
/// Entries already present are kept, so populating an already seeded
/// configuration creates nothing.
pub fn populate_catalogs<C: EntityContext>(
    entities: &mut C,
    configuration: &mut GameConfiguration,
) -> Result<CatalogSummary, SeedError> {
    let attributes_before = configuration.attributes().len();
    let mut catalog = CatalogIndex::build(configuration);

    for (designation, description) in stats::ATTRIBUTE_CATALOG {
        MonsterBuilder::ensure_attribute(entities, configuration, &mut catalog, designation, description)?;
    }

    let mut monsters = 0;
    for monster in BASE_MONSTERS {
        if catalog.contains_monster(monster.number) {
            continue;
        }
        MonsterBuilder::create_monster(entities, configuration, &mut catalog, monster)?;
        monsters += 1;
    }

    let summary = CatalogSummary {
        attributes: configuration.attributes().len() - attributes_before,
        monsters,
    };
    info!(
        attributes = summary.attributes,
        monsters = summary.monsters,
        "Populated base catalogs"
    );
    Ok(summary)
}
