pub mod items {
    use crate::items::item::{Item, ItemType, Rarity};

    pub fn sword() -> Item {
        Item {
            name: "Sword".to_string(),
            description: "A plain arming sword.".to_string(),
            icon: "icons/sword.png".to_string(),
            weight: 3.0,
            rarity: Rarity::Normal,
            kind: ItemType::Weapon,
            ..Default::default()
        }
    }

    pub fn runed_axe() -> Item {
        Item {
            name: "Runed Axe".to_string(),
            description: "An axe etched with glowing runes.".to_string(),
            icon: "icons/runed_axe.png".to_string(),
            weight: 5.5,
            rarity: Rarity::Rare,
            kind: ItemType::Weapon,
            ..Default::default()
        }
    }

    pub fn moon_blade() -> Item {
        Item {
            name: "Moon Blade".to_string(),
            description: "A curved blade that hums under moonlight.".to_string(),
            icon: "icons/moon_blade.png".to_string(),
            weight: 2.5,
            rarity: Rarity::Rare,
            kind: ItemType::Weapon,
            ..Default::default()
        }
    }

    pub fn brass_key() -> Item {
        Item {
            name: "Brass Key".to_string(),
            description: "Opens one door somewhere.".to_string(),
            icon: "icons/brass_key.png".to_string(),
            weight: 0.1,
            rarity: Rarity::Normal,
            kind: ItemType::Key,
            ..Default::default()
        }
    }

    pub fn health_potion() -> Item {
        Item {
            name: "Health Potion".to_string(),
            description: "Restores a little health.".to_string(),
            icon: "icons/health_potion.png".to_string(),
            max_stack: 10,
            weight: 0.5,
            rarity: Rarity::Uncommon,
            kind: ItemType::Consumable,
            ..Default::default()
        }
    }

    pub fn dragon_plate() -> Item {
        Item {
            name: "Dragon Plate".to_string(),
            description: "Armor forged from dragon scales.".to_string(),
            icon: "icons/dragon_plate.png".to_string(),
            weight: 25.0,
            rarity: Rarity::Legendary,
            kind: ItemType::Equipment,
            ..Default::default()
        }
    }
}

pub mod databases {
    use crate::db::database::ItemDatabase;

    use super::items;

    /// A small catalog covering several types and rarities, with uniform
    /// rarity weights.
    pub fn armory() -> ItemDatabase {
        ItemDatabase::new(
            vec![
                items::sword(),
                items::runed_axe(),
                items::moon_blade(),
                items::brass_key(),
                items::health_potion(),
                items::dragon_plate(),
            ],
            vec![1.0, 1.0, 1.0, 1.0, 1.0],
        )
        .expect("fixture ids are unique")
    }

    /// Weapons only, with all probability mass on Rare.
    pub fn rare_weapons_only() -> ItemDatabase {
        ItemDatabase::new(
            vec![items::sword(), items::runed_axe(), items::moon_blade()],
            vec![0.0, 0.0, 1.0, 0.0, 0.0],
        )
        .expect("fixture ids are unique")
    }
}
