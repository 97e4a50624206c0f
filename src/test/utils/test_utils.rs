use std::collections::HashMap;

use ratatui::buffer::Buffer;

use crate::character::Player;
use crate::engine::item_store::ItemStore;
use crate::engine::level::Level;
use crate::map::objects::item_catalog::{ItemCatalog, ItemTemplate};
use crate::map::position::{build_rectangular_area, Position};
use crate::map::terrain::{TerrainDetails, TerrainLibrary};
use crate::map::Map;

pub const TEST_TERRAIN_JSON: &str = r##"{
    "grass": { "symbol": ".", "colour": "green", "description": "Soft green grass.", "passable": true },
    "wall": { "symbol": "#", "colour": "brown", "description": "A solid stone wall.", "passable": false },
    "water": { "symbol": "~", "colour": "blue", "description": "Deep, dark water.", "passable": false }
}"##;

pub const TEST_ITEMS_JSON: &str = r#"{
    "Sword": { "name": "Sword", "category": "melee_weapon", "description": "A short steel blade.",
               "weight": 3.0, "value": 15.0, "rarity": "Common", "damage": "2-6", "damage_type": "slashing" },
    "Leather Armor": { "name": "Leather Armor", "category": "armor", "description": "Stiff boiled leather.",
                       "weight": 8.0, "value": 20.0, "rarity": "Common", "armor_class": 2 },
    "Health Potion": { "name": "Health Potion", "category": "potion", "description": "A small red vial.",
                       "weight": 0.5, "value": 10.0, "rarity": "Uncommon" },
    "Grenade": { "name": "Grenade", "category": "grenade", "description": "Handle with care.",
                 "weight": 1.0, "value": 25.0, "rarity": "Rare", "explosive_power": 10 },
    "Rope": { "name": "Rope", "description": "Fifty feet of hemp.", "weight": 2.0, "value": 1.0 },
    "Strange Idol": { "name": "Strange Idol", "category": "relic", "description": "It hums quietly.",
                      "weight": 4.0, "value": 100.0, "rarity": "Legendary", "symbol": "&" }
}"#;

pub fn build_test_terrain_library() -> TerrainLibrary {
    let entries: HashMap<String, TerrainDetails> = serde_json::from_str(TEST_TERRAIN_JSON)
        .expect("Test terrain JSON should parse");
    TerrainLibrary::new(entries)
}

pub fn build_test_item_catalog() -> ItemCatalog {
    let templates: HashMap<String, ItemTemplate> = serde_json::from_str(TEST_ITEMS_JSON)
        .expect("Test item JSON should parse");
    ItemCatalog::new(templates)
}

pub fn build_test_map(width: u16, height: u16, label: &str) -> Map {
    let tiles = (0..height)
        .map(|_| (0..width).map(|_| label.to_string()).collect())
        .collect();
    Map::new(build_rectangular_area(Position::zero(), width, height), tiles)
}

/*
    Builds a level with the test terrain and catalog, placing each (template key, x, y)
 */
pub fn build_test_level(map: Map, player_position: Position, placements: Vec<(&str, u16, u16)>) -> Level {
    let catalog = build_test_item_catalog();
    let items = placements.iter()
        .map(|(key, x, y)| catalog.create_item(key, *x, *y).expect("Test item template should exist"))
        .collect();
    let player = Player::new(String::from("Test Player"), player_position);
    Level::new(map, build_test_terrain_library(), player, ItemStore::from_world_items(items))
}

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| (area.x..area.x + area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect::<String>())
        .collect()
}
