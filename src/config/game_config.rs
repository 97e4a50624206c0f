use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::theme::Theme;
use crate::error::errors::GameError;
use crate::map::objects::item_catalog::{build_item_templates, ItemTemplate};
use crate::map::position::Position;
use crate::map::terrain::TerrainDetails;

pub const MAP_FILE : &str = "map.json";
pub const ITEMS_FILE : &str = "items.json";
pub const TERRAIN_FILE : &str = "terrain.json";
pub const THEME_FILE : &str = "theme.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ItemPlacement {
    pub key: String,
    pub x: u16,
    pub y: u16
}

#[derive(Clone, Debug, Deserialize)]
pub struct MapConfig {
    pub width: u16,
    pub height: u16,
    pub player_start: Position,
    pub tiles: Vec<Vec<String>>,
    #[serde(default)]
    pub items: Vec<ItemPlacement>
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub map: MapConfig,
    pub item_templates: HashMap<String, ItemTemplate>,
    pub terrain: HashMap<String, TerrainDetails>,
    pub theme: Theme
}

fn parse_json<T: DeserializeOwned>(name: &str, input: &str) -> Result<T, GameError> {
    serde_json::from_str(input).map_err(|source| GameError::Json { path: name.to_string(), source })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, GameError> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| GameError::Json { path: path.display().to_string(), source })
}

/*
    Reads map.json, items.json and terrain.json (plus theme.json if present) from the given directory.
    Any structural problem with the map is fatal
 */
pub fn load_game_config(config_dir: &Path) -> Result<GameConfig, GameError> {
    info!("Loading game config from: {}", config_dir.display());
    let map: MapConfig = read_json(&config_dir.join(MAP_FILE))?;
    let item_entries: HashMap<String, Value> = read_json(&config_dir.join(ITEMS_FILE))?;
    let item_templates = build_item_templates(item_entries);
    let terrain: HashMap<String, TerrainDetails> = read_json(&config_dir.join(TERRAIN_FILE))?;

    let theme_path = config_dir.join(THEME_FILE);
    let theme = if theme_path.exists() {
        read_json(&theme_path)?
    } else {
        info!("No {} found, using the default theme", THEME_FILE);
        Theme::default()
    };

    let config = GameConfig { map, item_templates, terrain, theme };
    config.validate()?;
    info!("Loaded a {}x{} map with {} item placements, {} item templates and {} terrain types",
          config.map.width, config.map.height, config.map.items.len(), config.item_templates.len(), config.terrain.len());
    Ok(config)
}

pub fn parse_game_config(map: &str, items: &str, terrain: &str, theme: Option<&str>) -> Result<GameConfig, GameError> {
    let theme = match theme {
        Some(t) => parse_json(THEME_FILE, t)?,
        None => Theme::default()
    };
    let config = GameConfig {
        map: parse_json(MAP_FILE, map)?,
        item_templates: build_item_templates(parse_json(ITEMS_FILE, items)?),
        terrain: parse_json(TERRAIN_FILE, terrain)?,
        theme
    };
    config.validate()?;
    Ok(config)
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let map = &self.map;
        if map.width == 0 || map.height == 0 {
            return Err(GameError::invalid_map(format!("map must be at least 1x1, got {}x{}", map.width, map.height)));
        }

        if map.tiles.len() != map.height as usize {
            return Err(GameError::invalid_map(format!("expected {} rows of tiles, found {}", map.height, map.tiles.len())));
        }

        for (y, row) in map.tiles.iter().enumerate() {
            if row.len() != map.width as usize {
                return Err(GameError::invalid_map(format!("row {} has {} tiles, expected {}", y, row.len(), map.width)));
            }
            for (x, label) in row.iter().enumerate() {
                if !self.terrain.contains_key(label) {
                    return Err(GameError::UnknownTerrain { label: label.clone(), x: x as u16, y: y as u16 });
                }
            }
        }

        let start = map.player_start;
        if start.x >= map.width || start.y >= map.height {
            return Err(GameError::invalid_map(format!("player start {},{} is outside the {}x{} map", start.x, start.y, map.width, map.height)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::config::game_config::{load_game_config, parse_game_config};
    use crate::error::errors::GameError;
    use crate::map::position::Position;
    use crate::test::utils::test_utils::{TEST_ITEMS_JSON, TEST_TERRAIN_JSON};

    const MAP_JSON: &str = r#"{
        "width": 3,
        "height": 2,
        "player_start": { "x": 0, "y": 1 },
        "tiles": [["grass", "grass", "wall"], ["grass", "water", "grass"]],
        "items": [{ "key": "Sword", "x": 2, "y": 1 }]
    }"#;

    #[test]
    fn test_parse_game_config() {
        let config = parse_game_config(MAP_JSON, TEST_ITEMS_JSON, TEST_TERRAIN_JSON, None).unwrap();
        assert_eq!(3, config.map.width);
        assert_eq!(Position::new(0, 1), config.map.player_start);
        assert_eq!(1, config.map.items.len());
        assert_eq!("Sword", config.map.items[0].key);
        assert!(config.item_templates.contains_key("Sword"));
        assert_eq!(3, config.terrain.len());
    }

    #[test]
    fn test_unknown_terrain_is_fatal() {
        let map_json = MAP_JSON.replace("\"water\"", "\"lava\"");
        let result = parse_game_config(&map_json, TEST_ITEMS_JSON, TEST_TERRAIN_JSON, None);
        match result {
            Err(GameError::UnknownTerrain { label, x, y }) => {
                assert_eq!("lava", label);
                assert_eq!(1, x);
                assert_eq!(1, y);
            },
            other => panic!("Expected an unknown terrain error, got {:?}", other)
        }
    }

    #[test]
    fn test_row_width_mismatch_is_fatal() {
        let map_json = MAP_JSON.replace("[\"grass\", \"grass\", \"wall\"]", "[\"grass\", \"grass\"]");
        let result = parse_game_config(&map_json, TEST_ITEMS_JSON, TEST_TERRAIN_JSON, None);
        assert!(matches!(result, Err(GameError::InvalidMap(_))));
    }

    #[test]
    fn test_player_start_out_of_bounds_is_fatal() {
        let map_json = MAP_JSON.replace("{ \"x\": 0, \"y\": 1 }", "{ \"x\": 5, \"y\": 1 }");
        let result = parse_game_config(&map_json, TEST_ITEMS_JSON, TEST_TERRAIN_JSON, None);
        assert!(matches!(result, Err(GameError::InvalidMap(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_game_config("{ not json", TEST_ITEMS_JSON, TEST_TERRAIN_JSON, None);
        assert!(matches!(result, Err(GameError::Json { ref path, .. }) if path == "map.json"));
    }

    #[test]
    fn test_load_bundled_resources() {
        let config = load_game_config(Path::new("resources")).unwrap();
        assert_eq!(48, config.map.width);
        assert_eq!(24, config.map.height);
        assert_eq!(Position::new(11, 12), config.map.player_start);
        assert!(config.map.items.iter().all(|placement| config.item_templates.contains_key(&placement.key)));
        assert_eq!('@', config.theme.player_character);
    }

    #[test]
    fn test_missing_config_dir() {
        let result = load_game_config(Path::new("no-such-config-dir"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[test]
    fn test_malformed_item_entry_is_not_fatal() {
        // GIVEN a Sword placement and an items.json entry with a mistyped weight
        let items_json = r#"{
            "Sword": { "name": "Sword", "category": "melee_weapon", "weight": 3.0, "value": 15.0 },
            "Broken": { "name": "Broken", "category": "potion", "weight": "heavy" }
        }"#;

        // WHEN we parse the config
        let config = parse_game_config(MAP_JSON, items_json, TEST_TERRAIN_JSON, None).unwrap();

        // THEN only the broken entry is lost
        assert_eq!(1, config.item_templates.len());
        assert!(config.item_templates.contains_key("Sword"));
        assert_eq!(1, config.map.items.len());
    }
}
