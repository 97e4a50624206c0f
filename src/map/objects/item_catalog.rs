use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::config::game_config::ItemPlacement;
use crate::error::errors::GameError;
use crate::map::objects::items::{Armor, Grenade, Item, ItemType, MeleeWeapon};
use crate::map::position::Position;
use crate::map::terrain::{Colour, Symbol};

fn default_rarity() -> String {
    String::from("Common")
}

/*
    The static attribute bundle an item is built from, keyed by name in items.json.
    Only the fields relevant to the category are read, the rest are ignored.
 */
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ItemTemplate {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub value: f32,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default)]
    pub symbol: Option<char>,
    #[serde(default)]
    pub colour: Option<Colour>,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub armor_class: Option<i32>,
    #[serde(default)]
    pub explosive_power: Option<i32>
}

impl ItemTemplate {
    /*
        Checks what serde can't: a non-empty name and a non-negative weight and value
     */
    pub fn validate(&self, key: &str) -> Result<(), GameError> {
        let invalid = |reason: String| -> Result<(), GameError> {
            Err(GameError::InvalidItemTemplate { key: key.to_string(), reason })
        };
        if self.name.trim().is_empty() {
            return invalid(String::from("name is empty"));
        }
        if self.weight < 0.0 {
            return invalid(format!("weight {} is negative", self.weight));
        }
        if self.value < 0.0 {
            return invalid(format!("value {} is negative", self.value));
        }
        Ok(())
    }

    pub fn build_item_type(&self) -> ItemType {
        let category = self.category.as_deref()
            .map(|c| c.trim().to_lowercase().replace('-', "_"))
            .unwrap_or_default();

        match category.as_str() {
            "melee_weapon" | "weapon" => {
                ItemType::MeleeWeapon(MeleeWeapon {
                    damage: self.damage.clone().unwrap_or_else(|| String::from("1")),
                    damage_type: self.damage_type.clone().unwrap_or_else(|| String::from("blunt"))
                })
            },
            "armor" | "armour" => {
                ItemType::Armor(Armor { armor_class: self.armor_class.unwrap_or(0) })
            },
            "potion" => ItemType::Potion,
            "grenade" => {
                ItemType::Grenade(Grenade { explosive_power: self.explosive_power.unwrap_or(0) })
            },
            _ => ItemType::Generic
        }
    }
}

fn parse_item_template(key: &str, entry: Value) -> Result<ItemTemplate, GameError> {
    let template: ItemTemplate = serde_json::from_value(entry)
        .map_err(|e| GameError::InvalidItemTemplate { key: key.to_string(), reason: e.to_string() })?;
    template.validate(key)?;
    Ok(template)
}

/*
    Builds the template table from the raw items.json entries.
    A malformed or invalid entry is logged and left out, placements using it are dropped later as not found
 */
pub fn build_item_templates(entries: HashMap<String, Value>) -> HashMap<String, ItemTemplate> {
    entries.into_iter()
        .filter_map(|(key, entry)| {
            match parse_item_template(&key, entry) {
                Ok(template) => Some((key, template)),
                Err(e) => {
                    warn!("Skipping item template: {}", e);
                    None
                }
            }
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    templates: HashMap<String, ItemTemplate>
}

impl ItemCatalog {
    pub fn new(templates: HashMap<String, ItemTemplate>) -> ItemCatalog {
        ItemCatalog { templates }
    }

    pub fn get_template(&self, key: &str) -> Option<&ItemTemplate> {
        self.templates.get(key)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /*
        Builds the typed item for the given template key, placed at x,y.
        Coordinates are stored as given, bounds checking is left to the caller.
     */
    pub fn create_item(&self, key: &str, x: u16, y: u16) -> Result<Item, GameError> {
        let template = self.get_template(key)
            .ok_or_else(|| GameError::ItemNotFound(key.to_string()))?;

        let item_type = template.build_item_type();
        let mut item = Item::new(item_type, template.name.clone(), template.description.clone(),
                                 template.weight, template.value, template.rarity.clone(), Position::new(x, y));

        if template.symbol.is_some() || template.colour.is_some() {
            let character = template.symbol.unwrap_or(item.symbol.character);
            let colour = template.colour.unwrap_or(item.symbol.colour);
            item = item.with_symbol(Symbol::new(character, colour));
        }

        debug!("Created item {} ({})", item.get_identity(), item.item_type.name());
        Ok(item)
    }

    /*
        Builds every placement, dropping (and logging) any that refer to a missing template
     */
    pub fn create_placements(&self, placements: &[ItemPlacement]) -> Vec<Item> {
        placements.iter()
            .filter_map(|placement| {
                match self.create_item(&placement.key, placement.x, placement.y) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!("Skipping item placement at {},{}: {}", placement.x, placement.y, e);
                        None
                    }
                }
            })
            .collect()
    }
}
