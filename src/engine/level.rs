use log::{debug, info};

use crate::character::Player;
use crate::config::game_config::GameConfig;
use crate::config::theme::Theme;
use crate::engine::item_store::ItemStore;
use crate::map::objects::item_catalog::ItemCatalog;
use crate::map::objects::items::Item;
use crate::map::position::{build_rectangular_area, Position, Side};
use crate::map::terrain::TerrainLibrary;
use crate::map::viewport::{render_viewport, Viewport};
use crate::map::Map;

const UNKNOWN_TERRAIN_DESCRIPTION : &str = "You can't make out what is here.";

#[derive(Clone, Debug, PartialEq)]
pub enum BlockReason {
    OutOfBounds,
    // Holds the description of the terrain in the way
    Impassable(String)
}

#[derive(Clone, Debug, PartialEq)]
pub enum MoveResult {
    Moved(Position),
    Blocked(BlockReason)
}

#[derive(Clone, Debug, PartialEq)]
pub enum PickUpResult {
    PickedUp(Item),
    NothingHere
}

/*
    All of the state for a single game session: the terrain, the player and every item
 */
#[derive(Clone, Debug)]
pub struct Level {
    map : Map,
    terrain : TerrainLibrary,
    player : Player,
    items : ItemStore
}

impl Level {
    pub fn new(map: Map, terrain: TerrainLibrary, player: Player, items: ItemStore) -> Level {
        Level { map, terrain, player, items }
    }

    /*
        Builds the level from an already validated config.
        Placements referring to unknown item templates are dropped
     */
    pub fn from_config(config: &GameConfig, player_name: String) -> Level {
        let map_config = &config.map;
        let area = build_rectangular_area(Position::zero(), map_config.width, map_config.height);
        let map = Map::new(area, map_config.tiles.clone());
        let terrain = TerrainLibrary::new(config.terrain.clone());

        let catalog = ItemCatalog::new(config.item_templates.clone());
        let world_items = catalog.create_placements(&map_config.items);
        let items = ItemStore::from_world_items(world_items);
        info!("Level built with {} of {} item placements", items.world_count(), map_config.items.len());

        let player = Player::new(player_name, map_config.player_start);
        Level::new(map, terrain, player, items)
    }

    pub fn get_map(&self) -> &Map {
        &self.map
    }

    pub fn get_player(&self) -> &Player {
        &self.player
    }

    pub fn get_items(&self) -> &ItemStore {
        &self.items
    }

    /*
        True if the position is on the map and its terrain can be walked on
     */
    pub fn is_passable(&self, position: Position) -> bool {
        if !self.map.position_in_bounds(position) {
            return false;
        }
        self.map.get_label(position)
            .map(|label| self.terrain.is_passable(label))
            .unwrap_or(false)
    }

    pub fn move_player(&mut self, side: Side) -> MoveResult {
        let current = self.player.get_position();
        let target = match current.step(side) {
            Some(p) if self.map.position_in_bounds(p) => p,
            _ => {
                debug!("Player can't move {} from {},{}: edge of the map", side.name(), current.x, current.y);
                return MoveResult::Blocked(BlockReason::OutOfBounds);
            }
        };

        if !self.is_passable(target) {
            let description = self.describe_terrain(target);
            debug!("Player can't move {} into {},{}: impassable", side.name(), target.x, target.y);
            return MoveResult::Blocked(BlockReason::Impassable(description));
        }

        self.player.set_position(target);
        debug!("Player moved {} to {},{}", side.name(), target.x, target.y);
        MoveResult::Moved(target)
    }

    pub fn pick_up(&mut self) -> PickUpResult {
        let id = match self.item_under_player() {
            Some(item) => item.get_id(),
            None => return PickUpResult::NothingHere
        };

        match self.items.take(&id) {
            Some(item) => {
                info!("Player picked up {}", item.get_identity());
                PickUpResult::PickedUp(item.clone())
            },
            None => PickUpResult::NothingHere
        }
    }

    fn describe_terrain(&self, position: Position) -> String {
        self.map.get_label(position)
            .and_then(|label| self.terrain.get(label))
            .map(|details| details.description.clone())
            .unwrap_or_else(|| String::from(UNKNOWN_TERRAIN_DESCRIPTION))
    }

    pub fn terrain_under_player(&self) -> String {
        self.describe_terrain(self.player.get_position())
    }

    pub fn item_under_player(&self) -> Option<&Item> {
        self.items.find_world_item_at(self.player.get_position())
    }

    pub fn get_inventory(&self) -> Vec<&Item> {
        self.items.held_items()
    }

    pub fn total_inventory_weight(&self) -> f32 {
        self.items.held_weight()
    }

    pub fn render_viewport(&self, view_width: u16, view_height: u16, theme: &Theme) -> Viewport {
        render_viewport(&self.map, &self.terrain, self.player.get_position(), self.items.world_items(),
                        view_width, view_height, theme)
    }
}
