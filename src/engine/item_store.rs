use std::collections::HashMap;

use log::warn;
use uuid::Uuid;

use crate::map::objects::items::Item;
use crate::map::position::Position;

#[cfg(test)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ItemLocation {
    World,
    Inventory
}

/*
    Owns every item in the level.
    Each id appears in exactly one of the two ordered index lists:
    - world: items lying on the map, in placement order
    - held: items the player has picked up, in pickup order
 */
#[derive(Clone, Debug, Default)]
pub struct ItemStore {
    items: HashMap<Uuid, Item>,
    world: Vec<Uuid>,
    held: Vec<Uuid>
}

impl ItemStore {
    pub fn new() -> ItemStore {
        ItemStore::default()
    }

    pub fn from_world_items(items: Vec<Item>) -> ItemStore {
        let mut store = ItemStore::new();
        for item in items {
            store.place(item);
        }
        store
    }

    /*
        Puts an item on the map. Returns false (and drops it) if an item with the same id already exists,
        i.e the same name at the same position
     */
    pub fn place(&mut self, item: Item) -> bool {
        let id = item.get_id();
        if self.items.contains_key(&id) {
            warn!("Duplicate item {} ignored", item.get_identity());
            return false;
        }
        self.items.insert(id, item);
        self.world.push(id);
        true
    }

    #[cfg(test)]
    pub fn location(&self, id: &Uuid) -> Option<ItemLocation> {
        if self.world.contains(id) {
            Some(ItemLocation::World)
        } else if self.held.contains(id) {
            Some(ItemLocation::Inventory)
        } else {
            None
        }
    }

    pub fn world_items(&self) -> Vec<&Item> {
        self.world.iter().filter_map(|id| self.items.get(id)).collect()
    }

    pub fn held_items(&self) -> Vec<&Item> {
        self.held.iter().filter_map(|id| self.items.get(id)).collect()
    }

    // The first world item (in placement order) at the given position
    pub fn find_world_item_at(&self, position: Position) -> Option<&Item> {
        self.world.iter()
            .filter_map(|id| self.items.get(id))
            .find(|item| item.get_position() == position)
    }

    /*
        Moves an item from the world to the end of the held list.
        Returns None if the item isn't currently in the world
     */
    pub fn take(&mut self, id: &Uuid) -> Option<&Item> {
        let index = self.world.iter().position(|world_id| world_id == id)?;
        let taken = self.world.remove(index);
        self.held.push(taken);
        self.items.get(&taken)
    }

    pub fn world_count(&self) -> usize {
        self.world.len()
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    pub fn held_weight(&self) -> f32 {
        // Starts from +0.0, an empty f32 sum() gives -0.0
        self.held_items().iter().fold(0.0, |total, item| total + item.get_weight())
    }
}
