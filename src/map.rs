pub mod position;
pub mod terrain;
pub mod objects;
pub mod map_view_areas;
pub mod viewport;

use crate::map::position::{Area, Position};

/*
    The fixed terrain grid, indexed as tiles[y][x] and holding terrain labels
 */
#[derive(Clone, Debug)]
pub struct Map {
    pub area : Area,
    pub tiles : Vec<Vec<String>>
}

impl Map {
    pub fn new(area: Area, tiles: Vec<Vec<String>>) -> Map {
        Map { area, tiles }
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    pub fn position_in_bounds(&self, position: Position) -> bool {
        self.area.contains_position(position)
    }

    pub fn get_label(&self, position: Position) -> Option<&str> {
        self.tiles.get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
            .map(|label| label.as_str())
    }
}
