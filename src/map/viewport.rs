use std::collections::HashMap;

use crate::config::theme::Theme;
use crate::map::map_view_areas::calculate_map_display_area;
use crate::map::objects::items::Item;
use crate::map::position::{Area, Position};
use crate::map::terrain::{Colour, Symbol, TerrainLibrary};
use crate::map::Map;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CellContent {
    Player,
    Item,
    Terrain,
    Blank
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportCell {
    pub symbol: String,
    pub colour: Colour,
    pub content: CellContent
}

impl ViewportCell {
    fn from_symbol(symbol: Symbol, content: CellContent) -> ViewportCell {
        ViewportCell { symbol: symbol.character.to_string(), colour: symbol.colour, content }
    }

    fn blank() -> ViewportCell {
        ViewportCell { symbol: String::from(" "), colour: Colour::None, content: CellContent::Blank }
    }
}

/*
    The visible part of the map, row by row.
    Joining the cells into text is left to whichever view draws it
 */
#[derive(Clone, Debug)]
pub struct Viewport {
    pub display_area: Area,
    pub rows: Vec<Vec<ViewportCell>>
}

impl Viewport {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }

    // Looks up the cell for a map co-ordinate, if it is visible
    pub fn cell_at(&self, global_position: Position) -> Option<&ViewportCell> {
        if !self.display_area.contains_position(global_position) {
            return None;
        }
        let local_x = (global_position.x - self.display_area.start_position.x) as usize;
        let local_y = (global_position.y - self.display_area.start_position.y) as usize;
        self.rows.get(local_y).and_then(|row| row.get(local_x))
    }

    #[cfg(test)]
    pub fn to_lines(&self) -> Vec<String> {
        self.rows.iter()
            .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect::<String>())
            .collect()
    }
}

/*
    Resolves what to show in each visible cell, highest priority first:
    1. The player
    2. An item on the ground (the first one found, should there be more than one)
    3. The terrain glyph
 */
pub fn render_viewport<'a, I>(map: &Map, terrain: &TerrainLibrary, player_position: Position, items: I,
                              view_width: u16, view_height: u16, theme: &Theme) -> Viewport
    where I: IntoIterator<Item = &'a Item> {
    let display_area = calculate_map_display_area(player_position, map.area, view_width, view_height);

    let mut item_positions: HashMap<Position, &Item> = HashMap::new();
    for item in items {
        item_positions.entry(item.get_position()).or_insert(item);
    }

    let start = display_area.start_position;
    let end_x = start.x + display_area.width;
    let end_y = start.y + display_area.height;

    let mut rows = Vec::with_capacity(display_area.height as usize);
    for y in start.y..end_y {
        let mut row = Vec::with_capacity(display_area.width as usize);
        for x in start.x..end_x {
            let position = Position::new(x, y);
            let cell = if position == player_position {
                ViewportCell::from_symbol(theme.player_symbol(), CellContent::Player)
            } else if let Some(item) = item_positions.get(&position) {
                let symbol = match theme.item_colour {
                    Some(colour) => Symbol::new(item.symbol.character, colour),
                    None => item.symbol
                };
                ViewportCell::from_symbol(symbol, CellContent::Item)
            } else {
                match map.get_label(position).and_then(|label| terrain.get(label)) {
                    Some(details) => ViewportCell::from_symbol(details.get_symbol(), CellContent::Terrain),
                    None => ViewportCell::blank()
                }
            };
            row.push(cell);
        }
        rows.push(row);
    }

    Viewport { display_area, rows }
}
