use std::collections::HashMap;

use serde::Deserialize;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {None,Red,Green,Blue,Cyan,Brown,Yellow,Magenta,Grey,White,Black}

impl Default for Colour {
    fn default() -> Colour {
        Colour::White
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Symbol {
    pub character: char,
    pub colour: Colour
}

impl Symbol {
    pub const fn new(character: char, colour: Colour) -> Symbol {
        Symbol { character, colour }
    }
}

/*
    A single entry of the terrain table, e.g "grass" -> '.', green, passable
 */
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TerrainDetails {
    // Filled in from the table key when the library is built
    #[serde(skip)]
    pub label: String,
    pub symbol: char,
    #[serde(default)]
    pub colour: Colour,
    pub description: String,
    pub passable: bool
}

impl TerrainDetails {
    pub fn get_symbol(&self) -> Symbol {
        Symbol::new(self.symbol, self.colour)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TerrainLibrary {
    terrain: HashMap<String, TerrainDetails>
}

impl TerrainLibrary {
    pub fn new(entries: HashMap<String, TerrainDetails>) -> TerrainLibrary {
        let terrain = entries.into_iter()
            .map(|(label, mut details)| {
                details.label = label.clone();
                (label, details)
            })
            .collect();
        TerrainLibrary { terrain }
    }

    pub fn get(&self, label: &str) -> Option<&TerrainDetails> {
        self.terrain.get(label)
    }

    // Unknown labels are treated as walls
    pub fn is_passable(&self, label: &str) -> bool {
        self.get(label).map(|t| t.passable).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.terrain.len()
    }
}
