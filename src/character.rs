use crate::map::position::Position;

/*
    The player's presence on the map. Held items live in the level's item store
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    name : String,
    position: Position
}

impl Player {
    pub fn new(name: String, position: Position) -> Player {
        Player { name, position }
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use crate::character::Player;
    use crate::map::position::Position;

    #[test]
    fn test_set_position() {
        let mut player = Player::new(String::from("Test Player"), Position::new(1, 1));
        player.set_position(Position::new(2, 1));
        assert_eq!(Position::new(2, 1), player.get_position());
        assert_eq!("Test Player", player.get_name());
    }
}
