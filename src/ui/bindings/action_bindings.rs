use std::collections::HashMap;

use termion::event::Key;

use crate::map::position::Side;
use crate::ui::bindings::input_bindings::{describe_key, key_to_side, KeyBindings};

/*
  An Action that the Player can take
 */
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Move(Side),
    PickUp,
    ShowInventory,
    ShowHelp,
    Quit
}

impl Action {
    pub fn describe(&self) -> String {
        match self {
            Action::Move(side) => format!("Move {}", side.name()),
            Action::PickUp => String::from("Pick up an item"),
            Action::ShowInventory => String::from("Show inventory"),
            Action::ShowHelp => String::from("Show this help"),
            Action::Quit => String::from("Quit")
        }
    }
}

pub struct ActionKeyBindings {
   pub bindings : HashMap<Key, Action>
}

impl KeyBindings<Action> for ActionKeyBindings {
    fn get_bindings(&self) -> &HashMap<Key, Action> {
       &self.bindings
    }

    fn get_input(&self, key: Key) -> Option<&Action> {
        self.get_bindings().get(&key)
    }
}

const MOVEMENT_KEYS : [Key; 8] = [Key::Up, Key::Down, Key::Left, Key::Right,
    Key::Char('w'), Key::Char('s'), Key::Char('a'), Key::Char('d')];

pub fn build_default_action_bindings() -> ActionKeyBindings {
    let mut bindings = HashMap::new();
    for key in MOVEMENT_KEYS.iter() {
        if let Some(side) = key_to_side(*key) {
            bindings.insert(*key, Action::Move(side));
        }
    }
    bindings.insert(Key::Char('g'), Action::PickUp);
    bindings.insert(Key::Char(','), Action::PickUp);
    bindings.insert(Key::Char('i'), Action::ShowInventory);
    bindings.insert(Key::Char('h'), Action::ShowHelp);
    bindings.insert(Key::Char('?'), Action::ShowHelp);
    bindings.insert(Key::Char('q'), Action::Quit);
    bindings.insert(Key::Esc, Action::Quit);
    ActionKeyBindings { bindings }
}

impl ActionKeyBindings {
    /*
        One line per action, e.g "Up / w : Move up", in a stable order for the help screen
     */
    pub fn describe(&self) -> Vec<String> {
        let actions = [Action::Move(Side::TOP), Action::Move(Side::BOTTOM), Action::Move(Side::LEFT), Action::Move(Side::RIGHT),
            Action::PickUp, Action::ShowInventory, Action::ShowHelp, Action::Quit];

        actions.iter()
            .map(|action| {
                let mut keys: Vec<String> = self.bindings.iter()
                    .filter(|(_, bound)| *bound == action)
                    .map(|(key, _)| describe_key(*key))
                    .collect();
                // Named keys (Up, Esc) sort before single characters
                keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
                format!("{} : {}", keys.join(" / "), action.describe())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use termion::event::Key;

    use crate::map::position::Side;
    use crate::ui::bindings::action_bindings::{build_default_action_bindings, Action};
    use crate::ui::bindings::input_bindings::KeyBindings;

    #[test]
    fn test_default_bindings() {
        let bindings = build_default_action_bindings();
        assert_eq!(Some(&Action::Move(Side::TOP)), bindings.get_input(Key::Up));
        assert_eq!(Some(&Action::Move(Side::RIGHT)), bindings.get_input(Key::Char('d')));
        assert_eq!(Some(&Action::PickUp), bindings.get_input(Key::Char('g')));
        assert_eq!(Some(&Action::ShowInventory), bindings.get_input(Key::Char('i')));
        assert_eq!(Some(&Action::ShowHelp), bindings.get_input(Key::Char('?')));
        assert_eq!(Some(&Action::Quit), bindings.get_input(Key::Esc));
        assert_eq!(None, bindings.get_input(Key::Char('z')));
    }

    #[test]
    fn test_describe_bindings() {
        let lines = build_default_action_bindings().describe();
        assert_eq!(8, lines.len());
        assert_eq!("Up / w : Move up", lines[0]);
        assert_eq!("Esc / q : Quit", lines[7]);
    }
}
