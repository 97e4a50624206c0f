use std::collections::HashMap;

use termion::event::Key;

use crate::map::position::Side;

pub(crate) fn key_to_side(key : Key) -> Option<Side> {
    return match key {
        Key::Up | Key::Char('w') => {
            Some(Side::TOP)
        },
        Key::Down | Key::Char('s') => {
            Some(Side::BOTTOM)
        },
        Key::Left | Key::Char('a') => {
            Some(Side::LEFT)
        },
        Key::Right | Key::Char('d') => {
            Some(Side::RIGHT)
        },
        _ => {
            None
        }
    }
}

pub trait KeyBindings<T> {
    fn get_bindings(&self) -> &HashMap<Key, T>;
    fn get_input(&self, key: Key) -> Option<&T>;
}

/*
    Human readable name for a key, used on the help screen
 */
pub fn describe_key(key: Key) -> String {
    match key {
        Key::Up => String::from("Up"),
        Key::Down => String::from("Down"),
        Key::Left => String::from("Left"),
        Key::Right => String::from("Right"),
        Key::Esc => String::from("Esc"),
        Key::Char(c) => c.to_string(),
        other => format!("{:?}", other)
    }
}
