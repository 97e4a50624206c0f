use serde::Deserialize;

use crate::map::terrain::{Colour, Symbol};

fn default_player_character() -> char {
    '@'
}

fn default_player_colour() -> Colour {
    Colour::Yellow
}

fn default_text_colour() -> Colour {
    Colour::White
}

fn default_border_colour() -> Colour {
    Colour::Grey
}

fn default_highlight_colour() -> Colour {
    Colour::Cyan
}

/*
    Display preferences read from theme.json, every field is optional
 */
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Theme {
    #[serde(default = "default_player_character")]
    pub player_character: char,
    #[serde(default = "default_player_colour")]
    pub player_colour: Colour,
    // Overrides the per-item colours when set
    #[serde(default)]
    pub item_colour: Option<Colour>,
    #[serde(default = "default_text_colour")]
    pub text_colour: Colour,
    #[serde(default = "default_border_colour")]
    pub border_colour: Colour,
    #[serde(default = "default_highlight_colour")]
    pub highlight_colour: Colour
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            player_character: default_player_character(),
            player_colour: default_player_colour(),
            item_colour: None,
            text_colour: default_text_colour(),
            border_colour: default_border_colour(),
            highlight_colour: default_highlight_colour()
        }
    }
}

impl Theme {
    pub fn player_symbol(&self) -> Symbol {
        Symbol::new(self.player_character, self.player_colour)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::theme::Theme;
    use crate::map::terrain::Colour;

    #[test]
    fn test_partial_theme_uses_defaults() {
        let theme: Theme = serde_json::from_str(r#"{ "player_colour": "red", "item_colour": "magenta" }"#).unwrap();
        assert_eq!('@', theme.player_character);
        assert_eq!(Colour::Red, theme.player_colour);
        assert_eq!(Some(Colour::Magenta), theme.item_colour);
        assert_eq!(Colour::White, theme.text_colour);
    }

    #[test]
    fn test_empty_theme_equals_default() {
        let theme: Theme = serde_json::from_str("{}").unwrap();
        assert_eq!(Theme::default(), theme);
    }
}
