use crate::map::terrain::Colour;

pub fn map_colour(colour: Colour) -> ratatui::style::Color {
    match colour {
        Colour::None => {
            ratatui::style::Color::Reset
        },
        Colour::Red => {
            ratatui::style::Color::Red
        },
        Colour::Green => {
            ratatui::style::Color::Green
        },
        Colour::Blue => {
            ratatui::style::Color::Blue
        },
        Colour::Cyan => {
            ratatui::style::Color::Cyan
        },
        Colour::Brown => {
            ratatui::style::Color::Rgb(181, 137, 0)
        },
        Colour::Yellow => {
            ratatui::style::Color::Yellow
        },
        Colour::Magenta => {
            ratatui::style::Color::Magenta
        },
        Colour::Grey => {
            ratatui::style::Color::Gray
        },
        Colour::White => {
            ratatui::style::Color::White
        },
        Colour::Black => {
            ratatui::style::Color::Black
        }
    }
}

// Same mapping for the plain console view, which writes crossterm escapes directly
pub fn map_console_colour(colour: Colour) -> crossterm::style::Color {
    match colour {
        Colour::None => crossterm::style::Color::Reset,
        Colour::Red => crossterm::style::Color::Red,
        Colour::Green => crossterm::style::Color::Green,
        Colour::Blue => crossterm::style::Color::Blue,
        Colour::Cyan => crossterm::style::Color::Cyan,
        Colour::Brown => crossterm::style::Color::Rgb { r: 181, g: 137, b: 0 },
        Colour::Yellow => crossterm::style::Color::Yellow,
        Colour::Magenta => crossterm::style::Color::Magenta,
        Colour::Grey => crossterm::style::Color::Grey,
        Colour::White => crossterm::style::Color::White,
        Colour::Black => crossterm::style::Color::Black
    }
}

#[cfg(test)]
mod tests {
    use crate::map::terrain::Colour;
    use crate::terminal::colour_mapper::{map_colour, map_console_colour};

    #[test]
    fn test_map_colour() {
        assert_eq!(ratatui::style::Color::Reset, map_colour(Colour::None));
        assert_eq!(ratatui::style::Color::Rgb(181, 137, 0), map_colour(Colour::Brown));
        assert_eq!(crossterm::style::Color::Rgb { r: 181, g: 137, b: 0 }, map_console_colour(Colour::Brown));
    }
}
