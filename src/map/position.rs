use serde::Deserialize;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Deserialize)]
pub struct Position {
    pub x : u16,
    pub y : u16
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Position {
        Position { x, y }
    }

    pub const fn zero() -> Position {
        Position { x: 0, y: 0 }
    }

    /*
        Returns the neighbouring position on the given side, or None if that would go below zero.
        Upper bounds are left to the caller as they depend on the map.
     */
    pub fn step(&self, side: Side) -> Option<Position> {
        match side {
            Side::TOP => {
                if self.y > 0 { Some(Position::new(self.x, self.y - 1)) } else { None }
            },
            Side::BOTTOM => {
                self.y.checked_add(1).map(|y| Position::new(self.x, y))
            },
            Side::LEFT => {
                if self.x > 0 { Some(Position::new(self.x - 1, self.y)) } else { None }
            },
            Side::RIGHT => {
                self.x.checked_add(1).map(|x| Position::new(x, self.y))
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    LEFT,
    RIGHT,
    TOP,
    BOTTOM
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::LEFT => "left",
            Side::RIGHT => "right",
            Side::TOP => "up",
            Side::BOTTOM => "down"
        }
    }
}

/*
    A rectangle of positions.
    end_position is inclusive, so a 3x3 area starting at 0,0 ends at 2,2
 */
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Area {
    pub start_position : Position,
    pub end_position : Position,
    pub width: u16,
    pub height: u16
}

impl Area {
    pub const fn new(start_position: Position, width: u16, height: u16) -> Area {
        build_rectangular_area(start_position, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains_position(&self, position: Position) -> bool {
        self.contains(position.x, position.y)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        if self.is_empty() {
            return false;
        }
        let lower_x_bound = x >= self.start_position.x;
        let lower_y_bound = y >= self.start_position.y;
        let upper_x_bound = x <= self.end_position.x;
        let upper_y_bound = y <= self.end_position.y;
        lower_x_bound && lower_y_bound && upper_x_bound && upper_y_bound
    }
}

pub const fn build_square_area(start_position : Position, size: u16) -> Area {
    build_rectangular_area(start_position, size, size)
}

pub const fn build_rectangular_area(start_position : Position, size_x: u16, size_y: u16) -> Area {
    let start_x = start_position.x;
    let start_y = start_position.y;
    // Zero sized areas collapse onto their start position and contain nothing
    let end_x = if size_x > 0 { start_x + (size_x - 1) } else { start_x };
    let end_y = if size_y > 0 { start_y + (size_y - 1) } else { start_y };
    Area { start_position, end_position: Position { x: end_x, y: end_y }, width: size_x, height: size_y }
}
