use serde::{Deserialize, Serialize};

/// Cell of the farm grid as `[row, column]`.
pub type Place = [usize; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Down
    }
}

impl Direction {
    pub fn from_key(key: char) -> Option<Direction> {
        match key {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Down => 's',
            Direction::Left => 'a',
            Direction::Right => 'd',
        }
    }

    pub fn offset(&self) -> [isize; 2] {
        match self {
            Direction::Up => [-1, 0],
            Direction::Down => [1, 0],
            Direction::Left => [0, -1],
            Direction::Right => [0, 1],
        }
    }
}

pub trait TileMath {
    fn step(self, direction: Direction, bounds: [usize; 2]) -> Option<Place>;
    fn fit(self, columns: usize) -> usize;
    fn inside(self, bounds: [usize; 2]) -> bool;
}

impl TileMath for Place {
    fn step(self, direction: Direction, bounds: [usize; 2]) -> Option<Place> {
        let [row, column] = self;
        let [dr, dc] = direction.offset();
        let row = row.checked_add_signed(dr)?;
        let column = column.checked_add_signed(dc)?;
        let place = [row, column];
        if place.inside(bounds) {
            Some(place)
        } else {
            None
        }
    }

    #[inline]
    fn fit(self, columns: usize) -> usize {
        self[0] * columns + self[1]
    }

    #[inline]
    fn inside(self, bounds: [usize; 2]) -> bool {
        self[0] < bounds[0] && self[1] < bounds[1]
    }
}
