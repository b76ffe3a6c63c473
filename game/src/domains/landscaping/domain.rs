use serde::{Deserialize, Serialize};

use crate::math::Place;

#[derive(Default)]
pub struct LandscapingDomain {
    pub land: Land,
    pub ground_passable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Ground,
    Untilled,
    Soil,
}

impl Surface {
    pub const GROUND: char = 'G';
    pub const UNTILLED: char = 'U';
    pub const SOIL: char = 'S';

    pub fn from_code(code: char) -> Option<Surface> {
        match code {
            Surface::GROUND => Some(Surface::Ground),
            Surface::UNTILLED => Some(Surface::Untilled),
            Surface::SOIL => Some(Surface::Soil),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Surface::Ground => Surface::GROUND,
            Surface::Untilled => Surface::UNTILLED,
            Surface::Soil => Surface::SOIL,
        }
    }
}

/// Rectangular terrain stored row by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Land {
    pub rows: usize,
    pub columns: usize,
    pub surface: Vec<Surface>,
}

impl Land {
    pub fn new(rows: usize, columns: usize, surface: Vec<Surface>) -> Self {
        debug_assert_eq!(rows * columns, surface.len());
        Self {
            rows,
            columns,
            surface,
        }
    }

    #[inline]
    pub fn bounds(&self) -> [usize; 2] {
        [self.rows, self.columns]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Landscaping {
    SurfaceChanged { place: Place, surface: Surface },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LandscapingError {
    OutOfLand {
        place: Place,
    },
    InvalidLandSurface {
        place: Place,
        actual: Surface,
        expected: Surface,
    },
    PlaceOccupied {
        place: Place,
    },
}
