use crate::landscaping::{Land, LandscapingDomain, LandscapingError, Surface};
use crate::math::{Place, TileMath};

impl Land {
    pub fn get_surface(&self, place: Place) -> Result<Surface, LandscapingError> {
        if place.inside(self.bounds()) {
            Ok(self.surface[place.fit(self.columns)])
        } else {
            Err(LandscapingError::OutOfLand { place })
        }
    }

    pub fn ensure_surface(&self, place: Place, expected: Surface) -> Result<(), LandscapingError> {
        let actual = self.get_surface(place)?;
        if actual != expected {
            Err(LandscapingError::InvalidLandSurface {
                place,
                actual,
                expected,
            })
        } else {
            Ok(())
        }
    }

    pub fn rows_codes(&self) -> Vec<String> {
        self.surface
            .chunks(self.columns.max(1))
            .map(|row| row.iter().map(Surface::code).collect())
            .collect()
    }
}

impl LandscapingDomain {
    pub fn get_surface(&self, place: Place) -> Result<Surface, LandscapingError> {
        self.land.get_surface(place)
    }

    pub fn ensure_surface(&self, place: Place, expected: Surface) -> Result<(), LandscapingError> {
        self.land.ensure_surface(place, expected)
    }

    pub fn is_passable(&self, place: Place) -> Result<bool, LandscapingError> {
        let surface = self.land.get_surface(place)?;
        Ok(surface != Surface::Ground || self.ground_passable)
    }
}
