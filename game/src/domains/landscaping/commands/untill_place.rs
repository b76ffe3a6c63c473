use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError, Surface};
use crate::math::{Place, TileMath};

impl LandscapingDomain {
    /// Turns empty soil back into untilled ground.
    /// The caller tells whether a plant occupies the place.
    pub fn untill_place(
        &mut self,
        place: Place,
        occupied: bool,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        self.land.ensure_surface(place, Surface::Soil)?;
        if occupied {
            return Err(LandscapingError::PlaceOccupied { place });
        }
        let land = &mut self.land;
        let command = move || {
            land.surface[place.fit(land.columns)] = Surface::Untilled;
            vec![Landscaping::SurfaceChanged {
                place,
                surface: Surface::Untilled,
            }]
        };
        Ok(command)
    }
}
