use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError, Surface};
use crate::math::{Place, TileMath};

impl LandscapingDomain {
    pub fn till_place(
        &mut self,
        place: Place,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        self.land.ensure_surface(place, Surface::Untilled)?;
        let land = &mut self.land;
        let command = move || {
            land.surface[place.fit(land.columns)] = Surface::Soil;
            vec![Landscaping::SurfaceChanged {
                place,
                surface: Surface::Soil,
            }]
        };
        Ok(command)
    }
}
