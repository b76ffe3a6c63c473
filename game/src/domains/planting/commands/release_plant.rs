use crate::math::Place;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    /// Removes harvested plant unless its species regrows.
    pub fn release_plant(
        &mut self,
        place: Place,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let regrows = self.get_plant(place)?.regrows();
        let operation = move || {
            if regrows {
                return vec![];
            }
            self.plants.remove(&place);
            vec![Planting::PlantDestroyed { place }]
        };
        Ok(operation)
    }
}
