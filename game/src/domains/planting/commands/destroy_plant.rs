use crate::math::Place;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn destroy_plant(
        &mut self,
        place: Place,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        self.ensure_plant(place)?;
        let operation = move || {
            self.plants.remove(&place);
            vec![Planting::PlantDestroyed { place }]
        };
        Ok(operation)
    }
}
