use crate::math::Place;
use crate::planting::{Plant, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn create_plant(
        &mut self,
        place: Place,
        plant: Plant,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        if self.plants.contains_key(&place) {
            return Err(PlantingError::PlaceOccupied { place });
        }
        let operation = move || {
            let kind = plant.kind.id;
            self.plants.insert(place, plant);
            vec![Planting::PlantCreated { place, kind }]
        };
        Ok(operation)
    }
}
