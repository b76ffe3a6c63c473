use crate::math::Place;
use crate::planting::{Plant, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn get_plant(&self, place: Place) -> Result<&Plant, PlantingError> {
        self.plants
            .get(&place)
            .ok_or(PlantingError::PlantNotFound { place })
    }

    pub fn get_plant_mut(&mut self, place: Place) -> Result<&mut Plant, PlantingError> {
        self.plants
            .get_mut(&place)
            .ok_or(PlantingError::PlantNotFound { place })
    }

    pub fn ensure_plant(&self, place: Place) -> Result<(), PlantingError> {
        self.get_plant(place).map(|_| ())
    }

    pub fn has_plant(&self, place: Place) -> bool {
        self.plants.contains_key(&place)
    }
}
