use crate::math::Place;
use crate::planting::{Plant, PlantingDomain};

impl PlantingDomain {
    pub fn load_plants(&mut self, plants: Vec<(Place, Plant)>) {
        self.plants.extend(plants);
    }
}
