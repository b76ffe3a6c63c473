use crate::inventory::ItemKey;
use crate::math::Place;
use crate::planting::Planting::PlantHarvested;
use crate::planting::PlantingError::NotReadyToHarvest;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn harvest_plant(
        &mut self,
        place: Place,
    ) -> Result<((ItemKey, u32), impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let plant = self.get_plant_mut(place)?;
        if !plant.can_harvest() {
            return Err(NotReadyToHarvest {
                place,
                stage: plant.stage,
            });
        }
        let fruits = (plant.kind.product, plant.kind.fruits);
        let operation = move || {
            plant.harvest();
            vec![PlantHarvested {
                place,
                stage: plant.stage,
            }]
        };
        Ok((fruits, operation))
    }
}
