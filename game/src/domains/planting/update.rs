use crate::planting::Planting::PlantGrown;
use crate::planting::{Planting, PlantingDomain};

impl PlantingDomain {
    /// Ages every plant by one day.
    pub fn update(&mut self) -> Vec<Planting> {
        let mut events = vec![];
        for (place, plant) in self.plants.iter_mut() {
            let stage = plant.stage;
            plant.advance_growth();
            if plant.stage != stage {
                events.push(PlantGrown {
                    place: *place,
                    stage: plant.stage,
                })
            }
        }
        events
    }
}
