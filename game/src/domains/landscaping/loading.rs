use log::info;

use crate::landscaping::{Land, LandscapingDomain};

impl LandscapingDomain {
    pub fn load_land(&mut self, land: Land, ground_passable: bool) {
        info!("Load land {}x{}", land.rows, land.columns);
        self.land = land;
        self.ground_passable = ground_passable;
    }
}
