use crate::inventory::{Backpack, Function, InventoryError, ItemKey};
use crate::planting::PlantKey;

pub trait FunctionsQuery {
    fn as_seeds(&self) -> Result<PlantKey, InventoryError>;
}

impl FunctionsQuery for Vec<Function> {
    fn as_seeds(&self) -> Result<PlantKey, InventoryError> {
        for function in self {
            if let Function::Seeding(kind) = function {
                return Ok(*kind);
            }
        }
        Err(InventoryError::ItemFunctionNotFound)
    }
}

impl Backpack {
    pub fn count(&self, item: ItemKey) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }
}
