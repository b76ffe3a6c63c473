use crate::inventory::Inventory::ItemQuantityChanged;
use crate::inventory::InventoryError::NotEnoughItems;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    pub fn decrease_item(
        &mut self,
        item: ItemKey,
        decrement: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let available = self.backpack.count(item);
        if available < decrement {
            return Err(NotEnoughItems {
                item,
                required: decrement,
                available,
            });
        }
        let quantity = available - decrement;
        let operation = move || {
            self.backpack.items.insert(item, quantity);
            vec![ItemQuantityChanged { item, quantity }]
        };
        Ok(operation)
    }
}
