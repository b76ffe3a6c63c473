use crate::inventory::Inventory::ItemQuantityChanged;
use crate::inventory::InventoryError::ItemQuantityOverflow;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    pub fn increase_item(
        &mut self,
        item: ItemKey,
        increment: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let quantity = self
            .backpack
            .count(item)
            .checked_add(increment)
            .ok_or(ItemQuantityOverflow { item })?;
        let operation = move || {
            self.backpack.items.insert(item, quantity);
            vec![ItemQuantityChanged { item, quantity }]
        };
        Ok(operation)
    }
}
