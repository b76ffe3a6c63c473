use crate::inventory::Inventory::ItemSelected;
use crate::inventory::InventoryError::ItemNotFound;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    pub fn select_item(
        &mut self,
        item: ItemKey,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        if self.backpack.count(item) == 0 {
            return Err(ItemNotFound { item });
        }
        let operation = move || {
            self.backpack.selected = Some(item);
            vec![ItemSelected { item: Some(item) }]
        };
        Ok(operation)
    }

    pub fn deselect_item(&mut self) -> Vec<Inventory> {
        match self.backpack.selected.take() {
            Some(_) => vec![ItemSelected { item: None }],
            None => vec![],
        }
    }
}
