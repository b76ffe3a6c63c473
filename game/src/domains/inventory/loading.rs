use crate::inventory::{InventoryDomain, ItemKey};

impl InventoryDomain {
    pub fn load_items(&mut self, items: Vec<(ItemKey, u32)>) {
        for (item, quantity) in items {
            *self.backpack.items.entry(item).or_default() += quantity;
        }
    }
}
