use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::planting::PlantKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    Seeding(PlantKey),
}

#[derive(Debug)]
pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    pub functions: Vec<Function>,
    /// Price in shop, `None` if item can't be bought.
    pub buy_price: Option<u32>,
    pub sell_price: u32,
}

/// Farmer's item counts and the item in hand.
#[derive(Debug, Default)]
pub struct Backpack {
    pub items: BTreeMap<ItemKey, u32>,
    pub selected: Option<ItemKey>,
}

#[derive(Default)]
pub struct InventoryDomain {
    pub backpack: Backpack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inventory {
    ItemQuantityChanged { item: ItemKey, quantity: u32 },
    ItemSelected { item: Option<ItemKey> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InventoryError {
    ItemNotFound {
        item: ItemKey,
    },
    NotEnoughItems {
        item: ItemKey,
        required: u32,
        available: u32,
    },
    ItemQuantityOverflow {
        item: ItemKey,
    },
    ItemFunctionNotFound,
}
