use serde::Serialize;

use crate::inventory::ItemKey;

#[derive(Default)]
pub struct TradingDomain {
    pub wallet: Wallet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wallet {
    pub money: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Trading {
    MoneyChanged { money: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TradingError {
    NotEnoughMoney { price: u32, money: u32 },
    MoneyOverflow { income: u32 },
    ItemNotForSale { item: ItemKey },
}
