use crate::api::{ActionError, Event};
use crate::inventory::FunctionsQuery;
use crate::trading::TradingError::ItemNotForSale;
use crate::{occur, Game};

impl Game {
    /// Buys one seed at price given by shop.
    pub fn buy(&mut self, item: &str, price: u32) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        if kind.buy_price.is_none() || kind.functions.as_seeds().is_err() {
            return Err(ItemNotForSale { item: kind.id }.into());
        }
        let spend_money = self.trading.spend_money(price)?;
        let increase_item = self.inventory.increase_item(kind.id, 1)?;
        Ok(occur![spend_money(), increase_item()])
    }

    pub fn buy_item(&mut self, item: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let price = kind.buy_price.ok_or(ItemNotForSale { item: kind.id })?;
        self.buy(item, price)
    }
}
