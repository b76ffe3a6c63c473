use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    /// Sells one item at price given by shop.
    pub fn sell(&mut self, item: &str, price: u32) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let decrease_item = self.inventory.decrease_item(kind.id, 1)?;
        let earn_money = self.trading.earn_money(price)?;
        Ok(occur![decrease_item(), earn_money()])
    }

    pub fn sell_item(&mut self, item: &str) -> Result<Vec<Event>, ActionError> {
        let price = self.known.items.find(item)?.sell_price;
        self.sell(item, price)
    }
}
