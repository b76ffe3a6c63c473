use crate::trading::Trading::MoneyChanged;
use crate::trading::TradingError::NotEnoughMoney;
use crate::trading::{Trading, TradingDomain, TradingError};

impl TradingDomain {
    pub fn spend_money(
        &mut self,
        price: u32,
    ) -> Result<impl FnOnce() -> Vec<Trading> + '_, TradingError> {
        let wallet = &mut self.wallet;
        let money = wallet.money.checked_sub(price).ok_or(NotEnoughMoney {
            price,
            money: wallet.money,
        })?;
        let operation = move || {
            wallet.money = money;
            vec![MoneyChanged { money }]
        };
        Ok(operation)
    }
}
