use crate::trading::Trading::MoneyChanged;
use crate::trading::TradingError::MoneyOverflow;
use crate::trading::{Trading, TradingDomain, TradingError};

impl TradingDomain {
    pub fn earn_money(
        &mut self,
        income: u32,
    ) -> Result<impl FnOnce() -> Vec<Trading> + '_, TradingError> {
        let wallet = &mut self.wallet;
        let money = wallet
            .money
            .checked_add(income)
            .ok_or(MoneyOverflow { income })?;
        let operation = move || {
            wallet.money = money;
            vec![MoneyChanged { money }]
        };
        Ok(operation)
    }
}
