use crate::trading::{TradingDomain, Wallet};

impl TradingDomain {
    pub fn load_wallet(&mut self, wallet: Wallet) {
        self.wallet = wallet;
    }
}
