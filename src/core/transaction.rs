// A transaction is a pure record of value-transfer intent. Nothing is
// validated at construction time: well-formedness of the addresses and the
// payer's ability to cover the amount are only checked when the engine
// admits pending transactions into a block.

use crate::core::MINT_ADDRESS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Transaction {
    timestamp: i64,
    payer_addr: String,
    payee_addr: String,
    amount: u64,
}

impl Transaction {
    pub fn new(timestamp: i64, payer_addr: &str, payee_addr: &str, amount: u64) -> Transaction {
        Transaction {
            timestamp,
            payer_addr: payer_addr.to_string(),
            payee_addr: payee_addr.to_string(),
            amount,
        }
    }

    /// A mint transaction introduces new supply (genesis, airdrop, mining
    /// reward) and is exempt from balance validation at admission time.
    pub fn is_mint(&self) -> bool {
        self.payer_addr == MINT_ADDRESS
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_payer_addr(&self) -> &str {
        self.payer_addr.as_str()
    }

    pub fn get_payee_addr(&self) -> &str {
        self.payee_addr.as_str()
    }

    pub fn get_amount(&self) -> u64 {
        self.amount
    }
}
