// This is the chain engine: it owns the block sequence and the pending
// transaction pool, filters admissions, drives proof-of-work, derives
// balances by replaying history, and verifies chain integrity.
//
// The model is deliberately trusting: there is no signing, no peer
// consensus, and no persistence. One in-process caller submits
// transactions and asks for blocks to be mined.

use crate::config::LedgerConfig;
use crate::core::{Block, Transaction};
use crate::error::Result;
use crate::utils::current_timestamp;
use log::{debug, info};

/// Reserved payer identifier for transactions that introduce new supply.
pub const MINT_ADDRESS: &str = "mint";

/// Predecessor-hash sentinel carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Outcome of a structured chain-integrity check.
///
/// `HashMismatch` means a block's stored hash no longer matches a recompute
/// of its contents; `LinkMismatch` means a block's predecessor hash does not
/// match the previous block's stored hash. The first failing block wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainValidation {
    Valid,
    HashMismatch { index: usize },
    LinkMismatch { index: usize },
}

impl ChainValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, ChainValidation::Valid)
    }
}

pub struct Ledger {
    chain: Vec<Block>,
    pending_txns: Vec<Transaction>,
    difficulty: u32,
    mining_reward: u64,
}

impl Ledger {
    /// Create a ledger seeded with a genesis block and an airdrop.
    ///
    /// The genesis block holds a single zero-amount mint transaction and is
    /// appended unmined. Afterwards every registered address is credited
    /// with the configured airdrop amount through one immediately mined
    /// block, credited to the configured default miner.
    pub fn new(config: &LedgerConfig) -> Result<Ledger> {
        let mut ledger = Ledger {
            chain: Vec::new(),
            pending_txns: Vec::new(),
            difficulty: config.difficulty,
            mining_reward: config.mining_reward,
        };
        ledger.create_genesis_block()?;
        ledger.airdrop_coins(
            &config.registered_addresses,
            config.airdrop_amount,
            &config.default_miner,
        )?;
        Ok(ledger)
    }

    fn create_genesis_block(&mut self) -> Result<()> {
        let txn = Transaction::new(current_timestamp()?, MINT_ADDRESS, "genesis", 0);
        let block = Block::new(
            current_timestamp()?,
            vec![txn],
            GENESIS_PREVIOUS_HASH.to_string(),
        )?;
        self.chain.push(block);
        Ok(())
    }

    fn airdrop_coins(&mut self, addresses: &[String], coins: u64, miner_addr: &str) -> Result<()> {
        for addr in addresses {
            let txn = Transaction::new(current_timestamp()?, MINT_ADDRESS, addr, coins);
            self.pending_txns.push(txn);
        }
        info!("Airdropping {coins} coins to {} addresses", addresses.len());
        self.mine_current_block(miner_addr)?;
        Ok(())
    }

    pub fn get_latest_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Chain always holds at least the genesis block")
    }

    /// Append a transaction to the pending pool. Always succeeds; validation
    /// is deferred to mining time.
    pub fn create_transaction(&mut self, txn: Transaction) {
        self.pending_txns.push(txn);
    }

    /// Close the pending pool into a new block, mine it, and append it.
    ///
    /// A pending transaction is admitted if it is a mint transaction or if
    /// its payer's chain-derived balance covers the amount. Transactions
    /// failing that check are silently dropped. Admission looks at chain
    /// history only, so several pending spends from one payer can jointly
    /// overdraw the account.
    ///
    /// Mining is a blocking proof-of-work search on the calling thread.
    /// Afterwards the pool is reset to a single mint transaction crediting
    /// `miner_addr` with the mining reward, which lands in the next block.
    pub fn mine_current_block(&mut self, miner_addr: &str) -> Result<&Block> {
        let pending = std::mem::take(&mut self.pending_txns);
        let mut validated_txns = Vec::with_capacity(pending.len());
        for txn in pending {
            if txn.is_mint() || self.validate_transaction(&txn) {
                validated_txns.push(txn);
            } else {
                debug!(
                    "Dropping transaction {} -> {} ({}): insufficient balance",
                    txn.get_payer_addr(),
                    txn.get_payee_addr(),
                    txn.get_amount()
                );
            }
        }
        info!("Transactions validated: {}", validated_txns.len());

        let previous_hash = self.get_latest_block().get_hash().to_string();
        let mut block = Block::new(current_timestamp()?, validated_txns, previous_hash)?;
        block.mine(self.difficulty)?;

        info!("Current block successfully mined...");
        self.chain.push(block);

        self.pending_txns = vec![Transaction::new(
            current_timestamp()?,
            MINT_ADDRESS,
            miner_addr,
            self.mining_reward,
        )];

        Ok(self
            .chain
            .last()
            .expect("Chain is never empty after an append"))
    }

    /// A transaction is valid when the payer's derived balance covers it.
    pub fn validate_transaction(&self, txn: &Transaction) -> bool {
        self.get_address_balance(txn.get_payer_addr()) >= txn.get_amount() as i64
    }

    /// Derive an address balance by replaying the entire chain, in block
    /// order then transaction order. May be negative: admission only checks
    /// the payer against chain history, not against other transactions
    /// admitted from the same pool.
    pub fn get_address_balance(&self, addr: &str) -> i64 {
        let mut balance: i64 = 0;
        for block in &self.chain {
            for txn in block.get_transactions() {
                if txn.get_payer_addr() == addr {
                    balance -= txn.get_amount() as i64;
                }
                if txn.get_payee_addr() == addr {
                    balance += txn.get_amount() as i64;
                }
            }
        }
        balance
    }

    /// Walk the chain and report the first integrity failure, if any.
    ///
    /// Checking starts at index 1: the genesis block's own content hash is
    /// intentionally not re-verified, only its role as block 1's
    /// predecessor.
    pub fn verify_chain(&self) -> ChainValidation {
        for i in 1..self.chain.len() {
            let current = &self.chain[i];

            // validate data integrity
            match current.compute_hash() {
                Ok(recomputed) if recomputed == current.get_hash() => {}
                _ => return ChainValidation::HashMismatch { index: i },
            }

            // validate hash chain link
            if current.get_previous_hash() != self.chain[i - 1].get_hash() {
                return ChainValidation::LinkMismatch { index: i };
            }
        }
        ChainValidation::Valid
    }

    /// Boolean convenience wrapper over `verify_chain`.
    pub fn is_chain_valid(&self) -> bool {
        self.verify_chain().is_valid()
    }

    pub fn get_blocks(&self) -> &[Block] {
        self.chain.as_slice()
    }

    pub fn get_pending_transactions(&self) -> &[Transaction] {
        self.pending_txns.as_slice()
    }

    pub fn get_difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn get_mining_reward(&self) -> u64 {
        self.mining_reward
    }

    #[cfg(test)]
    fn block_mut(&mut self, index: usize) -> &mut Block {
        &mut self.chain[index]
    }
}
