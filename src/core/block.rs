use crate::core::{ProofOfWork, Transaction};
use crate::error::Result;
use crate::utils::{serialize, sha256_digest};
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};

/// A container of transactions linked to its predecessor by hash.
///
/// Construction computes a provisional hash; the hash only satisfies the
/// difficulty predicate after `mine` has run. Once the owning engine appends
/// a mined block to the chain, nonce and hash are never touched again.
#[derive(Debug, Clone, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Block {
    timestamp: i64,
    txns: Vec<Transaction>,
    previous_hash: String,
    nonce: u64,
    hash: String,
}

impl Block {
    pub fn new(timestamp: i64, txns: Vec<Transaction>, previous_hash: String) -> Result<Block> {
        let mut block = Block {
            timestamp,
            txns,
            previous_hash,
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.compute_hash()?;
        Ok(block)
    }

    /// Recompute this block's content hash from its stored fields.
    ///
    /// Pure function of (timestamp, transaction list, previous hash, nonce).
    /// The transaction list is serialized in order, so replaying or
    /// re-verifying a block always reproduces the digest.
    pub fn compute_hash(&self) -> Result<String> {
        self.hash_with_nonce(self.nonce)
    }

    /// Hash the block's contents as if its nonce were `nonce`. The mining
    /// loop uses this to probe candidate nonces without mutating the block.
    pub fn hash_with_nonce(&self, nonce: u64) -> Result<String> {
        let txn_bytes = serialize(&self.txns)?;

        let mut data_bytes = Vec::with_capacity(8 + txn_bytes.len() + self.previous_hash.len() + 8);
        data_bytes.extend(self.timestamp.to_be_bytes());
        data_bytes.extend(txn_bytes);
        data_bytes.extend(self.previous_hash.as_bytes());
        data_bytes.extend(nonce.to_be_bytes());

        let digest = sha256_digest(data_bytes.as_slice());
        Ok(HEXLOWER.encode(digest.as_slice()))
    }

    /// Search for a nonce whose hash has `difficulty` leading zero hex
    /// characters. Unbounded: runs until a satisfying hash is found.
    /// Returns the number of iterations performed.
    pub fn mine(&mut self, difficulty: u32) -> Result<u64> {
        self.mine_with_limit(difficulty, None)
    }

    /// Like `mine`, but gives the caller an optional iteration cap. When the
    /// cap fires the block is left untouched and a mining error is returned.
    pub fn mine_with_limit(&mut self, difficulty: u32, max_iterations: Option<u64>) -> Result<u64> {
        let pow = ProofOfWork::new(difficulty);
        let solution = pow.run(self, max_iterations)?;
        self.nonce = solution.nonce;
        self.hash = solution.hash;
        Ok(solution.iterations)
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.txns.as_slice()
    }

    pub fn get_previous_hash(&self) -> &str {
        self.previous_hash.as_str()
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    /// Corrupt a historical transaction amount without recomputing the hash
    /// (for tamper-detection tests only).
    #[cfg(test)]
    pub fn tamper_transaction_amount(&mut self, index: usize, amount: u64) {
        let txn = &self.txns[index];
        self.txns[index] = Transaction::new(
            txn.get_timestamp(),
            txn.get_payer_addr(),
            txn.get_payee_addr(),
            amount,
        );
    }

    /// Rewrite the predecessor link and recompute the stored hash, so the
    /// block is internally consistent but disconnected from its chain
    /// (for link-mismatch tests only).
    #[cfg(test)]
    pub fn relink(&mut self, previous_hash: &str) -> Result<()> {
        self.previous_hash = previous_hash.to_string();
        self.hash = self.compute_hash()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GENESIS_PREVIOUS_HASH;

    fn sample_txns() -> Vec<Transaction> {
        vec![
            Transaction::new(1, "wallet-Alice", "wallet-Bob", 25),
            Transaction::new(2, "wallet-Bob", "wallet-Charlie", 10),
        ]
    }

    #[test]
    fn test_hash_is_computed_at_construction() {
        let block = Block::new(100, sample_txns(), GENESIS_PREVIOUS_HASH.to_string()).unwrap();
        assert!(!block.get_hash().is_empty());
        assert_eq!(block.get_nonce(), 0);
        assert_eq!(block.get_hash(), block.compute_hash().unwrap());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let block = Block::new(100, sample_txns(), "abc".to_string()).unwrap();
        assert_eq!(block.compute_hash().unwrap(), block.compute_hash().unwrap());
    }

    #[test]
    fn test_hash_depends_on_transaction_order() {
        let mut reversed = sample_txns();
        reversed.reverse();

        let a = Block::new(100, sample_txns(), "abc".to_string()).unwrap();
        let b = Block::new(100, reversed, "abc".to_string()).unwrap();
        assert_ne!(a.get_hash(), b.get_hash());
    }

    #[test]
    fn test_hash_depends_on_nonce() {
        let block = Block::new(100, sample_txns(), "abc".to_string()).unwrap();
        assert_ne!(
            block.hash_with_nonce(0).unwrap(),
            block.hash_with_nonce(1).unwrap()
        );
    }

    #[test]
    fn test_mine_satisfies_difficulty() {
        let mut block = Block::new(100, sample_txns(), "abc".to_string()).unwrap();
        block.mine(1).unwrap();

        assert!(block.get_hash().starts_with('0'));
        assert_eq!(block.get_hash(), block.compute_hash().unwrap());
    }

    #[test]
    fn test_mine_with_limit_leaves_block_untouched_on_cap() {
        let mut block = Block::new(100, sample_txns(), "abc".to_string()).unwrap();
        let hash_before = block.get_hash().to_string();
        let nonce_before = block.get_nonce();

        // A 64-character all-zero hash is unreachable, so any cap fires.
        let result = block.mine_with_limit(64, Some(10));
        assert!(result.is_err());
        assert_eq!(block.get_hash(), hash_before);
        assert_eq!(block.get_nonce(), nonce_before);
    }
}
