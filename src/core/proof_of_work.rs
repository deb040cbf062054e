use crate::core::Block;
use crate::error::{LedgerError, Result};
use log::info;

/// Brute-force nonce search against a leading-zero-hex target.
///
/// Difficulty is the number of leading `'0'` hex characters required of a
/// satisfying hash. The search is a tight counting loop with no dynamic
/// dispatch; callers that need a bound pass an iteration cap.
pub struct ProofOfWork {
    difficulty: u32,
}

impl ProofOfWork {
    pub fn new(difficulty: u32) -> ProofOfWork {
        ProofOfWork { difficulty }
    }

    pub fn get_difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Check the leading-zero-hex predicate against a hex digest.
    pub fn meets_target(&self, hash: &str) -> bool {
        hash.len() >= self.difficulty as usize
            && hash.bytes().take(self.difficulty as usize).all(|b| b == b'0')
    }

    /// Run the nonce search for `block`, starting from its current nonce.
    /// Does not mutate the block; the caller applies the winning solution.
    pub fn run(&self, block: &Block, max_iterations: Option<u64>) -> Result<PowSolution> {
        let mut nonce = block.get_nonce();
        let mut hash = block.hash_with_nonce(nonce)?;
        let mut iterations: u64 = 0;

        while !self.meets_target(&hash) {
            if let Some(cap) = max_iterations {
                if iterations >= cap {
                    return Err(LedgerError::Mining(format!(
                        "No satisfying nonce within {cap} iterations at difficulty {}",
                        self.difficulty
                    )));
                }
            }
            nonce = nonce.wrapping_add(1);
            iterations += 1;
            hash = block.hash_with_nonce(nonce)?;
        }

        info!("Block successfully hashed ({iterations} iterations). Hash: {hash}");
        Ok(PowSolution {
            nonce,
            hash,
            iterations,
        })
    }

    /// Validate a mined block: its stored hash must match a recompute and
    /// satisfy the difficulty predicate.
    pub fn validate(block: &Block, difficulty: u32) -> bool {
        let pow = ProofOfWork::new(difficulty);
        match block.compute_hash() {
            Ok(recomputed) => recomputed == block.get_hash() && pow.meets_target(block.get_hash()),
            Err(_) => false,
        }
    }
}

/// A winning nonce with its hash and the iteration count the search took.
pub struct PowSolution {
    pub nonce: u64,
    pub hash: String,
    pub iterations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transaction;

    fn create_test_block() -> Block {
        let txn = Transaction::new(1, "mint", "wallet-Alice", 100);
        Block::new(100, vec![txn], "0".to_string()).unwrap()
    }

    #[test]
    fn test_meets_target() {
        let pow = ProofOfWork::new(2);
        assert!(pow.meets_target("00ff"));
        assert!(!pow.meets_target("0f00"));
        assert!(!pow.meets_target("0"));

        // Difficulty zero admits any hash
        assert!(ProofOfWork::new(0).meets_target("ffff"));
    }

    #[test]
    fn test_run_finds_satisfying_nonce() {
        let block = create_test_block();
        let pow = ProofOfWork::new(1);

        let solution = pow.run(&block, None).unwrap();
        assert!(pow.meets_target(&solution.hash));
        assert_eq!(solution.hash, block.hash_with_nonce(solution.nonce).unwrap());
    }

    #[test]
    fn test_run_respects_iteration_cap() {
        let block = create_test_block();
        let pow = ProofOfWork::new(64);

        let result = pow.run(&block, Some(5));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_mined_block() {
        let mut block = create_test_block();
        block.mine(1).unwrap();

        assert!(ProofOfWork::validate(&block, 1));
        // The same block does not satisfy a stricter difficulty unless it
        // happened to overshoot; difficulty 64 never passes.
        assert!(!ProofOfWork::validate(&block, 64));
    }

    #[test]
    fn test_validate_rejects_unmined_block() {
        // A freshly constructed block has a provisional hash; the odds of it
        // meeting even difficulty 4 by accident are negligible, and if the
        // hash were altered by hand validate would catch the recompute
        // mismatch first.
        let block = create_test_block();
        if !ProofOfWork::new(4).meets_target(block.get_hash()) {
            assert!(!ProofOfWork::validate(&block, 4));
        }
    }
}
