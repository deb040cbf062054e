//! Core ledger functionality
//!
//! Blocks, transactions, the proof-of-work search, and the chain engine
//! that ties them together.

pub mod block;
pub mod ledger;
pub mod proof_of_work;
pub mod transaction;

pub use block::Block;
pub use ledger::{ChainValidation, Ledger, GENESIS_PREVIOUS_HASH, MINT_ADDRESS};
pub use proof_of_work::{PowSolution, ProofOfWork};
pub use transaction::Transaction;
