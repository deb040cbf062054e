//! # Ledgersim - a single-node proof-of-work ledger simulator
//!
//! A minimal hash-linked chain of transaction blocks with a proof-of-work
//! admission rule. Balances are never stored; they are derived on demand by
//! replaying the full transaction history, and chain integrity can be
//! re-verified at any time from the stored hashes alone.
//!
//! ## What's here
//! - **Chain engine** (`core::Ledger`): pending pool, admission filtering,
//!   mining orchestration, balance replay, integrity verification
//! - **Proof-of-work** (`core::ProofOfWork`): brute-force nonce search
//!   against a leading-zero-hex difficulty target
//! - **Blocks and transactions** (`core::Block`, `core::Transaction`):
//!   immutable-once-mined containers hashed with SHA-256 over an
//!   order-sensitive serialization
//!
//! ## What's deliberately absent
//! Networking, peer consensus, persistence, signatures, and fees. The model
//! trusts its single in-process caller: invalid transactions are silently
//! dropped at mining time rather than rejected with an error, and mint
//! transactions are unauthenticated by design.
//!
//! ```no_run
//! use ledgersim::{Ledger, LedgerConfig, Transaction};
//! use ledgersim::utils::current_timestamp;
//!
//! let mut ledger = Ledger::new(&LedgerConfig::default())?;
//! let now = current_timestamp()?;
//! ledger.create_transaction(Transaction::new(now, "wallet-Alice", "wallet-Bob", 25));
//! ledger.mine_current_block("wallet-Miner49r")?;
//! assert!(ledger.is_chain_valid());
//! # Ok::<(), ledgersim::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{
    LedgerConfig, DEFAULT_AIRDROP_AMOUNT, DEFAULT_DIFFICULTY, DEFAULT_MINING_REWARD,
};
pub use core::{
    Block, ChainValidation, Ledger, PowSolution, ProofOfWork, Transaction, GENESIS_PREVIOUS_HASH,
    MINT_ADDRESS,
};
pub use error::{LedgerError, Result};
pub use utils::{current_timestamp, sha256_digest};
