//! Configuration
//!
//! The ledger takes an explicit, caller-owned configuration value; there is
//! no process-wide singleton.

pub mod settings;

pub use settings::{
    LedgerConfig, DEFAULT_AIRDROP_AMOUNT, DEFAULT_DIFFICULTY, DEFAULT_MINING_REWARD,
};
