/// Leading zero hex characters required of a block hash.
pub const DEFAULT_DIFFICULTY: u32 = 3;

/// Mint amount credited to the miner for the block after the one just mined.
pub const DEFAULT_MINING_REWARD: u64 = 50;

/// Amount each registered address receives at initialization.
pub const DEFAULT_AIRDROP_AMOUNT: u64 = 100;

/// Construction-time parameters for a `Ledger`.
///
/// A plain value the caller builds and hands to `Ledger::new`; the engine
/// copies what it needs and the registered addresses are only consulted for
/// the initial airdrop.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub difficulty: u32,
    pub mining_reward: u64,
    pub airdrop_amount: u64,
    pub registered_addresses: Vec<String>,
    /// Address credited with the airdrop block's follow-up mining reward.
    pub default_miner: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            difficulty: DEFAULT_DIFFICULTY,
            mining_reward: DEFAULT_MINING_REWARD,
            airdrop_amount: DEFAULT_AIRDROP_AMOUNT,
            registered_addresses: vec![
                String::from("wallet-Alice"),
                String::from("wallet-Bob"),
                String::from("wallet-Charlie"),
                String::from("wallet-Miner49r"),
            ],
            default_miner: String::from("wallet-Miner49r"),
        }
    }
}
