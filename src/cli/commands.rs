use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_AIRDROP_AMOUNT, DEFAULT_DIFFICULTY, DEFAULT_MINING_REWARD};

#[derive(Debug, Parser)]
#[command(name = "ledgersim")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "demo",
        about = "Run the three-round transfer scenario and print balances"
    )]
    Demo {
        #[arg(
            long,
            default_value_t = DEFAULT_DIFFICULTY,
            help = "Leading zero hex characters required of a block hash"
        )]
        difficulty: u32,
        #[arg(
            long,
            default_value_t = DEFAULT_MINING_REWARD,
            help = "Mining reward credited to the miner for the next block"
        )]
        reward: u64,
        #[arg(
            long,
            default_value_t = DEFAULT_AIRDROP_AMOUNT,
            help = "Amount airdropped to each registered address at start"
        )]
        airdrop: u64,
    },
}
