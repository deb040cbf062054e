// Demo driver for the ledger simulator. It seeds a fresh ledger, pushes a
// few rounds of transfers through the mining cycle, and prints the derived
// balances after each block, finishing with a chain-integrity report.
use clap::Parser;
use ledgersim::{
    current_timestamp, Command, Ledger, LedgerConfig, Opt, Transaction,
};
use log::{error, LevelFilter};
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Demo {
            difficulty,
            reward,
            airdrop,
        } => {
            let config = LedgerConfig {
                difficulty,
                mining_reward: reward,
                airdrop_amount: airdrop,
                ..LedgerConfig::default()
            };
            run_demo(&config)?;
        }
    }
    Ok(())
}

fn run_demo(config: &LedgerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new(config)?;
    let miner = config.default_miner.clone();

    // 1st block: the 1000-coin transfer exceeds Alice's airdrop balance and
    // gets dropped at admission time; the 25-coin transfer goes through.
    ledger.create_transaction(transfer("wallet-Alice", "wallet-Bob", 1000)?);
    ledger.create_transaction(transfer("wallet-Bob", "wallet-Alice", 25)?);

    println!("\nMining a block");
    ledger.mine_current_block(&miner)?;
    print_balances(&ledger);

    // 2nd block
    ledger.create_transaction(transfer("wallet-Alice", "wallet-Bob", 50)?);
    ledger.create_transaction(transfer("wallet-Bob", "wallet-Alice", 25)?);

    println!("\nMining a block");
    ledger.mine_current_block(&miner)?;
    print_balances(&ledger);

    // 3rd block
    ledger.create_transaction(transfer("wallet-Charlie", "wallet-Bob", 75)?);
    ledger.create_transaction(transfer("wallet-Bob", "wallet-Alice", 25)?);
    ledger.create_transaction(transfer("wallet-Alice", "wallet-Charlie", 50)?);

    println!("\nMining a block");
    ledger.mine_current_block(&miner)?;
    print_balances(&ledger);

    println!("\nChain valid: {}", ledger.is_chain_valid());
    Ok(())
}

fn transfer(payer: &str, payee: &str, amount: u64) -> Result<Transaction, ledgersim::LedgerError> {
    Ok(Transaction::new(current_timestamp()?, payer, payee, amount))
}

fn print_balances(ledger: &Ledger) {
    for addr in [
        "wallet-Alice",
        "wallet-Bob",
        "wallet-Charlie",
        "wallet-Miner49r",
    ] {
        println!("Balance: {addr}: {}", ledger.get_address_balance(addr));
    }
}
