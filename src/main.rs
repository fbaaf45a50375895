use clap::Parser;
use log::{error, info, LevelFilter};
use pow_ledger::{
    load_last_hash, render_chain, Blockchain, Command, FileCheckpointStore, Opt, GLOBAL_CONFIG,
};
use std::process;

fn main() {
    // Info by default; RUST_LOG still wins when set
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileCheckpointStore::new(GLOBAL_CONFIG.get_checkpoint_path());

    match command {
        Command::Mine { transfers } => {
            // The previous run's hash is informational only; the chain lives in memory
            match load_last_hash(&store)? {
                Some(hash) => info!("Last checkpointed hash: {hash}"),
                None => info!("No prior chain found at {}", store.get_path().display()),
            }

            let mut chain = Blockchain::new(Box::new(store));
            for transfer in transfers {
                chain.add_transaction(&transfer.sender, &transfer.recipient, transfer.value);
            }

            let mut mined = 0;
            while chain.mine_block()?.is_some() {
                mined += 1;
            }
            if mined == 0 {
                println!("Nothing to mine.");
            } else {
                info!("Mined {mined} block(s)");
            }

            print!("{}", render_chain(&chain)?);
        }
        Command::LastHash => match load_last_hash(&store)? {
            Some(hash) => println!("{hash}"),
            None => println!("No checkpoint found at {}", store.get_path().display()),
        },
    }
    Ok(())
}
