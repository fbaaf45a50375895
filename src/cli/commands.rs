use crate::error::BlockchainError;
use clap::{Parser, Subcommand};
use std::str::FromStr;

/// A transfer given on the command line as `SENDER:RECIPIENT:VALUE`
#[derive(Debug, Clone, PartialEq)]
pub struct TransferArg {
    pub sender: String,
    pub recipient: String,
    pub value: f64,
}

impl FromStr for TransferArg {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(BlockchainError::InvalidArgument(format!(
                "{s}. Expected SENDER:RECIPIENT:VALUE"
            )));
        }
        let value = parts[2].parse::<f64>().map_err(|e| {
            BlockchainError::InvalidArgument(format!("bad value in transfer {s}: {e}"))
        })?;
        Ok(TransferArg {
            sender: parts[0].to_string(),
            recipient: parts[1].to_string(),
            value,
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "pow-ledger")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "mine",
        about = "Queue transfers, mine them into blocks and print the chain"
    )]
    Mine {
        #[arg(
            long = "tx",
            value_name = "SENDER:RECIPIENT:VALUE",
            help = "Transfer to queue (repeatable)"
        )]
        transfers: Vec<TransferArg>,
    },
    #[command(name = "lasthash", about = "Print the last checkpointed block hash")]
    LastHash,
}
