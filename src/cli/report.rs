//! Human-readable chain listing.

use crate::core::{Block, Blockchain};
use crate::error::Result;

const RULE: &str = "--------------------------------------------------";

pub const EMPTY_CHAIN_MESSAGE: &str = "Blockchain is empty.";

/// One block as a boxed record, with its transactions as indented JSON.
pub fn render_block(block: &Block) -> Result<String> {
    let transactions = serde_json::to_string_pretty(block.get_transactions())?;
    Ok(format!(
        "{RULE}\n\
         Block ID       : {}\n\
         Nonce          : {}\n\
         Previous Hash  : {}\n\
         Current Hash   : {}\n\
         Transactions   : {transactions}\n\
         {RULE}\n",
        block.get_id(),
        block.get_nonce(),
        block.get_pre_block_hash(),
        block.get_hash(),
    ))
}

pub fn render_chain(chain: &Blockchain) -> Result<String> {
    if chain.is_empty() {
        return Ok(format!("{EMPTY_CHAIN_MESSAGE}\n"));
    }

    let mut out = String::new();
    for block in chain.iter() {
        out.push_str(&render_block(block)?);
        out.push('\n');
    }
    Ok(out)
}
