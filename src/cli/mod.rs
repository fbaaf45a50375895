//! Command-line interface
//!
//! Argument parsing and the printed chain listing.

pub mod commands;
pub mod report;

pub use commands::{Command, Opt, TransferArg};
pub use report::{render_block, render_chain};
