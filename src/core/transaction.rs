// A transaction records a transfer of value between two addresses.
// Its id is the SHA-256 of sender + recipient + value, so it depends on nothing else:
// two transfers with the same fields share an id. There is no salt or sequence number.

use crate::utils::sha256_hex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    sender: String,
    recipient: String,
    value: f64,
}

impl Transaction {
    /// Build a transaction and derive its id. Addresses and value are taken as-is;
    /// negative or malformed values are accepted.
    pub fn new(sender: &str, recipient: &str, value: f64) -> Transaction {
        Transaction {
            id: Self::compute_id(sender, recipient, value),
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            value,
        }
    }

    // The value always carries six decimals so 10 and 10.0 hash the same
    fn compute_id(sender: &str, recipient: &str, value: f64) -> String {
        let data = format!("{sender}{recipient}{value:.6}");
        sha256_hex(data.as_bytes())
    }

    pub fn get_id(&self) -> &str {
        self.id.as_str()
    }

    pub fn get_sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn get_recipient(&self) -> &str {
        self.recipient.as_str()
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }
}

/// Canonical text used when a transaction is fed into the proof-of-work data.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {:.6}}}",
            self.id, self.sender, self.recipient, self.value
        )
    }
}
