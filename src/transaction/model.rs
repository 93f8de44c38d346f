use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A value transfer queued in the pending pool and later sealed into a block.
///
/// No balance or signature checks are made; only the shape matters. The amount
/// is any JSON number and keeps its exact textual form, so a peer's `0.5`
/// re-serializes (and hashes) the way the peer wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: Number,
}

impl Transaction {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<Number>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }

    /// Coinbase-style reward minted by the node that forged a block.
    pub fn reward(miner: impl Into<String>) -> Self {
        Self::new(
            crate::blockchain::COINBASE_SENDER,
            miner,
            crate::blockchain::MINING_REWARD,
        )
    }
}
