pub mod block;
pub mod hasher;
pub mod miner;
pub mod model;
pub mod pow;
pub mod validation;

pub use block::Block;
pub use model::Ledger;
pub use pow::{ProofOfWork, ProofSearch};
pub use validation::{is_valid_chain, validate_chain};

/// Default Proof-of-Work difficulty (leading '0' hex characters).
pub const DEFAULT_DIFFICULTY: usize = 4;

/// A SHA-256 hex digest has 64 characters; no proof can satisfy more.
pub const MAX_DIFFICULTY: usize = 64;

/// Seed proof of the genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Placeholder previous hash of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Sender address of system-minted reward transactions.
pub const COINBASE_SENDER: &str = "0";

/// Amount paid to the node that forges a block.
pub const MINING_REWARD: i64 = 1;
