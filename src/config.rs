use clap::Parser;
use std::time::Duration;
use uuid::Uuid;

use crate::blockchain::{DEFAULT_DIFFICULTY, MAX_DIFFICULTY};

/// Node settings, read from the command line with environment fallbacks
/// (a `.env` file is loaded first).
#[derive(Debug, Clone, Parser)]
#[command(name = "ledger-node", version, about = "Proof-of-work ledger node")]
pub struct NodeConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Recipient of mining rewards. A random UUID when unset.
    #[arg(long, env = "NODE_ID")]
    pub node_id: Option<String>,

    /// Leading '0' hex characters a proof hash must have (at most 64).
    #[arg(
        long,
        env = "DIFFICULTY",
        default_value_t = DEFAULT_DIFFICULTY,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_DIFFICULTY as u64)
    )]
    pub difficulty: usize,

    /// Per-peer timeout when pulling chains during consensus.
    #[arg(long, env = "PEER_TIMEOUT_SECS", default_value_t = 5)]
    pub peer_timeout_secs: u64,
}

impl NodeConfig {
    /// The configured node id, or a freshly generated one.
    pub fn identity(&self) -> String {
        self.node_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn peer_timeout(&self) -> Duration {
        Duration::from_secs(self.peer_timeout_secs)
    }
}
