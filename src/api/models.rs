use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::sync::{Arc, Mutex};

use crate::blockchain::{Block, Ledger};
use crate::consensus::{ChainFetcher, PeerSet};
use crate::transaction::Transaction;

/// Shared application state: one ledger (its own lock covers the pool, the
/// chain and mining), the registered peers, and this node's identity.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub peers: Mutex<PeerSet>,
    pub node_id: String,
    pub fetcher: Arc<dyn ChainFetcher>,
}

impl AppState {
    pub fn new(
        ledger: Ledger,
        node_id: impl Into<String>,
        fetcher: Arc<dyn ChainFetcher>,
    ) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            peers: Mutex::new(PeerSet::new()),
            node_id: node_id.into(),
            fetcher,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    pub difficulty: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

/// Every field is optional so a missing one can be reported as such.
#[derive(Deserialize)]
pub struct NewTransactionRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<Number>,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct RegisterNodesResponse {
    pub message: &'static str,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ResolveResponse {
    Replaced {
        message: &'static str,
        new_chain: Vec<Block>,
    },
    Authoritative {
        message: &'static str,
        chain: Vec<Block>,
    },
}
