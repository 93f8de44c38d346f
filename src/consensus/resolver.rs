use log::{debug, info, warn};
use std::sync::Mutex;

use super::fetch::{ChainFetcher, PeerChain, fetch_all};
use crate::blockchain::{Block, Ledger, ProofOfWork, validate_chain};

/// Longest-chain rule. Pull every peer's chain and adopt the longest valid one
/// if it is strictly longer than ours. Returns whether the local chain was replaced.
///
/// The ledger lock is not held while peers are being fetched; the length
/// comparison and the swap happen together under it.
pub async fn resolve_conflicts(
    ledger: &Mutex<Ledger>,
    peers: &[String],
    fetcher: &dyn ChainFetcher,
) -> bool {
    let pow = ledger.lock().expect("mutex poisoned").pow();

    let fetched = fetch_all(fetcher, peers).await;
    let candidates = valid_candidates(fetched, &pow);

    let mut ledger = ledger.lock().expect("mutex poisoned");
    let local_len = ledger.len();
    let Some(chain) = longest_chain(local_len, candidates) else {
        debug!(
            "CONSENSUS - local chain (length {}) is authoritative",
            local_len
        );
        return false;
    };

    let new_len = chain.len();
    match ledger.replace_chain(chain) {
        Ok(()) => {
            info!(
                "CONSENSUS - replaced local chain: {} -> {} blocks",
                local_len, new_len
            );
            true
        }
        Err(e) => {
            warn!("CONSENSUS - could not adopt peer chain: {}", e);
            false
        }
    }
}

/// Drop candidates that fail validation, keeping peer order.
fn valid_candidates(fetched: Vec<(String, PeerChain)>, pow: &ProofOfWork) -> Vec<PeerChain> {
    fetched
        .into_iter()
        .filter_map(|(peer, candidate)| match validate_chain(&candidate.chain, pow) {
            Ok(()) => Some(candidate),
            Err(e) => {
                debug!("CONSENSUS - rejecting chain from {}: {}", peer, e);
                None
            }
        })
        .collect()
}

/// First candidate with the greatest length, provided it beats `local_len`.
/// Equal lengths never win.
fn longest_chain(local_len: usize, candidates: Vec<PeerChain>) -> Option<Vec<Block>> {
    let mut max_length = local_len;
    let mut best = None;
    for candidate in candidates {
        if candidate.length > max_length {
            max_length = candidate.length;
            best = Some(candidate.chain);
        }
    }
    best
}
