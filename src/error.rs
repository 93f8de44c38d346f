//! Error types for the ledger node

use thiserror::Error;

/// Failures of the local ledger itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("chain has no blocks")]
    EmptyChain,
}

/// Why a candidate chain was rejected by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain is empty")]
    Empty,

    #[error("block at position {index} does not link to its predecessor")]
    BrokenLink { index: usize },

    #[error("block at position {index} carries an invalid proof")]
    InvalidProof { index: usize },
}

/// Peer address registration failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeerError {
    #[error("invalid node address: {0}")]
    InvalidAddress(String),
}

/// A peer that could not serve a usable chain. Always skipped during consensus.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("reported length {reported} but sent {actual} blocks")]
    LengthMismatch { reported: usize, actual: usize },
}
