use super::{Block, ProofOfWork};
use crate::error::ChainError;

/// Check linkage and proof of every adjacent pair, explaining the first failure.
///
/// The genesis block is taken as given. Works on any chain, local or not.
pub fn validate_chain(chain: &[Block], pow: &ProofOfWork) -> Result<(), ChainError> {
    if chain.is_empty() {
        return Err(ChainError::Empty);
    }

    for (index, pair) in chain.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
        let (prev, current) = (&pair[0], &pair[1]);

        if current.previous_hash != prev.hash() {
            return Err(ChainError::BrokenLink { index });
        }

        if !pow.is_valid_proof(prev.proof, current.proof) {
            return Err(ChainError::InvalidProof { index });
        }
    }

    Ok(())
}

pub fn is_valid_chain(chain: &[Block], pow: &ProofOfWork) -> bool {
    validate_chain(chain, pow).is_ok()
}
