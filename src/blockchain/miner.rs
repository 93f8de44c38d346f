use log::info;

use super::{Block, Ledger, ProofSearch};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// Mine the next block on top of the current tip:
/// - search a proof against the tip's proof
/// - queue the coinbase reward to `miner` (so it lands in this same block)
/// - seal the pool into a block linked to the tip's hash
pub fn forge_block(
    ledger: &mut Ledger,
    search: &dyn ProofSearch,
    miner: &str,
) -> Result<Block, LedgerError> {
    let (last_proof, previous_hash) = {
        let tip = ledger.last_block()?;
        (tip.proof, tip.hash())
    };
    let proof = search.find_proof(last_proof);

    let reward = Transaction::reward(miner);
    ledger.new_transaction(reward.sender, reward.recipient, reward.amount)?;

    let block = ledger.new_block(proof, Some(previous_hash))?;
    info!(
        "MINER - forged block #{} (proof={}, txs={})",
        block.index,
        block.proof,
        block.transactions.len()
    );
    Ok(block)
}
