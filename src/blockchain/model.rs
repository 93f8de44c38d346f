use log::debug;
use serde_json::Number;

use super::{Block, ProofOfWork};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// In-memory chain plus the pool of transactions waiting for the next block.
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    current_transactions: Vec<Transaction>,
    pow: ProofOfWork,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(ProofOfWork::default())
    }
}

impl Ledger {
    /// Initialize a ledger holding only the genesis block.
    pub fn new(pow: ProofOfWork) -> Self {
        let mut ledger = Self {
            chain: Vec::new(),
            current_transactions: Vec::new(),
            pow,
        };
        ledger.chain.push(Block::genesis());
        ledger
    }

    /// Queue a transaction for the next block and return that block's index.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<Number>,
    ) -> Result<u64, LedgerError> {
        let tx = Transaction::new(sender, recipient, amount);
        let target = self.last_block()?.index + 1;
        debug!(
            "queued tx {} -> {} ({}) for block #{} (pool size {})",
            tx.sender,
            tx.recipient,
            tx.amount,
            target,
            self.current_transactions.len() + 1
        );
        self.current_transactions.push(tx);
        Ok(target)
    }

    /// Seal the pending pool into a new block and append it.
    ///
    /// Without `previous_hash` the block links to the hash of the current tip.
    /// The pool is emptied whatever the proof, and a copy of the block is returned.
    pub fn new_block(
        &mut self,
        proof: u64,
        previous_hash: Option<String>,
    ) -> Result<Block, LedgerError> {
        let previous_hash = match previous_hash {
            Some(hash) => hash,
            None => self.last_block()?.hash(),
        };
        let transactions = std::mem::take(&mut self.current_transactions);
        let block = Block::new(
            self.chain.len() as u64 + 1,
            transactions,
            proof,
            previous_hash,
        );
        self.chain.push(block.clone());
        Ok(block)
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> Result<&Block, LedgerError> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.current_transactions
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn pow(&self) -> ProofOfWork {
        self.pow
    }

    /// Swap in a whole new chain. The pending pool is left as is.
    pub fn replace_chain(&mut self, chain: Vec<Block>) -> Result<(), LedgerError> {
        if chain.is_empty() {
            return Err(LedgerError::EmptyChain);
        }
        self.chain = chain;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Ledger;
    use crate::blockchain::ProofOfWork;
    use crate::error::LedgerError;
    use crate::transaction::Transaction;

    #[test]
    fn fresh_ledger_has_only_genesis() {
        let ledger = Ledger::default();
        assert_eq!(ledger.len(), 1);
        let genesis = ledger.last_block().unwrap();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.previous_hash, "1");
        assert_eq!(genesis.proof, 100);
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn new_transaction_targets_next_block() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.new_transaction("A", "B", 10), Ok(2));
        assert_eq!(ledger.new_transaction("B", "C", -3), Ok(2));
        assert_eq!(ledger.pending().len(), 2);
    }

    #[test]
    fn new_block_drains_pool_and_links_to_tip() {
        let mut ledger = Ledger::new(ProofOfWork::new(1));
        ledger.new_transaction("A", "B", 10).unwrap();
        let genesis_hash = ledger.last_block().unwrap().hash();

        // proof validity is not checked on append
        let block = ledger.new_block(12345, None).unwrap();
        assert_eq!(block.index, 2);
        assert_eq!(block.previous_hash, genesis_hash);
        assert_eq!(block.transactions, vec![Transaction::new("A", "B", 10)]);
        assert!(ledger.pending().is_empty());
        assert_eq!(ledger.new_transaction("C", "D", 1), Ok(3));
    }

    #[test]
    fn explicit_previous_hash_is_kept() {
        let mut ledger = Ledger::default();
        let block = ledger.new_block(1, Some("deadbeef".into())).unwrap();
        assert_eq!(block.previous_hash, "deadbeef");
    }

    #[test]
    fn returned_block_is_a_copy() {
        let mut ledger = Ledger::default();
        ledger.new_transaction("A", "B", 10).unwrap();
        let mut block = ledger.new_block(7, None).unwrap();
        block.transactions.clear();
        assert_eq!(ledger.last_block().unwrap().transactions.len(), 1);
    }

    #[test]
    fn empty_replacement_is_refused() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.replace_chain(Vec::new()), Err(LedgerError::EmptyChain));
        assert_eq!(ledger.len(), 1);
    }
}
