use super::DEFAULT_DIFFICULTY;
use super::hasher::sha256_hex;

/// Strategy for searching a proof that satisfies the puzzle for `last_proof`.
///
/// Mining goes through this trait so the linear scan can be swapped for a
/// bounded or parallel search without touching the ledger or the validator.
pub trait ProofSearch: Send + Sync {
    fn find_proof(&self, last_proof: u64) -> u64;
}

/// Leading-zero puzzle: `sha256("{last_proof}{proof}")` must start with
/// `difficulty` ASCII `'0'` characters of its hex digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    difficulty: usize,
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

impl ProofOfWork {
    pub fn new(difficulty: usize) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    pub fn is_valid_proof(&self, last_proof: u64, proof: u64) -> bool {
        let guess = format!("{last_proof}{proof}");
        let digest = sha256_hex(guess.as_bytes());
        digest
            .get(..self.difficulty)
            .is_some_and(|prefix| prefix.bytes().all(|b| b == b'0'))
    }
}

impl ProofSearch for ProofOfWork {
    /// Scan upward from zero until a valid proof turns up. Unbounded.
    fn find_proof(&self, last_proof: u64) -> u64 {
        let mut proof = 0u64;
        while !self.is_valid_proof(last_proof, proof) {
            proof += 1;
        }
        proof
    }
}
