// File: leafproof-merkle/src/proof.rs
use crate::{MerkleError, Tree};
use leafproof_hash::{hash_leaf, Digest};
use log::trace;
use serde::{Deserialize, Serialize};

/// Which side of the running hash a sibling sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Sibling goes first: `hash_pair(sibling, running)`.
    Left,
    /// Sibling goes second: `hash_pair(running, sibling)`.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub side: Side,
    pub digest: Digest,
}

/// Sibling digests from leaf to root. Levels where the node was carried up
/// without a sibling contribute no step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    pub fn new(steps: Vec<ProofStep>) -> Self { Self { steps } }
    pub fn steps(&self) -> &[ProofStep] { &self.steps }
    pub fn len(&self) -> usize { self.steps.len() }
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    /// The bare sibling list with side tags dropped, as untagged tools emit it.
    pub fn siblings(&self) -> Vec<Digest> {
        self.steps.iter().map(|s| s.digest).collect()
    }
}

impl From<Vec<ProofStep>> for Proof {
    fn from(steps: Vec<ProofStep>) -> Self { Self::new(steps) }
}

impl Tree {
    /// Prove the first leaf whose hash equals `hash_leaf(record)`.
    ///
    /// Records that hash identically are indistinguishable here; later
    /// duplicates need [`Tree::prove_index`].
    pub fn prove_inclusion(&self, record: impl AsRef<[u8]>) -> Result<Proof, MerkleError> {
        let leaf = hash_leaf(record.as_ref());
        let index = self
            .leaves()
            .iter()
            .position(|d| *d == leaf)
            .ok_or(MerkleError::LeafNotFound { leaf })?;
        self.prove_index(index)
    }

    pub fn prove_index(&self, index: usize) -> Result<Proof, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }
        let levels = self.levels();
        let mut steps = Vec::with_capacity(self.height());
        let mut idx = index;
        for (depth, level) in levels[..levels.len() - 1].iter().enumerate() {
            let sibling = idx ^ 1;
            match level.get(sibling) {
                Some(digest) => {
                    let side = if idx % 2 == 0 { Side::Right } else { Side::Left };
                    steps.push(ProofStep { side, digest: *digest });
                }
                None => trace!("level {depth}: node {idx} carried up, no sibling"),
            }
            idx >>= 1;
        }
        Ok(Proof { steps })
    }
}
