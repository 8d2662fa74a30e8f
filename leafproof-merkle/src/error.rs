use leafproof_hash::Digest;
use thiserror::Error;

/// Failures surfaced by proof generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MerkleError {
    #[error("leaf not found in tree (hash {leaf})")]
    LeafNotFound { leaf: Digest },
    #[error("leaf index {index} out of range for {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },
}
