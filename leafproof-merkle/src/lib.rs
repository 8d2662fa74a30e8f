// File: leafproof-merkle/src/lib.rs
//! Layered Merkle tree over an ordered batch of records.
//!
//! Leaves are `hash_leaf(record)`. Each level pairs neighbours left to right;
//! a trailing unpaired node is carried up unchanged instead of being hashed
//! with itself. Every level is kept so inclusion proofs can be read straight
//! off the tree.

mod error;
mod proof;
mod tree;
mod verify;

pub use error::MerkleError;
pub use leafproof_hash::{hash_leaf, hash_pair, Digest, DIGEST_LEN};
pub use proof::{Proof, ProofStep, Side};
pub use tree::{BuildOptions, Tree, DEFAULT_PARALLEL_THRESHOLD};
pub use verify::{compute_root, verify, verify_unsided};
