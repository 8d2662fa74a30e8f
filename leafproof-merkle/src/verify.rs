// File: leafproof-merkle/src/verify.rs
use crate::{Proof, Side};
use leafproof_hash::{hash_leaf, hash_pair, Digest};

/// Fold a leaf hash through the proof steps.
pub fn compute_root(leaf: Digest, proof: &Proof) -> Digest {
    proof.steps().iter().fold(leaf, |acc, step| match step.side {
        Side::Right => hash_pair(&acc, &step.digest),
        Side::Left => hash_pair(&step.digest, &acc),
    })
}

/// True iff `record` with `proof` recomputes `root`. Never fails; a bad
/// proof is just `false`.
pub fn verify(record: impl AsRef<[u8]>, proof: &Proof, root: &Digest) -> bool {
    compute_root(hash_leaf(record.as_ref()), proof) == *root
}

/// Verify an untagged sibling list, always hashing `(running, sibling)`.
///
/// Only holds for leaves whose every sibling is on the right (leaf 0 of a
/// batch); use [`verify`] with a tagged [`Proof`] otherwise.
pub fn verify_unsided(record: impl AsRef<[u8]>, siblings: &[Digest], root: &Digest) -> bool {
    let computed = siblings
        .iter()
        .fold(hash_leaf(record.as_ref()), |acc, sib| hash_pair(&acc, sib));
    computed == *root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tree;

    #[test]
    fn abc_every_leaf_verifies() {
        let tree = Tree::build(&["a", "b", "c"]).unwrap();
        let root = tree.root();
        for r in ["a", "b", "c"] {
            let proof = tree.prove_inclusion(r).unwrap();
            assert!(verify(r, &proof, &root), "{r}");
        }
        let proof_c = tree.prove_inclusion("c").unwrap();
        assert!(!verify("a", &proof_c, &root));
        assert!(!verify("d", &proof_c, &root));
    }

    #[test]
    fn single_leaf_verifies_against_its_own_hash() {
        assert!(verify("x", &Proof::default(), &hash_leaf(b"x")));
        assert!(!verify("y", &Proof::default(), &hash_leaf(b"x")));
    }

    #[test]
    fn unsided_only_holds_for_right_hand_paths() {
        let tree = Tree::build(&["a", "b", "c", "d"]).unwrap();
        let root = tree.root();
        let first = tree.prove_index(0).unwrap();
        assert!(verify_unsided("a", &first.siblings(), &root));
        let last = tree.prove_index(3).unwrap();
        assert!(!verify_unsided("d", &last.siblings(), &root));
        assert!(verify("d", &last, &root));
    }

    #[test]
    fn flipped_side_fails() {
        let tree = Tree::build(&["a", "b"]).unwrap();
        let proof = tree.prove_index(1).unwrap();
        let mut steps = proof.steps().to_vec();
        steps[0].side = Side::Right;
        assert!(!verify("b", &Proof::new(steps), &tree.root()));
    }
}
