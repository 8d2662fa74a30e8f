// File: leafproof-merkle/src/tree.rs
use leafproof_hash::{hash_leaf, hash_pair, Digest};
use log::debug;
use rayon::prelude::*;

/// Levels at or above this many nodes are hashed on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub parallel_threshold: usize,
}

impl Default for BuildOptions {
    fn default() -> Self { Self { parallel_threshold: DEFAULT_PARALLEL_THRESHOLD } }
}

/// All levels of a built tree, leaves first. The last level holds only the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    levels: Vec<Vec<Digest>>,
}

impl Tree {
    /// Build with default options. Returns `None` for an empty batch.
    pub fn build<R: AsRef<[u8]> + Sync>(records: &[R]) -> Option<Self> {
        Self::build_with(records, &BuildOptions::default())
    }

    pub fn build_with<R: AsRef<[u8]> + Sync>(records: &[R], opts: &BuildOptions) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let leaves: Vec<Digest> = if records.len() >= opts.parallel_threshold {
            records.par_iter().map(|r| hash_leaf(r.as_ref())).collect()
        } else {
            records.iter().map(|r| hash_leaf(r.as_ref())).collect()
        };
        debug!("level 0: {} leaves", leaves.len());

        let mut levels = vec![leaves];
        while let Some(current) = levels.last().filter(|l| l.len() > 1) {
            // Indexed collect keeps pair order identical to the sequential pass.
            let next: Vec<Digest> = if current.len() >= opts.parallel_threshold {
                current.par_chunks(2).map(combine).collect()
            } else {
                current.chunks(2).map(combine).collect()
            };
            debug!("level {}: {} nodes", levels.len(), next.len());
            levels.push(next);
        }
        Some(Self { levels })
    }

    pub fn root(&self) -> Digest { self.levels[self.levels.len() - 1][0] }
    pub fn levels(&self) -> &[Vec<Digest>] { &self.levels }
    pub fn level(&self, i: usize) -> Option<&[Digest]> { self.levels.get(i).map(Vec::as_slice) }
    pub fn leaves(&self) -> &[Digest] { &self.levels[0] }
    pub fn leaf_count(&self) -> usize { self.levels[0].len() }

    /// Number of pairing rounds between leaves and root, `ceil(log2(leaf_count))`.
    pub fn height(&self) -> usize { self.levels.len() - 1 }

    /// Position of the first leaf whose hash matches `record`.
    pub fn leaf_index(&self, record: impl AsRef<[u8]>) -> Option<usize> {
        let h = hash_leaf(record.as_ref());
        self.leaves().iter().position(|d| *d == h)
    }
}

// A chunk of one is the trailing node of an odd level; it moves up as is.
fn combine(chunk: &[Digest]) -> Digest {
    match chunk {
        [left, right] => hash_pair(left, right),
        _ => chunk[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_no_tree() {
        let empty: [&str; 0] = [];
        assert!(Tree::build(&empty).is_none());
    }

    #[test]
    fn single_leaf_is_root() {
        let tree = Tree::build(&["x"]).unwrap();
        assert_eq!(tree.root(), hash_leaf(b"x"));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.levels().len(), 1);
    }

    #[test]
    fn three_leaves_carry_the_last_one_up() {
        let tree = Tree::build(&["a", "b", "c"]).unwrap();
        let (ha, hb, hc) = (hash_leaf(b"a"), hash_leaf(b"b"), hash_leaf(b"c"));
        assert_eq!(tree.level(0).unwrap(), &[ha, hb, hc]);
        let ab = hash_pair(&ha, &hb);
        assert_eq!(tree.level(1).unwrap(), &[ab, hc]);
        assert_eq!(tree.root(), hash_pair(&ab, &hc));
        assert_eq!(
            tree.root().to_hex(),
            "d71dc32fa2cd95be60b32dbb3e63009fa8064407ee19f457c92a09a5ff841a8a"
        );
        assert!(tree.level(3).is_none());
    }

    #[test]
    fn five_leaves_carry_once_per_odd_level() {
        let recs = ["1", "2", "3", "4", "5"];
        let tree = Tree::build(&recs).unwrap();
        let lens: Vec<usize> = tree.levels().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![5, 3, 2, 1]);
        assert_eq!(tree.level(1).unwrap()[2], tree.level(0).unwrap()[4]);
        assert_eq!(tree.level(2).unwrap()[1], tree.level(1).unwrap()[2]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn level_lengths_halve_and_height_is_ceil_log2() {
        for n in 1usize..=130 {
            let recs: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            let tree = Tree::build(&recs).unwrap();
            for w in tree.levels().windows(2) {
                assert_eq!(w[1].len(), w[0].len().div_ceil(2));
            }
            assert_eq!(tree.levels().last().unwrap().len(), 1);
            assert_eq!(tree.height(), n.next_power_of_two().trailing_zeros() as usize, "n={n}");
            assert_eq!(tree.leaf_count(), n);
        }
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let recs: Vec<Vec<u8>> = (0..1000u32).map(|i| i.to_le_bytes().to_vec()).collect();
        let seq = Tree::build_with(&recs, &BuildOptions { parallel_threshold: usize::MAX }).unwrap();
        let par = Tree::build_with(&recs, &BuildOptions { parallel_threshold: 1 }).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn leaf_index_returns_first_match() {
        let tree = Tree::build(&["a", "b", "a"]).unwrap();
        assert_eq!(tree.leaf_index("a"), Some(0));
        assert_eq!(tree.leaf_index("b"), Some(1));
        assert_eq!(tree.leaf_index("z"), None);
    }
}
