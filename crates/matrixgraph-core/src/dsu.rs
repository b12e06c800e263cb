//! Disjoint-set union (union-find) with path compression and union by rank.
//!
//! Indices must lie in `0..n`; anything else is a caller bug and panics.

/// Union-find over the vertices `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `node`'s set. Every node on the walked path is re-pointed
    /// directly at the root.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in `0..n`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`. Returns `false` when they already
    /// share a root.
    ///
    /// The lower-rank root is attached under the higher-rank one. On equal
    /// rank, `b`'s root goes under `a`'s root and `a`'s root gains a rank.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is not in `0..n`.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of distinct sets.
    pub fn set_count(&mut self) -> usize {
        (0..self.len()).filter(|&i| self.find(i) == i).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut d = DisjointSet::new(3);
        for i in 0..3 {
            assert_eq!(d.find(i), i);
        }
        assert_eq!(d.set_count(), 3);
    }

    #[test]
    fn union_reports_merge() {
        let mut d = DisjointSet::new(4);
        assert!(d.union(0, 1));
        assert!(!d.union(1, 0));
        assert!(d.same_set(0, 1));
        assert!(!d.same_set(0, 2));
        assert_eq!(d.set_count(), 3);
    }

    #[test]
    fn equal_rank_tie_roots_at_first_argument() {
        let mut d = DisjointSet::new(2);
        d.union(0, 1);
        assert_eq!(d.find(1), 0);
        assert_eq!(d.rank[0], 1);
    }

    #[test]
    fn lower_rank_attaches_under_higher() {
        let mut d = DisjointSet::new(3);
        d.union(0, 1); // root 0, rank 1
        d.union(2, 0); // rank(2) = 0 < rank(0) = 1
        assert_eq!(d.find(2), 0);
        assert_eq!(d.rank[0], 1);
    }

    #[test]
    fn find_compresses_paths() {
        let mut d = DisjointSet::new(4);
        d.union(0, 1);
        d.union(2, 3);
        d.union(0, 2); // 2's root (2) goes under 0
        // 3 → 2 → 0 before compression
        let root = d.find(3);
        assert_eq!(root, 0);
        assert_eq!(d.parent[3], 0);
        assert_eq!(d.parent[root], root);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let mut d = DisjointSet::new(2);
        d.find(2);
    }
}
