//! Strongly connected components read off the strong-connectivity matrix.

use fixedbitset::FixedBitSet;
use serde::Serialize;

use crate::reach::closure::StrongConnectivity;

/// One strongly connected component: sorted, deduplicated 0-based members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Component {
    members: Vec<usize>,
}

impl Component {
    fn new(mut members: Vec<usize>) -> Self {
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    /// Members in ascending order.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.members.binary_search(&vertex).is_ok()
    }

    /// `true` when the component holds more than one vertex.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.members.len() > 1
    }

    /// 1-based members joined by commas, e.g. `"1,2,3"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.members
            .iter()
            .map(|v| (v + 1).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Components ordered by their smallest member.
pub type SccList = Vec<Component>;

/// Partition vertices into SCCs.
///
/// Scans vertices in ascending order; the first unvisited vertex `i` yields
/// the component `{ j : S[i][j] }`, whose members are then marked visited.
/// Because `S` is an equivalence relation this row is exactly `i`'s class,
/// and components come out ordered by smallest member.
#[must_use]
pub fn extract_sccs(strong: &StrongConnectivity) -> SccList {
    let n = strong.size();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut sccs = Vec::new();

    for i in 0..n {
        if visited.contains(i) {
            continue;
        }
        let members: Vec<usize> = strong.matrix().successors(i).collect();
        for &member in &members {
            visited.insert(member);
        }
        sccs.push(Component::new(members));
    }

    sccs
}

/// For each vertex, the index of its component in `sccs`.
///
/// # Panics
///
/// Panics if `sccs` references a vertex outside `0..n`.
#[must_use]
pub fn component_index(n: usize, sccs: &[Component]) -> Vec<usize> {
    let mut index = vec![usize::MAX; n];
    for (c, component) in sccs.iter().enumerate() {
        for &v in component.members() {
            index[v] = c;
        }
    }
    index
}
