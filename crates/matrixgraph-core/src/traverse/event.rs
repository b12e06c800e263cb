//! Events emitted by the stepwise traversal engine.

use std::fmt;

use serde::Serialize;

/// One discrete traversal action. Vertex indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraversalEvent {
    /// A new component sweep begins at `root`.
    StartComponent { root: usize },
    /// `node` was seen for the first time, reached from `parent` (`None` for
    /// a root). `(parent, node)` is a traversal-tree edge.
    Discover { node: usize, parent: Option<usize> },
    /// `node`'s outgoing edges are about to be examined.
    ProcessStart { node: usize },
    /// Every outgoing edge of `node` has been examined.
    ProcessFinish { node: usize },
    /// The edge `from → to` leads to a vertex already discovered.
    AlreadyKnown { from: usize, to: usize },
}

impl TraversalEvent {
    /// The tree edge this event establishes, if any.
    #[must_use]
    pub const fn tree_edge(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Discover {
                node,
                parent: Some(parent),
            } => Some((parent, node)),
            _ => None,
        }
    }
}

impl fmt::Display for TraversalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::StartComponent { root } => write!(f, "start component at {}", root + 1),
            Self::Discover { node, parent: None } => write!(f, "discover {} (root)", node + 1),
            Self::Discover {
                node,
                parent: Some(parent),
            } => write!(f, "discover {} from {}, tree edge {}-{}", node + 1, parent + 1, parent + 1, node + 1),
            Self::ProcessStart { node } => write!(f, "process {}", node + 1),
            Self::ProcessFinish { node } => write!(f, "finish {}", node + 1),
            Self::AlreadyKnown { from, to } => write!(f, "edge {}-{}: {} already known", from + 1, to + 1, to + 1),
        }
    }
}
