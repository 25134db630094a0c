/// Trie module: the compressed prefix tree behind the store
///
/// Patterns are filed under the literal segments of their constant prefix,
/// so a lookup only runs the matchers of patterns that share the path's
/// leading literal segments.
///
/// ```text
/// 0: /api/v1/users   1: /api/v1/users/:id   2: /health
///
/// built:                                compressed:
///   root ── "" ─┬─ api ── v1 ── users     root ── "" ─┬─ api [0, 1]
///               │              [0, 1]                 └─ health [2]
///               └─ health [2]
/// ```
///
/// - `builder` - files records under their constant prefix
/// - `compress` - collapses pattern-free single-child chains
/// - `matcher` - literal descent, first-match scan, parameter extraction

pub mod builder;
pub mod compress;
pub mod matcher;

use std::collections::HashMap;

pub use builder::insert;
pub use compress::compress;
pub use matcher::{extract_params, find_node, match_at};

/// A node of the route trie
///
/// `patterns` holds registration indices of the records terminating at this
/// node, in the order the builder filed them. `children` is `None` when the
/// node has no children; a present map is never left empty by the builder or
/// the compressor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    pub(crate) patterns: Vec<usize>,
    pub(crate) children: Option<HashMap<String, TrieNode>>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration indices of the patterns terminating here
    pub fn patterns(&self) -> &[usize] {
        &self.patterns
    }

    pub fn children(&self) -> Option<&HashMap<String, TrieNode>> {
        self.children.as_ref()
    }

    /// Child filed under an exact literal segment
    pub fn child(&self, segment: &str) -> Option<&TrieNode> {
        self.children.as_ref()?.get(segment)
    }

    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, HashMap::len)
    }

    /// Whether the node has no children map at all
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(HashMap::values)
            .map(TrieNode::node_count)
            .sum::<usize>()
    }
}
