/// Trie compression: collapsing pattern-free single-child chains
///
/// A node is merged into its parent when the parent has no patterns, the
/// node is the parent's only child, and the node itself has no children.
/// The parent takes over the node's patterns and loses its children map.
///
/// The pass is post-order: a child's subtree is compressed before the merge
/// condition is checked for that child, so a chain of any length collapses
/// into its topmost pattern-free ancestor in a single pass.
///
/// Lookups are unaffected: the literal walk stops at the parent instead of
/// the child and finds the same pattern list there.

use super::TrieNode;

/// Compresses the subtree rooted at `node` in place
///
/// The root itself is never merged away, since it has no parent.
pub fn compress(node: &mut TrieNode) {
    if let Some(children) = node.children.as_mut() {
        children.values_mut().for_each(compress);
    }

    if let Some(patterns) = take_only_leaf(node) {
        node.children = None;
        node.patterns = patterns;
    }
}

/// Patterns of `parent`'s only child, when that child can be merged
fn take_only_leaf(parent: &mut TrieNode) -> Option<Vec<usize>> {
    if !parent.patterns.is_empty() {
        return None;
    }

    let children = parent.children.as_mut()?;
    if children.len() != 1 {
        return None;
    }

    children
        .values_mut()
        .next()
        .filter(|only| only.is_leaf())
        .map(|only| std::mem::take(&mut only.patterns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternRecord;
    use crate::trie::insert;

    fn build(paths: &[&str]) -> TrieNode {
        let mut root = TrieNode::new();
        for (index, path) in paths.iter().enumerate() {
            insert(&mut root, &PatternRecord::compile(path, index, false).unwrap());
        }
        compress(&mut root);
        root
    }

    /// A pattern-free node with a single child never keeps that child as a leaf
    fn assert_compressed(node: &TrieNode) {
        if let Some(children) = node.children() {
            assert!(!children.is_empty());
            if node.patterns().is_empty() && children.len() == 1 {
                let only = children.values().next().unwrap();
                assert!(!only.is_leaf(), "mergeable leaf left under a pattern-free parent");
            }
            children.values().for_each(assert_compressed);
        }
    }

    #[test]
    fn test_single_chain_collapses_into_root() {
        let root = build(&["/a/b/c/d"]);
        assert!(root.is_leaf());
        assert_eq!(root.patterns(), &[0]);
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn test_chain_collapses_up_to_branch() {
        let root = build(&["/api/v1/users", "/api/v1/users/:id", "/health"]);

        let empty = root.child("").unwrap();
        assert_eq!(empty.child_count(), 2);

        let api = empty.child("api").unwrap();
        assert!(api.is_leaf());
        assert_eq!(api.patterns(), &[0, 1]);
        assert_eq!(empty.child("health").unwrap().patterns(), &[2]);
        assert_compressed(&root);
    }

    #[test]
    fn test_node_with_patterns_is_not_replaced() {
        let root = build(&["/users", "/users/new"]);

        // `users` holds a pattern, so its `new` child stays
        let users = root.child("").and_then(|n| n.child("users")).unwrap();
        assert_eq!(users.patterns(), &[0]);
        assert_eq!(users.child("new").unwrap().patterns(), &[1]);
        assert_compressed(&root);
    }

    #[test]
    fn test_branching_node_is_kept() {
        let root = build(&["foo/bar", "foo/baz"]);

        let foo = root.child("foo").unwrap();
        assert_eq!(foo.child_count(), 2);
        assert_eq!(foo.child("bar").unwrap().patterns(), &[0]);
        assert_eq!(foo.child("baz").unwrap().patterns(), &[1]);
        assert_compressed(&root);
    }

    #[test]
    fn test_compress_is_stable() {
        let mut root = build(&["/a/b", "/a/c/d", "/e"]);
        let once = root.clone();
        compress(&mut root);
        assert_eq!(root, once);
    }

    #[test]
    fn test_compress_empty_root() {
        let mut root = TrieNode::new();
        compress(&mut root);
        assert_eq!(root, TrieNode::new());
    }
}
