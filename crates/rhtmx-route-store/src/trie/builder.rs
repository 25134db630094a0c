/// Trie construction: filing records under their constant prefix

use std::collections::HashMap;

use super::TrieNode;
use crate::pattern::PatternRecord;

/// Files one record under the literal segments of its constant prefix
///
/// The prefix is split on `/` and one child per segment is descended into,
/// created on first use. The record's index is appended at the last node.
/// A pattern starting with a parameter has an empty prefix and is filed
/// under the `""` child of `node`.
///
/// Callers insert records in registration order so that every node's
/// pattern list is in registration order too.
pub fn insert(node: &mut TrieNode, record: &PatternRecord) {
    let node = record
        .constant_prefix()
        .split('/')
        .fold(node, |node, segment| {
            node.children
                .get_or_insert_with(HashMap::new)
                .entry(segment.to_string())
                .or_default()
        });

    node.patterns.push(record.index());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, index: usize) -> PatternRecord {
        PatternRecord::compile(path, index, false).unwrap()
    }

    #[test]
    fn test_insert_static() {
        let mut root = TrieNode::new();
        insert(&mut root, &record("foo/bar", 0));

        let bar = root.child("foo").and_then(|n| n.child("bar")).unwrap();
        assert_eq!(bar.patterns(), &[0]);
        assert!(bar.is_leaf());
        assert!(root.patterns().is_empty());
    }

    #[test]
    fn test_insert_leading_slash_uses_empty_segment() {
        let mut root = TrieNode::new();
        insert(&mut root, &record("/about", 0));

        let about = root.child("").and_then(|n| n.child("about")).unwrap();
        assert_eq!(about.patterns(), &[0]);
    }

    #[test]
    fn test_insert_param_first_goes_under_empty_key() {
        let mut root = TrieNode::new();
        insert(&mut root, &record(":lang/docs", 0));

        assert_eq!(root.child_count(), 1);
        assert_eq!(root.child("").unwrap().patterns(), &[0]);
    }

    #[test]
    fn test_insert_uses_prefix_only() {
        let mut root = TrieNode::new();
        insert(&mut root, &record("/users/:id/posts", 0));

        // Everything after the first parameter is ignored
        let users = root.child("").and_then(|n| n.child("users")).unwrap();
        assert_eq!(users.patterns(), &[0]);
        assert!(users.is_leaf());
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut root = TrieNode::new();
        insert(&mut root, &record("/users/:id", 0));
        insert(&mut root, &record("/users/new", 1));
        insert(&mut root, &record("/users/:name", 2));

        let users = root.child("").and_then(|n| n.child("users")).unwrap();
        assert_eq!(users.patterns(), &[0, 2]);
        assert_eq!(users.child("new").unwrap().patterns(), &[1]);
    }
}
