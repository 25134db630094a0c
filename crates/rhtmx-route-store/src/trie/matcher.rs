/// Trie lookup: literal descent, first-match scan, parameter extraction

use regex::Captures;

use super::TrieNode;
use crate::params::{safe_decode, Params};
use crate::pattern::PatternRecord;

/// Walks down the trie by exact literal segments
///
/// Stops at the first segment with no matching child and returns the last
/// node reached. Never fails: in the worst case the root itself is returned.
pub fn find_node<'t>(root: &'t TrieNode, path: &str) -> &'t TrieNode {
    let mut node = root;
    for segment in path.split('/') {
        match node.child(segment) {
            Some(child) => node = child,
            None => break,
        }
    }
    node
}

/// Returns the first pattern of `node` whose matcher accepts the full path
///
/// Patterns are tried in list order, so the earliest filed pattern wins
/// when several could match. `records` is the registration list the node's
/// indices point into.
pub fn match_at<'r, 'p>(
    node: &TrieNode,
    records: &'r [PatternRecord],
    path: &'p str,
) -> Option<(&'r PatternRecord, Captures<'p>)> {
    node.patterns()
        .iter()
        .filter_map(|&index| records.get(index))
        .find_map(|record| record.captures(path).map(|caps| (record, caps)))
}

/// Reads parameter values from a successful match
///
/// One entry per parameter spec, in spec order. A capture that did not
/// participate in the match yields an entry without a value. With `decode`
/// set, values are percent-decoded; a value that does not decode is kept as
/// captured.
pub fn extract_params(record: &PatternRecord, captures: &Captures<'_>, decode: bool) -> Params {
    let mut params = Params::new();
    for (i, spec) in record.param_specs().iter().enumerate() {
        let value = captures.get(i + 1).map(|m| {
            if decode {
                safe_decode(m.as_str()).into_owned()
            } else {
                m.as_str().to_string()
            }
        });
        params.insert(spec.key.clone(), value);
    }
    params
}
