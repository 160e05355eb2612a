//! Integration tests for exact trie operations: insertion, deletion with
//! restructuring, prefix queries, merge policies, and statistics.

use fuzzytrie::prelude::*;

// ============================================================================
// Insertion & structure
// ============================================================================

#[test]
fn prefix_split_produces_single_branch_node() {
    let mut trie = Trie::new();
    trie.add("car", ());
    trie.add("care", ());
    trie.add("cart", ());

    // Exactly one node reachable via "car" from the root, itself a word,
    // with exactly two children "e" and "t".
    let edges: Vec<&str> = trie.root().edges().map(|(label, _)| label).collect();
    assert_eq!(edges, ["car"]);

    let (_, car_node) = trie.root().edges().next().unwrap();
    assert!(car_node.is_word());
    assert_eq!(car_node.child_count(), 2);

    let child_labels: Vec<&str> = car_node.edges().map(|(label, _)| label).collect();
    assert_eq!(child_labels, ["e", "t"]);
    assert_eq!(trie.len(), 3);
}

#[test]
fn divergence_splits_edge_into_shared_prefix() {
    let mut trie = Trie::new();
    trie.add("apple", ());
    trie.add("apply", ());

    let (label, node) = trie.root().edges().next().unwrap();
    assert_eq!(label, "appl");
    assert!(!node.is_word());
    assert_eq!(node.child_count(), 2);
}

#[test]
fn insertion_order_does_not_change_structure() {
    let words = ["app", "apple", "apply", "apt", "bat", "batch"];
    let forward = Trie::from_terms(words);
    let mut reversed = words;
    reversed.reverse();
    let backward = Trie::from_terms(reversed);

    assert_eq!(forward, backward);
}

#[test]
fn word_that_is_prefix_of_existing_word() {
    let mut trie = Trie::new();
    trie.add("apple", ());
    trie.add("app", ());

    assert!(trie.contains("app"));
    assert!(trie.contains("apple"));
    assert_eq!(trie.len(), 2);

    // "app" landed on the split point, not a separate sibling.
    let (label, node) = trie.root().edges().next().unwrap();
    assert_eq!(label, "app");
    assert!(node.is_word());
}

#[test]
fn unicode_words() {
    let mut trie = Trie::new();
    trie.add("café", ());
    trie.add("cañón", ());

    assert!(trie.contains("café"));
    assert!(trie.contains("cañón"));
    assert!(!trie.contains("ca"));

    let words: Vec<String> = trie.words().collect();
    assert_eq!(words.len(), 2);
}

// ============================================================================
// Deletion & restructuring
// ============================================================================

#[test]
fn removal_restructures_to_fresh_equivalent() {
    let mut trie = Trie::from_terms(["apple", "apply"]);
    assert!(trie.remove("apple"));

    assert!(!trie.contains("apple"));
    assert!(trie.contains("apply"));
    assert_eq!(trie.len(), 1);

    // No dangling single-child pass-through node remains: the result is
    // structurally identical to a trie built fresh with just "apply".
    assert_eq!(trie, Trie::from_terms(["apply"]));
}

#[test]
fn removing_missing_word_is_a_noop() {
    let mut trie = Trie::from_terms(["apple"]);
    assert!(!trie.remove("app"));
    assert!(!trie.remove("apples"));
    assert!(!trie.remove("banana"));
    assert_eq!(trie.len(), 1);
    assert!(trie.contains("apple"));
}

#[test]
fn removing_prefix_word_keeps_longer_word() {
    let mut trie = Trie::from_terms(["app", "apple"]);
    assert!(trie.remove("app"));

    assert!(trie.contains("apple"));
    assert!(!trie.contains("app"));
    assert_eq!(trie, Trie::from_terms(["apple"]));
}

#[test]
fn removing_leaf_keeps_branch_word() {
    let mut trie = Trie::from_terms(["app", "apple"]);
    assert!(trie.remove("apple"));

    assert!(trie.contains("app"));
    assert_eq!(trie, Trie::from_terms(["app"]));
}

#[test]
fn remove_everything_leaves_empty_trie() {
    let words = ["a", "ab", "abc", "b", "ba", "cc"];
    let mut trie = Trie::from_terms(words);

    for word in words {
        assert!(trie.remove(word), "failed to remove {word}");
    }

    assert!(trie.is_empty());
    assert!(trie.root().is_leaf());
    assert_eq!(trie, Trie::new());
}

#[test]
fn readd_after_remove() {
    let mut trie = Trie::from_terms(["cat", "cats"]);
    trie.remove("cat");
    assert!(trie.add("cat", ()));
    assert!(trie.contains("cat"));
    assert_eq!(trie, Trie::from_terms(["cat", "cats"]));
}

// ============================================================================
// Prefix queries
// ============================================================================

#[test]
fn starts_with_exact_boundary() {
    let trie = Trie::from_terms(["app", "apple", "apply", "apt", "banana"]);

    let mut hits: Vec<String> = trie.starts_with("app").map(|(word, _)| word).collect();
    hits.sort();
    assert_eq!(hits, ["app", "apple", "apply"]);
}

#[test]
fn starts_with_inside_edge_label() {
    let trie = Trie::from_terms(["apple", "apply", "banana"]);

    // "ap" stops mid-label; the matching child subtree is still found.
    let mut hits: Vec<String> = trie.starts_with("ap").map(|(word, _)| word).collect();
    hits.sort();
    assert_eq!(hits, ["apple", "apply"]);
}

#[test]
fn starts_with_empty_prefix_yields_all() {
    let trie = Trie::from_terms(["a", "b", "c"]);
    let hits: Vec<String> = trie.starts_with("").map(|(word, _)| word).collect();
    assert_eq!(hits.len(), 3);
}

#[test]
fn starts_with_no_matches() {
    let trie = Trie::from_terms(["apple"]);
    assert_eq!(trie.starts_with("b").count(), 0);
    assert_eq!(trie.starts_with("applesauce").count(), 0);
}

#[test]
fn prefixes_of_collects_in_root_to_leaf_order() {
    let trie = Trie::from_terms(["a", "ab", "abc", "b", "abcdx"]);

    let found: Vec<String> = trie
        .prefixes_of("abcd")
        .into_iter()
        .map(|(word, _)| word)
        .collect();
    assert_eq!(found, ["a", "ab", "abc"]);
}

#[test]
fn prefix_symmetry() {
    let trie = Trie::from_terms(["app", "apple"]);

    let prefixes: Vec<String> = trie
        .prefixes_of("apple")
        .into_iter()
        .map(|(word, _)| word)
        .collect();
    assert!(prefixes.contains(&"app".to_string()));

    let extensions: Vec<String> = trie.starts_with("app").map(|(word, _)| word).collect();
    assert!(extensions.contains(&"apple".to_string()));
}

// ============================================================================
// Merge policies & attributes
// ============================================================================

#[test]
fn overwrite_policy_keeps_last_payload() {
    let mut trie = Trie::with_values();
    assert!(trie.add("cat", "first"));
    assert!(!trie.add("cat", "second"));
    assert_eq!(trie.get("cat"), Some(&"second"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn count_policy_accumulates_frequencies() {
    let mut trie = Trie::with_policy(Count);
    trie.add("the", 1u64);
    trie.add("the", 1u64);
    trie.add("the", 3u64);
    trie.add("cat", 1u64);

    assert_eq!(trie.get("the"), Some(&5));
    assert_eq!(trie.get("cat"), Some(&1));
    assert_eq!(trie.len(), 2);
}

#[test]
fn accumulate_policy_collects_labels() {
    let mut trie = Trie::with_policy(Accumulate);
    trie.add("bank", vec!["river"]);
    trie.add("bank", vec!["money"]);

    assert_eq!(trie.get("bank"), Some(&vec!["river", "money"]));
    assert_eq!(trie.len(), 1);
}

#[test]
fn closure_policy() {
    let keep_smallest = |existing: &mut u32, incoming: u32| {
        *existing = (*existing).min(incoming);
    };
    let mut trie = Trie::with_policy(keep_smallest);
    trie.add("x", 9u32);
    trie.add("x", 4u32);
    trie.add("x", 7u32);

    assert_eq!(trie.get("x"), Some(&4));
}

// ============================================================================
// Tagged construction & stats
// ============================================================================

#[test]
fn from_tagged_builds_attribute_trie() {
    let trie = Trie::from_tagged(["run\tverb", "dog\tnoun", "red\tadjective"], '\t').unwrap();

    assert_eq!(trie.len(), 3);
    assert_eq!(trie.get("dog").map(String::as_str), Some("noun"));
}

#[test]
fn from_tagged_reports_malformed_record() {
    let err = Trie::from_tagged(["ok\tfine", "broken-line"], '\t').unwrap_err();
    match err {
        TrieError::MalformedRecord { record, separator } => {
            assert_eq!(record, "broken-line");
            assert_eq!(separator, '\t');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn node_traversal_visits_every_node_breadth_first() {
    let trie = Trie::from_terms(["car", "care", "cart"]);

    let paths: Vec<String> = trie.root().nodes().map(|(path, _)| path).collect();
    assert_eq!(paths, ["", "car", "care", "cart"]);

    let word_count = trie
        .root()
        .nodes()
        .filter(|(_, node)| node.is_word())
        .count();
    assert_eq!(word_count, trie.len());
}

#[cfg(feature = "serde")]
#[test]
fn stats_serialize_to_json() {
    let trie = Trie::from_terms(["cat", "car"]);
    let json = serde_json::to_string(&trie.stats()).unwrap();

    assert!(json.contains("\"num_words\":2"));
    assert!(json.contains("\"num_nodes\""));
}

#[test]
fn stats_track_counter_and_shape() {
    let mut trie = Trie::from_terms(["cat", "cats", "car", "dog"]);
    let stats = trie.stats();

    assert_eq!(stats.num_words, 4);
    assert_eq!(stats.num_words, trie.len());
    // root, "ca", "t", "r", "dog", "s"
    assert_eq!(stats.num_nodes, 6);
    assert_eq!(stats.avg_word_length, 13.0 / 4.0);

    trie.remove("dog");
    assert_eq!(trie.stats().num_words, 3);
    assert_eq!(trie.stats().num_nodes, 5);
}
