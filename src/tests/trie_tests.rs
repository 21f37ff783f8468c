//! Tests for the tag suggestion trie.

use crate::index::TagTrie;
use rstest::{fixture, rstest};

#[fixture]
fn trie() -> TagTrie {
    let mut trie = TagTrie::new();
    trie.insert("work");
    trie.insert("urgent");
    trie.insert("urban-garden");
    trie
}

#[rstest]
fn suggest_returns_all_words_under_the_prefix(trie: TagTrie) {
    let suggestions = trie.suggest("ur");
    assert_eq!(suggestions, vec!["urban-garden".to_owned(), "urgent".to_owned()]);
}

#[rstest]
fn suggest_with_full_word_still_matches(trie: TagTrie) {
    assert_eq!(trie.suggest("urgent"), vec!["urgent".to_owned()]);
}

#[rstest]
fn suggest_missing_path_yields_empty(trie: TagTrie) {
    assert!(trie.suggest("xx").is_empty());
    assert!(trie.suggest("urgently").is_empty());
}

#[rstest]
fn matching_is_case_insensitive_both_ways(trie: TagTrie) {
    assert_eq!(trie.suggest("UR").len(), 2);

    let mut mixed = TagTrie::new();
    mixed.insert("WorkTrip");
    assert_eq!(mixed.suggest("work"), vec!["worktrip".to_owned()]);
}

#[rstest]
fn empty_prefix_returns_the_full_corpus(trie: TagTrie) {
    assert_eq!(trie.suggest("").len(), 3);
}

#[rstest]
fn reinsertion_is_a_no_op(mut trie: TagTrie) {
    trie.insert("work");
    trie.insert("WORK");
    assert_eq!(trie.len(), 3);
    assert_eq!(trie.suggest("work"), vec!["work".to_owned()]);
}

#[rstest]
fn blank_tags_are_ignored() {
    let mut trie = TagTrie::new();
    trie.insert("");
    trie.insert("   ");
    assert!(trie.is_empty());
    assert!(trie.suggest("").is_empty());
}
