//! Prefix trie over lower-cased tag strings.

use std::collections::{BTreeSet, HashMap};

/// Trie node: child edges keyed by character, plus every complete word whose
/// path runs through this node. Accumulating words at every node (not just
/// leaves) makes suggestion lookup O(prefix length) with no subtree walk.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    words: BTreeSet<String>,
}

/// Case-insensitive autocomplete index over tag strings.
///
/// Tags are lower-cased on insertion, so matching is case-insensitive by
/// construction. The trie only ever grows: it records the union of tags ever
/// inserted, serving as a historical autocomplete corpus.
#[derive(Debug, Default)]
pub struct TagTrie {
    root: TrieNode,
}

impl TagTrie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, lower-cased. Blank tags are ignored and re-inserting
    /// an existing tag is a no-op (set semantics per node).
    pub fn insert(&mut self, tag: &str) {
        let word = tag.to_lowercase();
        if word.trim().is_empty() {
            return;
        }
        let mut node = &mut self.root;
        node.words.insert(word.clone());
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
            node.words.insert(word.clone());
        }
    }

    /// Returns every stored tag starting with the lower-cased prefix.
    ///
    /// A prefix whose path does not exist yields an empty vector. The empty
    /// prefix lands on the root and therefore yields the full corpus.
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let needle = prefix.to_lowercase();
        let mut node = &self.root;
        for ch in needle.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        node.words.iter().cloned().collect()
    }

    /// Returns the number of distinct tags ever inserted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.words.len()
    }

    /// Returns whether no tag has ever been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.words.is_empty()
    }
}
