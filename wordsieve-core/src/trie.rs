//! trie.rs - Code point trie holding the active vocabulary.
//!
//! Nodes own their children outright; there are no parent links, so dropping the root
//! tears the whole structure down, one node at a time. Deleting a word only clears its terminal flag unless
//! pruning is requested, in which case branches that no longer lead to any word are
//! removed on the way back up.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::fmt;

// Walks below are iterative and `Drop` is flattened: word length is bounded only by
// configuration, so nothing may recurse once per character.
#[derive(Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end_of_word: bool,
}

impl TrieNode {
    /// Single-step lookup of the child reached through `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    fn collect_words(&self, out: &mut Vec<String>) {
        let mut prefix: Vec<char> = Vec::new();
        let mut stack: Vec<(&TrieNode, usize, Option<char>)> = vec![(self, 0, None)];
        while let Some((node, depth, c)) = stack.pop() {
            prefix.truncate(depth);
            if let Some(c) = c {
                prefix.push(c);
            }
            if node.is_end_of_word {
                out.push(prefix.iter().collect());
            }
            let depth = prefix.len();
            for (&c, child) in &node.children {
                stack.push((child, depth, Some(c)));
            }
        }
    }

    fn descend_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        let mut node = self;
        for c in path {
            node = node.children.get_mut(c)?;
        }
        Some(node)
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("children", &self.children.len())
            .field("is_end_of_word", &self.is_end_of_word)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
    prune_on_remove: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trie that prunes dead branches whenever a word is removed.
    pub fn with_pruning(prune_on_remove: bool) -> Self {
        Self {
            prune_on_remove,
            ..Self::default()
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts `word`, returning true if it was not already present.
    /// An empty word is ignored.
    pub fn insert(&mut self, word: &[char]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for &c in word {
            node = node.children.entry(c).or_default();
        }
        if node.is_end_of_word {
            false
        } else {
            node.is_end_of_word = true;
            self.word_count += 1;
            true
        }
    }

    /// Removes `word`, returning true if it was present. Missing words leave the trie untouched.
    ///
    /// With pruning, the branch below the deepest node that still matters (the root, a
    /// terminal node or a fork) is dropped when the removed word was a leaf.
    pub fn remove(&mut self, word: &[char]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        let mut cut = 0;
        for (depth, c) in word.iter().enumerate() {
            if depth > 0 && (node.is_end_of_word || node.children.len() > 1) {
                cut = depth;
            }
            match node.children.get(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        if !node.is_end_of_word {
            return false;
        }
        let prune_branch = self.prune_on_remove && node.children.is_empty();

        if prune_branch {
            if let Some(keep) = self.root.descend_mut(&word[..cut]) {
                keep.children.remove(&word[cut]);
            }
        } else if let Some(terminal) = self.root.descend_mut(word) {
            terminal.is_end_of_word = false;
        }
        self.word_count -= 1;
        true
    }

    pub fn contains(&self, word: &[char]) -> bool {
        let mut node = &self.root;
        for &c in word {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        !word.is_empty() && node.is_end_of_word
    }

    /// Number of active words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, root included. Grows monotonically unless pruning is on.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// All active words, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.word_count);
        self.root.collect_words(&mut out);
        out.sort();
        out
    }
}
