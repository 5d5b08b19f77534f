//! Persistent tries.
//!
//! [`TrieMap`] is a string-keyed map whose nodes are shared between index
//! versions through `Arc`. A mutation copies only the root-to-key path it
//! touches (`Arc::make_mut`); sibling subtrees stay shared, and an older
//! version held elsewhere never observes the change. When the path is not
//! shared (a version being built in place) nothing is copied at all.
//!
//! [`PostingsTrie`] maps a token to its postings. The postings are a
//! `TrieMap` of their own keyed by document reference, so adding a document
//! to a token held by thousands of others copies one short path instead of
//! the whole posting list.

use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
struct Node<V> {
    value: Option<V>,
    children: BTreeMap<char, Arc<Node<V>>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node {
            value: None,
            children: BTreeMap::new(),
        }
    }
}

impl<V> Node<V> {
    fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

/// A persistent map from string keys to `V`, iterated in key order.
#[derive(Clone, Debug, PartialEq)]
pub struct TrieMap<V> {
    root: Arc<Node<V>>,
    len: usize,
}

impl<V> Default for TrieMap<V> {
    fn default() -> Self {
        TrieMap {
            root: Arc::default(),
            len: 0,
        }
    }
}

impl<V> TrieMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        TrieMap::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, key: &str) -> Option<&Node<V>> {
        let mut node: &Node<V> = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.node(key)?.value.as_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            stack: vec![(String::new(), self.root.as_ref())],
        }
    }

    /// Entries whose key starts with `prefix`, in key order.
    pub fn iter_prefix(&self, prefix: &str) -> Iter<'_, V> {
        Iter {
            stack: self
                .node(prefix)
                .map(|node| (prefix.to_string(), node))
                .into_iter()
                .collect(),
        }
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl<V: Clone> TrieMap<V> {
    /// Uniquely owned slot for `key`, copying shared nodes along the path.
    fn slot(&mut self, key: &str) -> &mut Option<V> {
        let mut node = Arc::make_mut(&mut self.root);
        for ch in key.chars() {
            node = Arc::make_mut(node.children.entry(ch).or_default());
        }
        &mut node.value
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let previous = self.slot(key).replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Mutable access to the value under `key`, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if !self.contains_key(key) {
            return None;
        }
        self.slot(key).as_mut()
    }

    /// Mutable access to the value under `key`, inserting `V::default()` first
    /// when absent.
    pub fn get_or_insert_default(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        if !self.contains_key(key) {
            self.len += 1;
        }
        self.slot(key).get_or_insert_with(V::default)
    }

    /// Remove `key`, pruning nodes left without value or children.
    ///
    /// Nothing is copied when the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        if !self.contains_key(key) {
            return None;
        }
        let path: Vec<char> = key.chars().collect();
        let removed = Self::remove_along(&mut self.root, &path);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_along(node: &mut Arc<Node<V>>, path: &[char]) -> Option<V> {
        let node = Arc::make_mut(node);
        match path.split_first() {
            None => node.value.take(),
            Some((ch, rest)) => {
                let child = node.children.get_mut(ch)?;
                let removed = Self::remove_along(child, rest);
                if child.is_empty() {
                    node.children.remove(ch);
                }
                removed
            }
        }
    }
}

/// Key-ordered iterator over a [`TrieMap`].
pub struct Iter<'a, V> {
    stack: Vec<(String, &'a Node<V>)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            for (ch, child) in node.children.iter().rev() {
                let mut child_key = key.clone();
                child_key.push(*ch);
                self.stack.push((child_key, &**child));
            }
            if let Some(value) = &node.value {
                return Some((key, value));
            }
        }
        None
    }
}

/// Postings of one token: document reference → term score.
pub type Postings = TrieMap<f64>;

/// A trie of postings keyed by token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostingsTrie {
    tokens: TrieMap<Postings>,
}

impl PostingsTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        PostingsTrie::default()
    }

    /// Insert or replace the posting of `reference` under `token`.
    ///
    /// A token holds at most one score per reference.
    pub fn add(&mut self, token: &str, reference: &str, score: f64) {
        self.tokens
            .get_or_insert_default(token)
            .insert(reference, score);
    }

    /// Remove the posting of `reference` under `token`.
    ///
    /// A token left without postings is removed. Returns `false` when there
    /// was no such posting, in which case nothing is copied.
    pub fn remove(&mut self, token: &str, reference: &str) -> bool {
        let Some(postings) = self
            .tokens
            .get(token)
            .filter(|postings| postings.contains_key(reference))
        else {
            return false;
        };

        if postings.len() == 1 {
            self.tokens.remove(token);
        } else if let Some(postings) = self.tokens.get_mut(token) {
            postings.remove(reference);
        }
        true
    }

    /// True iff `token` has at least one posting.
    pub fn has(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    /// The postings of `token`, or `None` when it has none.
    pub fn postings(&self, token: &str) -> Option<&Postings> {
        self.tokens.get(token)
    }

    /// Score of `reference` under `token`.
    pub fn score(&self, token: &str, reference: &str) -> Option<f64> {
        self.postings(token)?.get(reference).copied()
    }

    /// Number of documents with a posting for `token`.
    pub fn document_frequency(&self, token: &str) -> usize {
        self.postings(token).map_or(0, Postings::len)
    }

    /// Every token with postings that starts with `prefix`, in lexicographic order.
    pub fn tokens_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.tokens.iter_prefix(prefix).map(|(token, _)| token).collect()
    }

    /// Every token with postings, in lexicographic order.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.keys().collect()
    }

    /// True when no token has postings.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
