//! Abbreviation trie keyed by tokens
//!
//! Keys are token sequences, so every trie node stands for one non-empty
//! prefix of some key. Walking the trie one token at a time answers both
//! "is this still a prefix?" and "is this a complete key?" without building
//! intermediate tuples.

use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// Handle to a trie node, valid only for the table that produced it
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NodeId(u32);

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: token -> node index
    children: HashMap<String, u32>,
    /// Replacement string when this node ends a key
    canonical: Option<String>,
}

/// Immutable mapping from token sequences to canonical tokens
///
/// Built once, then shared read-only (typically behind an `Arc`) by every
/// resolver that needs it.
#[derive(Debug, Clone)]
pub struct AbbreviationTable {
    /// All nodes in contiguous storage; index 0 is the root
    nodes: Vec<TrieNode>,
    code: String,
    name: String,
    len: usize,
    max_key_len: usize,
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AbbreviationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            code: String::new(),
            name: String::new(),
            len: 0,
            max_key_len: 0,
        }
    }

    /// Build a table from `(tokens, canonical)` pairs
    ///
    /// Entries are validated the same way as entries read from TOML.
    pub fn from_entries<I, S, C>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vec<S>, C)>,
        S: AsRef<str>,
        C: Into<String>,
    {
        let mut table = Self::new();
        for (index, (tokens, canonical)) in entries.into_iter().enumerate() {
            table.insert_checked(index, &tokens, canonical.into())?;
        }
        Ok(table)
    }

    pub(crate) fn set_metadata(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.code = code.into();
        self.name = name.into();
    }

    /// Validate and insert one entry
    pub(crate) fn insert_checked<S: AsRef<str>>(
        &mut self,
        index: usize,
        tokens: &[S],
        canonical: String,
    ) -> Result<()> {
        if tokens.is_empty() {
            return Err(CoreError::EmptyKey { index });
        }
        if tokens.iter().any(|t| t.as_ref().is_empty()) {
            return Err(CoreError::EmptyToken { index });
        }
        if canonical.is_empty() {
            return Err(CoreError::EmptyCanonical { index });
        }
        if self.insert(tokens, canonical).is_some() {
            return Err(CoreError::DuplicateEntry {
                index,
                tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
            });
        }
        Ok(())
    }

    /// Insert an abbreviation, returning the canonical form it replaced
    ///
    /// An empty token sequence is ignored.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        canonical: impl Into<String>,
    ) -> Option<String> {
        if tokens.is_empty() {
            return None;
        }

        let mut current_idx = 0u32;
        for token in tokens {
            let token = token.as_ref();
            let existing = self.nodes[current_idx as usize].children.get(token).copied();
            current_idx = match existing {
                Some(child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(token.to_string(), new_idx);
                    new_idx
                }
            };
        }

        let previous = self.nodes[current_idx as usize]
            .canonical
            .replace(canonical.into());
        if previous.is_none() {
            self.len += 1;
            self.max_key_len = self.max_key_len.max(tokens.len());
        }
        previous
    }

    /// Root of the trie (the empty prefix)
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Extend the prefix at `node` by one token
    ///
    /// Returns `None` once the extended sequence is no longer a prefix of
    /// any key.
    #[inline]
    pub fn step(&self, node: NodeId, token: &str) -> Option<NodeId> {
        self.nodes
            .get(node.0 as usize)?
            .children
            .get(token)
            .map(|&idx| NodeId(idx))
    }

    /// Canonical form if the prefix at `node` is a complete key
    #[inline]
    pub fn canonical(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0 as usize)?.canonical.as_deref()
    }

    fn walk(&self, tokens: &[&str]) -> Option<NodeId> {
        tokens
            .iter()
            .try_fold(self.root(), |node, token| self.step(node, token))
    }

    /// Whether `tokens` is a non-empty prefix of some key
    pub fn is_prefix(&self, tokens: &[&str]) -> bool {
        !tokens.is_empty() && self.walk(tokens).is_some()
    }

    /// Canonical form for an exact key
    pub fn get(&self, tokens: &[&str]) -> Option<&str> {
        self.walk(tokens).and_then(|node| self.canonical(node))
    }

    /// Number of abbreviations
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no abbreviations
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the longest key, 0 for an empty table
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Language code from the table metadata
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name from the table metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries, sorted by token sequence
    pub fn entries(&self) -> Vec<(Vec<&str>, &str)> {
        let mut out = Vec::with_capacity(self.len);
        let mut path = Vec::new();
        self.collect(0, &mut path, &mut out);
        out.sort();
        out
    }

    fn collect<'t>(
        &'t self,
        idx: u32,
        path: &mut Vec<&'t str>,
        out: &mut Vec<(Vec<&'t str>, &'t str)>,
    ) {
        let node = &self.nodes[idx as usize];
        if let Some(canonical) = node.canonical.as_deref() {
            out.push((path.clone(), canonical));
        }
        for (token, &child) in &node.children {
            path.push(token.as_str());
            self.collect(child, path, out);
            path.pop();
        }
    }
}
