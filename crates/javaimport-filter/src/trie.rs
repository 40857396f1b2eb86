//! Trie-based synthesis of prefix-set regular expressions.
//!
//! A [`TrieCompiler`] collects literal prefixes and folds them into one
//! alternation with shared leading characters factored out, e.g.
//! `{"sun", "sunw", "org"}` becomes `(?:org|sunw?)`. Branches that end after a
//! single character are merged into a character class, and a prefix that ends
//! where longer ones continue turns the continuation optional.
//!
//! The synthesized text is unanchored; callers wrap it (`^(?:...)`) to get
//! "starts with one of" semantics.

use javaimport_core::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

/// Pattern text that never matches, not even the empty string.
///
/// `\b` at offset 0 requires a leading word character, and `\x00` is not one.
pub const NEVER_MATCH: &str = r"^\b\x00";

/// One character position across all inserted prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Children keyed by the next character, kept in code-point order.
    children: BTreeMap<char, TrieNode>,
    /// Some inserted prefix ends exactly here.
    terminal: bool,
}

impl TrieNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an inserted prefix ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether no branch continues past this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child edges in code-point order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    /// Insert `s` below this node. Returns `true` if `s` was not present yet.
    fn insert(&mut self, s: &str) -> bool {
        let mut node = self;
        for ch in s.chars() {
            node = node.children.entry(ch).or_default();
        }

        !std::mem::replace(&mut node.terminal, true)
    }

    /// Build the pattern for everything below this node.
    ///
    /// A terminal leaf yields the empty string.
    fn synthesize(&self) -> String {
        if self.children.is_empty() {
            return String::new();
        }

        let mut alternatives = Vec::new();
        let mut singles = Vec::new();

        for (ch, child) in &self.children {
            let mut buf = [0u8; 4];
            let quoted = regex::escape(ch.encode_utf8(&mut buf));
            let rest = child.synthesize();

            if rest.is_empty() {
                singles.push(quoted);
            } else {
                alternatives.push(quoted + &rest);
            }
        }

        let singles_only = alternatives.is_empty();
        match singles.len() {
            0 => {}
            1 => alternatives.append(&mut singles),
            _ => alternatives.push(format!("[{}]", singles.concat())),
        }

        let mut pattern = if alternatives.len() == 1 {
            alternatives.swap_remove(0)
        } else {
            format!("(?:{})", alternatives.join("|"))
        };

        if self.terminal {
            if singles_only {
                pattern.push('?');
            } else {
                pattern = format!("(?:{pattern})?");
            }
        }

        pattern
    }
}

/// Folds a set of literal prefixes into a single regex.
///
/// Build once with [`add`](Self::add), then call [`compile`](Self::compile),
/// which consumes the compiler.
#[derive(Debug, Clone, Default)]
pub struct TrieCompiler {
    root: TrieNode,
    len: usize,
}

impl TrieCompiler {
    /// Create an empty compiler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one literal prefix. Inserting the same prefix twice is a no-op.
    ///
    /// Empty prefixes are ignored: synthesized, they would match every input.
    pub fn add(&mut self, prefix: &str) {
        if prefix.is_empty() {
            debug!("Ignoring empty prefix");
            return;
        }

        if self.root.insert(prefix) {
            self.len += 1;
        }
    }

    /// Number of distinct prefixes inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no prefix has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root of the underlying trie.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The synthesized, uncompiled pattern.
    ///
    /// An empty compiler yields [`NEVER_MATCH`].
    pub fn pattern_text(&self) -> String {
        if self.root.is_leaf() {
            return NEVER_MATCH.to_string();
        }

        self.root.synthesize()
    }

    /// Synthesize the pattern and hand it to the regex engine.
    pub fn compile(self) -> Result<Regex> {
        compile_pattern(&self.pattern_text())
    }
}

impl<S: AsRef<str>> Extend<S> for TrieCompiler {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for prefix in iter {
            self.add(prefix.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieCompiler {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut compiler = Self::new();
        compiler.extend(iter);
        compiler
    }
}

/// Compile pattern text, keeping the text around on failure.
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::CompilationFailed {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
