//! Declarative attribute search over a [`Document`].
//!
//! A [`PatternTable`] maps caller-defined keys to `(element, attribute)` rules. One generic depth-first visitor
//! evaluates every rule at every element, so adding a category means adding a table row, not traversal code.
//!
//! ## Notes
//! - Traversal always descends into children, whether or not the current element matched.
//! - Results are sets: the same value matched twice collapses to one entry.
//! - Every key of the table is present in the results, even when nothing matched.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::path::Path;

use crate::document::{Document, Element};

/// Element name written in patterns to match any element.
pub const WILDCARD: &str = "*";

/// Which elements a pattern applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementMatch {
    Any,
    Named(String),
}

impl ElementMatch {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            ElementMatch::Any => true,
            ElementMatch::Named(expected) => expected == name,
        }
    }
}

impl From<&str> for ElementMatch {
    fn from(name: &str) -> Self {
        if name == WILDCARD {
            ElementMatch::Any
        } else {
            ElementMatch::Named(name.to_string())
        }
    }
}

/// An `(element, attribute)` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    element: ElementMatch,
    attribute: String,
}

impl SearchPattern {
    /// Create a pattern; an element name of `"*"` matches any element.
    pub fn new(element: impl Into<ElementMatch>, attribute: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Match `attribute` on any element.
    pub fn any(attribute: impl Into<String>) -> Self {
        Self::new(ElementMatch::Any, attribute)
    }

    /// Match `attribute` only on elements named `element`.
    pub fn named(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::new(ElementMatch::Named(element.into()), attribute)
    }

    pub fn element(&self) -> &ElementMatch {
        &self.element
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The matched attribute value, if this element satisfies the pattern.
    pub fn value_in<'e>(&self, element: &'e Element) -> Option<&'e str> {
        if self.element.matches(element.name()) {
            element.attribute(&self.attribute)
        } else {
            None
        }
    }
}

/// Ordered table of patterns keyed by category.
///
/// Inserting a key that is already present replaces its pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable<K> {
    entries: Vec<(K, SearchPattern)>,
}

impl<K> Default for PatternTable<K> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: Copy + Eq> PatternTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: K, pattern: SearchPattern) -> Self {
        self.insert(key, pattern);
        self
    }

    pub fn insert(&mut self, key: K, pattern: SearchPattern) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = pattern,
            None => self.entries.push((key, pattern)),
        }
    }

    pub fn get(&self, key: K) -> Option<&SearchPattern> {
        self.entries.iter().find(|(existing, _)| *existing == key).map(|(_, p)| p)
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &SearchPattern)> + '_ {
        self.entries.iter().map(|(key, pattern)| (*key, pattern))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Copy + Eq> FromIterator<(K, SearchPattern)> for PatternTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, SearchPattern)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, pattern) in iter {
            table.insert(key, pattern);
        }
        table
    }
}

/// Per-key sets of matched (and transformed) values for one document.
#[derive(Debug, Clone)]
pub struct SearchResults<K, T> {
    sets: HashMap<K, HashSet<T>>,
}

impl<K: Eq + Hash, T: Eq + Hash> SearchResults<K, T> {
    fn with_keys(keys: impl Iterator<Item = K>) -> Self {
        Self {
            sets: keys.map(|key| (key, HashSet::new())).collect(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&HashSet<T>> {
        self.sets.get(key)
    }

    /// Total number of values across every key.
    pub fn total(&self) -> usize {
        self.sets.values().map(HashSet::len).sum()
    }

    pub fn into_inner(self) -> HashMap<K, HashSet<T>> {
        self.sets
    }
}

/// Search a document for every pattern in the table.
///
/// ## Parameters
/// - `document`: the parsed document.
/// - `patterns`: rules keyed by category.
/// - `transform`: turns `(key, matched value)` into the collected item.
///
/// ## Returns
/// - (`SearchResults<K, T>`): one set per table key.
pub fn search<K, T, F>(document: &Document, patterns: &PatternTable<K>, mut transform: F) -> SearchResults<K, T>
where
    K: Copy + Eq + Hash,
    T: Eq + Hash,
    F: FnMut(K, &str) -> T,
{
    let mut results = SearchResults::with_keys(patterns.keys());

    // Explicit stack so deeply nested documents cannot exhaust the call stack.
    let mut pending: Vec<&Element> = document.children().iter().rev().collect();
    while let Some(element) = pending.pop() {
        for (key, pattern) in patterns.iter() {
            if let Some(value) = pattern.value_in(element) {
                let item = transform(key, value);
                results.sets.entry(key).or_default().insert(item);
            }
        }
        pending.extend(element.children().iter().rev());
    }

    results
}

/// Open, parse and search a file.
///
/// Returns `None` when the file cannot be read or parsed; the failure is logged and the caller treats the document
/// as contributing nothing.
pub fn search_file<K, T, F>(path: &Path, patterns: &PatternTable<K>, transform: F) -> Option<SearchResults<K, T>>
where
    K: Copy + Eq + Hash,
    T: Eq + Hash,
    F: FnMut(K, &str) -> T,
{
    match Document::open(path) {
        Ok(document) => {
            let results = search(&document, patterns, transform);
            tracing::debug!(
                path = %path.display(),
                root = document.root().map(Element::name),
                matches = results.total(),
                "searched markup"
            );
            Some(results)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable markup");
            None
        }
    }
}
