//! Keyed collection of validation failures.
//!
//! A [`Violations`] value maps a field path (for example `rectangle1.size.width`)
//! to the human-readable messages recorded against it. Producers return it by
//! value and callers merge the pieces, so every failure of a query can be
//! reported at once instead of stopping at the first one.

use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Field path → messages, ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<String, Vec<String>>);

impl Violations {
    /// Creates an empty set of violations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single violation.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut violations = Self::new();
        violations.push(path, message);
        violations
    }

    /// Records `message` against `path`.
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_default().push(message.into());
    }

    /// Moves every entry of `other` into `self`, appending messages for paths
    /// present in both.
    pub fn merge(&mut self, other: Violations) {
        for (path, messages) in other.0 {
            self.0.entry(path).or_default().extend(messages);
        }
    }

    /// Returns a copy with every path rewritten to `<prefix>.<path>`.
    pub fn prefixed(self, prefix: &str) -> Self {
        Violations(
            self.0
                .into_iter()
                .map(|(path, messages)| (format!("{prefix}.{path}"), messages))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct field paths with at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Messages recorded for `path`, if any.
    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.0.get(path).map(Vec::as_slice)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Iterates `(path, message)` pairs, one per message.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(path, messages)| {
            messages.iter().map(move |message| (path.as_str(), message.as_str()))
        })
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (path, message)) in self.messages().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{path}: {message}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
