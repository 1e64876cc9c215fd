//! Character sets labelling automaton edges.

use std::collections::BTreeSet;
use std::fmt;

/// The set of characters that moves the automaton along one edge.
///
/// Kept sorted by code point so every walk over a set (equality checks,
/// lookup-table rows) happens in the same order on every run. Characters are
/// stored as `char` rather than `u8`: the generator may hand us anything, and
/// codes that don't fit in a byte are reported where they are lowered, with
/// the edge they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSet(BTreeSet<char>);

impl CharSet {
    /// Insert a character. Returns `false` if it was already present.
    pub fn insert(&mut self, ch: char) -> bool {
        self.0.insert(ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every character of `other` is in `self`.
    pub fn contains_all(&self, other: &CharSet) -> bool {
        other.0.is_subset(&self.0)
    }

    /// Remove every character of `other` from `self`.
    pub fn remove_all(&mut self, other: &CharSet) {
        self.0.retain(|ch| !other.0.contains(ch));
    }

    /// Characters in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, ch) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ch:?}")?;
        }
        f.write_str("]")
    }
}
