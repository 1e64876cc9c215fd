//! Character-class range optimization.
//!
//! An edge label is lowered to a list of checks against the input byte. Full
//! ASCII classes collapse into one range check each (two comparisons and an
//! AND), whatever else the label holds. What is left gets one equality check
//! per character. An alphanumeric edge costs three range checks instead of 62
//! equality checks.

use circomata_core::{CharSet, EncodingError, NodeId};

/// A contiguous ASCII class that can be tested with two comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
}

impl CharClass {
    /// Extraction order. Changing it renumbers every component.
    pub const PRIORITY: [CharClass; 3] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
    ];

    /// Exclusive bounds `(lower, upper)`: a byte is in the class iff
    /// `lower < byte && byte < upper`.
    pub fn bounds(self) -> (u8, u8) {
        let (first, last) = self.span();
        (first - 1, last + 1)
    }

    pub fn chars(self) -> CharSet {
        let (first, last) = self.span();
        (first..=last).map(char::from).collect()
    }

    /// Annotation printed in front of the range check.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "UPPERCASE",
            CharClass::Lowercase => "lowercase",
            CharClass::Digits => "digits",
        }
    }

    fn span(self) -> (u8, u8) {
        match self {
            CharClass::Uppercase => (b'A', b'Z'),
            CharClass::Lowercase => (b'a', b'z'),
            CharClass::Digits => (b'0', b'9'),
        }
    }
}

/// One boolean sub-expression of an edge condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Range(CharClass),
    Equal(u8),
}

/// Lower the label of edge `src -> dst` into checks.
///
/// Classes come first, in [`CharClass::PRIORITY`] order, then equality checks
/// in ascending byte order.
pub fn plan(label: &CharSet, src: NodeId, dst: NodeId) -> Result<Vec<Check>, EncodingError> {
    let mut rest = label.clone();
    let mut checks = Vec::new();

    for class in CharClass::PRIORITY {
        let members = class.chars();
        if rest.contains_all(&members) {
            rest.remove_all(&members);
            checks.push(Check::Range(class));
        }
    }

    for ch in rest.iter() {
        let code = u8::try_from(ch).map_err(|_| EncodingError::CodeOutOfRange { ch, src, dst })?;
        checks.push(Check::Equal(code));
    }

    Ok(checks)
}
