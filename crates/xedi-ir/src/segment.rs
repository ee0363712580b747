//! Generic data segment rows
#![allow(clippy::must_use_candidate)] // Accessor-heavy API intentionally omits pervasive #[must_use].

use serde::{Deserialize, Serialize};

/// A single data segment within a transaction set.
///
/// A segment is one record of the wire document: a short name (`BIG`,
/// `REF`, `N1`, ...) followed by position-significant fields. A field that
/// was empty after trimming is stored as `None` so that downstream stages
/// can distinguish an absent value from an accidental empty match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment identifier, e.g. `"BIG"`.
    pub name: String,

    /// Ordered fields; position determines the output tag suffix.
    pub fields: Vec<Option<String>>,
}

impl Segment {
    /// Create a new segment from its name and fields.
    pub fn new(name: impl Into<String>, fields: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Value at `index`, flattening absent fields and out-of-range reads.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).and_then(|f| f.as_deref())
    }
}
