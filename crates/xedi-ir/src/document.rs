//! Document container and query accessors
#![allow(clippy::must_use_candidate)] // Accessor-heavy API intentionally omits pervasive #[must_use].

use crate::envelope::{GroupSegment, Interchange, TransactionSet};
use serde::{Deserialize, Serialize};

/// The root container produced by parsing an EDI document.
///
/// Interchanges accumulate in document order while the parser runs; the
/// `parsed` flag flips once dispatch completes without a fatal error.
/// After that point the tree is treated as immutable, so it can be read
/// concurrently by serialization and lookups without synchronization.
///
/// The query accessors deliberately address only the first interchange,
/// mirroring how downstream consumers use these documents; the model still
/// stores every interchange it saw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Interchanges in document order.
    pub interchanges: Vec<Interchange>,

    parsed: bool,
}

impl Document {
    /// Create an empty, unparsed document.
    pub fn new() -> Self {
        Self::default()
    }

    /// First interchange of the document.
    pub fn interchange(&self) -> Option<&Interchange> {
        self.interchanges.first()
    }

    /// Whether parsing completed without a fatal error.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Mark the model complete. Callers must not mutate the tree afterwards.
    pub fn mark_parsed(&mut self) {
        self.parsed = true;
    }

    /// Group segments of the first interchange, empty when there is none.
    pub fn groups(&self) -> &[GroupSegment] {
        self.interchange()
            .map_or(&[], |ic| ic.group_segments.as_slice())
    }

    /// Transaction sets of the group at `group_index`, when it exists.
    pub fn transactions(&self, group_index: usize) -> Option<&[TransactionSet]> {
        self.groups()
            .get(group_index)
            .map(|g| g.transaction_sets.as_slice())
    }

    /// Find a transaction set by its control number.
    ///
    /// Performs a linear scan over every group and transaction set of the
    /// first interchange, comparing `control_number` against each header
    /// field for exact equality. The scan is not limited to the ST02 slot
    /// and stops at the first match. Absent fields never match.
    pub fn find_transaction_by_number(&self, control_number: &str) -> Option<&TransactionSet> {
        self.groups()
            .iter()
            .flat_map(|g| g.transaction_sets.iter())
            .find(|ts| {
                ts.fields
                    .iter()
                    .any(|f| f.as_deref() == Some(control_number))
            })
    }

    /// Transaction set identifier code (ST01) at the given indices, or `""`.
    pub fn doc_type(&self, index: usize, group_index: usize) -> &str {
        self.transactions(group_index)
            .and_then(|sets| sets.get(index))
            .and_then(TransactionSet::doc_type)
            .unwrap_or("")
    }
}
