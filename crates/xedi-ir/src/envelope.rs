//! Envelope layers of an X12 document
#![allow(clippy::must_use_candidate)] // Accessor-heavy API intentionally omits pervasive #[must_use].

use crate::segment::Segment;
use serde::{Deserialize, Serialize};

fn field_at(fields: &[Option<String>], index: usize) -> Option<&str> {
    fields.get(index).and_then(|f| f.as_deref())
}

/// One business document (ST/SE) within a functional group.
///
/// Created when an `ST` row is parsed; closed when the matching `SE` row
/// sets the footer fields. A truncated document leaves the footer `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSet {
    /// Header fields from the `ST` row; index 0 is the transaction set
    /// identifier code (ST01), index 1 the control number (ST02).
    pub fields: Vec<Option<String>>,

    /// Footer fields from the matching `SE` row, if one was seen.
    pub footer_fields: Option<Vec<Option<String>>>,

    /// Segments in document order.
    pub segments: Vec<Segment>,
}

impl TransactionSet {
    /// Create a transaction set from its `ST` header fields.
    pub fn new(fields: Vec<Option<String>>) -> Self {
        Self {
            fields,
            footer_fields: None,
            segments: Vec::new(),
        }
    }

    /// The ST01 transaction set identifier code, e.g. `"810"` for an invoice.
    pub fn doc_type(&self) -> Option<&str> {
        field_at(&self.fields, 0)
    }

    /// Append a segment to this transaction set.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Set the `SE` footer fields.
    pub fn close(&mut self, footer: Vec<Option<String>>) {
        self.footer_fields = Some(footer);
    }

    /// All segments with the given name, compared case-insensitively.
    pub fn find_segments(&self, name: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case(name))
            .collect()
    }
}

/// A functional group (GS/GE) of related transaction sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSegment {
    /// Header fields from the `GS` row.
    pub fields: Vec<Option<String>>,

    /// Footer fields from the matching `GE` row, if one was seen.
    pub footer_fields: Option<Vec<Option<String>>>,

    /// Transaction sets in document order.
    pub transaction_sets: Vec<TransactionSet>,
}

impl GroupSegment {
    /// Create a group from its `GS` header fields.
    pub fn new(fields: Vec<Option<String>>) -> Self {
        Self {
            fields,
            footer_fields: None,
            transaction_sets: Vec::new(),
        }
    }

    /// Append a transaction set to this group.
    pub fn push(&mut self, transaction_set: TransactionSet) {
        self.transaction_sets.push(transaction_set);
    }

    /// Set the `GE` footer fields.
    pub fn close(&mut self, footer: Vec<Option<String>>) {
        self.footer_fields = Some(footer);
    }
}

/// The outermost envelope (ISA/IEA) of an EDI document.
///
/// The ISA header is exactly positional: field 5 carries the sender id,
/// field 7 the receiver id, and field 14 the test/production flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interchange {
    /// Header fields from the `ISA` row.
    pub fields: Vec<Option<String>>,

    /// Footer fields from the matching `IEA` row, if one was seen.
    /// The first footer field (IEA01) is the group count.
    pub footer_fields: Option<Vec<Option<String>>>,

    /// Functional groups in document order.
    pub group_segments: Vec<GroupSegment>,
}

impl Interchange {
    /// Create an interchange from its `ISA` header fields.
    pub fn new(fields: Vec<Option<String>>) -> Self {
        Self {
            fields,
            footer_fields: None,
            group_segments: Vec::new(),
        }
    }

    /// Append a functional group to this interchange.
    pub fn push(&mut self, group: GroupSegment) {
        self.group_segments.push(group);
    }

    /// Set the `IEA` footer fields.
    pub fn close(&mut self, footer: Vec<Option<String>>) {
        self.footer_fields = Some(footer);
    }

    /// ISA06, the interchange sender id.
    pub fn sender_id(&self) -> Option<&str> {
        field_at(&self.fields, 5)
    }

    /// ISA08, the interchange receiver id.
    pub fn receiver_id(&self) -> Option<&str> {
        field_at(&self.fields, 7)
    }

    /// Whether ISA15 marks this interchange as a test transmission.
    pub fn is_test(&self) -> bool {
        matches!(field_at(&self.fields, 14), Some("T" | "t"))
    }
}
