//! Segment-name dispatch
//!
//! Maps the first field of a tokenized row to a model-construction action
//! and applies it to the document through an explicit build cursor. The
//! mapping is total: every possible name resolves to either a specific
//! envelope action or the generic append.

use crate::{Error, Result};
use tracing::debug;
use xedi_ir::{Document, GroupSegment, Interchange, Segment, TransactionSet};

/// Construction action bound to a segment name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentAction {
    /// `ISA` — open a new interchange.
    OpenInterchange,
    /// `IEA` — close the current interchange.
    CloseInterchange,
    /// `GS` — open a new group under the current interchange.
    OpenGroup,
    /// `GE` — close the current group.
    CloseGroup,
    /// `ST` — open a new transaction set under the current group.
    OpenTransaction,
    /// `SE` — close the current transaction set.
    CloseTransaction,
    /// Any other name — append a generic segment to the current
    /// transaction set.
    Append,
}

impl SegmentAction {
    /// Resolve a segment name to its construction action.
    ///
    /// Matching is case-sensitive, as on the wire; unrecognized names fall
    /// through to [`SegmentAction::Append`].
    pub fn for_name(name: &str) -> Self {
        match name {
            "ISA" => Self::OpenInterchange,
            "IEA" => Self::CloseInterchange,
            "GS" => Self::OpenGroup,
            "GE" => Self::CloseGroup,
            "ST" => Self::OpenTransaction,
            "SE" => Self::CloseTransaction,
            _ => Self::Append,
        }
    }
}

/// Index references to the currently-open envelope at each nesting level.
///
/// This is the only mutable state during parsing. It always addresses the
/// most recently opened interchange/group/transaction set and is discarded
/// once the document is marked parsed.
#[derive(Debug, Default)]
pub struct BuildCursor {
    interchange: Option<usize>,
    group: Option<usize>,
    transaction: Option<usize>,
}

/// Apply one tokenized row to the document.
///
/// `fields` is the full tokenized row, segment name at position 0. Rows
/// that tokenized to nothing are skipped; a row with content but no
/// leading name fails with [`Error::MissingSegmentName`]. Closing or
/// nesting rows whose required ancestor was never opened fail with
/// [`Error::MalformedSegmentOrder`].
pub fn apply(
    document: &mut Document,
    cursor: &mut BuildCursor,
    mut fields: Vec<Option<String>>,
    row: usize,
) -> Result<()> {
    if fields.is_empty() {
        return Ok(());
    }
    let Some(name) = fields.remove(0) else {
        return Err(Error::MissingSegmentName { row });
    };

    match SegmentAction::for_name(&name) {
        SegmentAction::OpenInterchange => {
            document.interchanges.push(Interchange::new(fields));
            cursor.interchange = Some(document.interchanges.len() - 1);
            cursor.group = None;
            cursor.transaction = None;
        }
        SegmentAction::CloseInterchange => {
            current_interchange(document, cursor, &name, row)?.close(fields);
        }
        SegmentAction::OpenGroup => {
            let interchange = current_interchange(document, cursor, &name, row)?;
            interchange.push(GroupSegment::new(fields));
            cursor.group = Some(interchange.group_segments.len() - 1);
            cursor.transaction = None;
        }
        SegmentAction::CloseGroup => {
            current_group(document, cursor, &name, row)?.close(fields);
        }
        SegmentAction::OpenTransaction => {
            let group = current_group(document, cursor, &name, row)?;
            group.push(TransactionSet::new(fields));
            cursor.transaction = Some(group.transaction_sets.len() - 1);
        }
        SegmentAction::CloseTransaction => {
            current_transaction(document, cursor, &name, row)?.close(fields);
        }
        SegmentAction::Append => {
            if document.interchanges.is_empty() {
                // Nothing to attach to yet; these rows are dropped.
                debug!(segment = %name, row, "ignoring segment before any interchange");
                return Ok(());
            }
            let transaction = current_transaction(document, cursor, &name, row)?;
            transaction.push(Segment::new(name, fields));
        }
    }

    Ok(())
}

fn current_interchange<'a>(
    document: &'a mut Document,
    cursor: &BuildCursor,
    segment: &str,
    row: usize,
) -> Result<&'a mut Interchange> {
    cursor
        .interchange
        .and_then(|i| document.interchanges.get_mut(i))
        .ok_or_else(|| Error::MalformedSegmentOrder {
            segment: segment.to_string(),
            missing: "interchange",
            row,
        })
}

fn current_group<'a>(
    document: &'a mut Document,
    cursor: &BuildCursor,
    segment: &str,
    row: usize,
) -> Result<&'a mut GroupSegment> {
    cursor
        .interchange
        .zip(cursor.group)
        .and_then(|(i, g)| {
            document
                .interchanges
                .get_mut(i)
                .and_then(|ic| ic.group_segments.get_mut(g))
        })
        .ok_or_else(|| Error::MalformedSegmentOrder {
            segment: segment.to_string(),
            missing: "group",
            row,
        })
}

fn current_transaction<'a>(
    document: &'a mut Document,
    cursor: &BuildCursor,
    segment: &str,
    row: usize,
) -> Result<&'a mut TransactionSet> {
    cursor
        .interchange
        .zip(cursor.group)
        .zip(cursor.transaction)
        .and_then(|((i, g), t)| {
            document
                .interchanges
                .get_mut(i)
                .and_then(|ic| ic.group_segments.get_mut(g))
                .and_then(|grp| grp.transaction_sets.get_mut(t))
        })
        .ok_or_else(|| Error::MalformedSegmentOrder {
            segment: segment.to_string(),
            missing: "transaction set",
            row,
        })
}
