#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # xedi-ir
//!
//! In-memory document model for ANSI X12 interchanges.
//!
//! A parsed EDI document is an owned tree of envelopes: an [`Interchange`]
//! (ISA/IEA) owns [`GroupSegment`]s (GS/GE), each of which owns
//! [`TransactionSet`]s (ST/SE), each of which owns generic [`Segment`]s.
//! The [`Document`] root collects interchanges and carries the read-only
//! lookup accessors used once parsing has completed.

/// Document container, parsed flag, and query accessors.
pub mod document;
/// Interchange, group, and transaction set envelopes.
pub mod envelope;
/// Generic data segment rows.
pub mod segment;

/// Primary document type.
pub use document::Document;
/// Envelope layers of the tree.
pub use envelope::{GroupSegment, Interchange, TransactionSet};
/// Leaf data segments.
pub use segment::Segment;
