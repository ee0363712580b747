//! # xedi-x12
//!
//! X12 wire-format parsing: delimiter detection, row/field tokenization,
//! and the builder state machine that turns tokenized rows into a
//! [`xedi_ir::Document`].
//!
//! The wire format is untyped and self-describing; document structure is
//! recovered purely from segment-name conventions and field position, and
//! truncated or malformed documents are tolerated as far as possible.

pub mod dispatcher;
pub mod parser;
pub mod syntax;
pub mod tokenizer;

pub use parser::X12Parser;
pub use syntax::Delimiters;

use thiserror::Error;

/// Errors that can occur when parsing X12 input
#[derive(Error, Debug)]
pub enum Error {
    /// Nothing survived tokenization: empty input or failed delimiter
    /// detection.
    #[error("no rows to parse")]
    EmptyDocument,

    #[error("{segment} segment at row {row} has no open {missing}")]
    MalformedSegmentOrder {
        segment: String,
        missing: &'static str,
        row: usize,
    },

    #[error("row {row} has no segment name")]
    MissingSegmentName { row: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
