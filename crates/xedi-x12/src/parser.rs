//! X12 document parser
//!
//! Drives tokenized rows through the segment dispatcher, building a
//! hierarchical [`Document`]. Parsing is a strict sequential fold: each
//! row mutates the build cursor that subsequent rows depend on, so rows
//! are never processed out of order.

use crate::dispatcher::{self, BuildCursor};
use crate::syntax::Delimiters;
use crate::tokenizer;
use crate::{Error, Result};
use std::path::Path;
use xedi_ir::Document;

/// Parser facade over a single EDI document.
///
/// Typical usage: load input, call [`parse`](X12Parser::parse), then hand
/// the finished [`Document`] to serialization or query it directly.
#[derive(Debug, Default)]
pub struct X12Parser {
    rows: Vec<String>,
    delimiters: Option<Delimiters>,
    document: Document,
}

impl X12Parser {
    /// Create a parser with no input loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from a raw document string.
    pub fn from_text(data: &str) -> Self {
        let mut parser = Self::new();
        parser.load_text(data);
        parser
    }

    /// Load a raw document string, replacing any previously loaded input.
    ///
    /// Delimiters are detected from the fixed ISA offsets of the data.
    /// When detection fails no rows are produced and a later
    /// [`parse`](X12Parser::parse) reports [`Error::EmptyDocument`] rather
    /// than failing here.
    pub fn load_text(&mut self, data: &str) {
        self.document = Document::new();
        self.delimiters = Delimiters::detect(data);
        self.rows = match self.delimiters {
            Some(delimiters) => tokenizer::rows_from_text(data, delimiters.record),
            None => Vec::new(),
        };
    }

    /// Load pre-split rows, replacing any previously loaded input.
    ///
    /// Rows are normalized (CR/LF stripped, trimmed, empties dropped) but
    /// never re-split. Delimiters are detected from the first row as given.
    pub fn load_rows<I, S>(&mut self, rows: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.document = Document::new();
        let raw: Vec<String> = rows
            .into_iter()
            .map(|row| row.as_ref().to_string())
            .collect();
        self.delimiters = raw.first().and_then(|first| Delimiters::detect(first));
        self.rows = if self.delimiters.is_some() {
            tokenizer::normalize_rows(&raw)
        } else {
            Vec::new()
        };
    }

    /// Load a document from a file path.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let data = std::fs::read_to_string(path)?;
        self.load_text(&data);
        Ok(())
    }

    /// Parse the loaded rows into the document model.
    ///
    /// Fails with [`Error::EmptyDocument`] when there is nothing to parse
    /// and with [`Error::MalformedSegmentOrder`] when a row references an
    /// envelope that was never opened. Each row is processed exactly once,
    /// in row order; there is no retry. On success the document is marked
    /// parsed and treated as immutable from then on.
    pub fn parse(&mut self) -> Result<()> {
        let Some(delimiters) = self.delimiters else {
            return Err(Error::EmptyDocument);
        };
        if self.rows.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let mut cursor = BuildCursor::default();
        let document = &mut self.document;
        for (row_number, row) in self.rows.iter().enumerate() {
            let fields = tokenizer::split_fields(row, delimiters.field);
            dispatcher::apply(document, &mut cursor, fields, row_number)?;
        }
        document.mark_parsed();
        Ok(())
    }

    /// Number of tokenized rows in the loaded document.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Detected delimiters, if any.
    pub fn delimiters(&self) -> Option<Delimiters> {
        self.delimiters
    }

    /// The document model (complete once [`parse`](X12Parser::parse) has
    /// succeeded).
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the parser, returning the document model.
    pub fn into_document(self) -> Document {
        self.document
    }
}
