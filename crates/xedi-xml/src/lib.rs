//! # xedi-xml
//!
//! Structured XML output for parsed X12 documents.
//!
//! The serializer walks a completed [`xedi_ir::Document`] and emits an XML
//! tree whose tag names derive from segment names and field positions,
//! prefixed by a handful of routing context fields extracted from the
//! interchange envelope.

pub mod serializer;

pub use serializer::{XmlOptions, XmlSerializer};

use thiserror::Error;

/// Errors that can occur when serializing a document
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization was requested before a successful parse. No partial
    /// output is produced.
    #[error("document has not been parsed")]
    DocumentNotParsed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("serialized output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
