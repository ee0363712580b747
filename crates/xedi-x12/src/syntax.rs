//! X12 delimiter detection
//!
//! The ISA interchange header is fixed-width by the X12 standard, which
//! lets the delimiters be recovered from fixed offsets instead of being
//! declared out of band.

/// Offset of the field delimiter within the ISA header.
pub const FIELD_DELIMITER_OFFSET: usize = 3;
/// Offset of the record delimiter within the ISA header.
pub const RECORD_DELIMITER_OFFSET: usize = 105;
/// Minimum input length for detection to succeed.
pub const MIN_HEADER_LEN: usize = RECORD_DELIMITER_OFFSET + 1;

/// Delimiters used to tokenize an X12 document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Field delimiter (commonly `*`).
    pub field: char,
    /// Record/segment delimiter (commonly `~`).
    pub record: char,
}

impl Delimiters {
    /// Recover delimiters from the start of a document.
    ///
    /// Reads the field delimiter at offset 3 and the record delimiter at
    /// offset 105 of the input. Returns `None` when the input is shorter
    /// than 106 characters; any such deviation from the fixed-width ISA
    /// convention means the document cannot be auto-detected.
    pub fn detect(header: &str) -> Option<Self> {
        let field = header.chars().nth(FIELD_DELIMITER_OFFSET)?;
        let record = header.chars().nth(RECORD_DELIMITER_OFFSET)?;
        Some(Self { field, record })
    }
}
