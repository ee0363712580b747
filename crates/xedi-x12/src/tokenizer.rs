//! Row and field tokenization
//!
//! Splits raw document text into trimmed rows, and rows into optional
//! fields. A field that is empty after trimming becomes `None`, so the
//! serializer can emit an empty element rather than empty text and lookups
//! never match an accidental empty string.

/// Split raw text on the record delimiter into non-empty, trimmed rows.
///
/// CR and LF characters are stripped before trimming; rows that are empty
/// afterwards are dropped.
pub fn rows_from_text(data: &str, record_delimiter: char) -> Vec<String> {
    data.split(record_delimiter)
        .map(normalize_row)
        .filter(|row| !row.is_empty())
        .collect()
}

/// Normalize pre-split rows without re-splitting them.
///
/// Applies the same CR/LF stripping and trimming as [`rows_from_text`].
pub fn normalize_rows<I, S>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .map(|row| normalize_row(row.as_ref()))
        .filter(|row| !row.is_empty())
        .collect()
}

fn normalize_row(row: &str) -> String {
    row.replace(['\r', '\n'], "").trim().to_string()
}

/// Split a row on the field delimiter into trimmed, optional fields.
///
/// Trailing empty splits are dropped; interior fields that are empty after
/// trimming are kept as `None` so positions stay significant.
pub fn split_fields(row: &str, field_delimiter: char) -> Vec<Option<String>> {
    let mut raw: Vec<&str> = row.split(field_delimiter).collect();
    while raw.last() == Some(&"") {
        raw.pop();
    }

    raw.into_iter()
        .map(|field| {
            let trimmed = field.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
