//! XML serializer
//!
//! Emits a parsed document as XML through an event writer. Fields are
//! named by their position: a segment named `X` with n fields becomes a
//! parent `<X>` element with children `<X01>..<Xnn>`, where an absent
//! field renders as an empty element rather than being omitted.

use crate::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;
use tracing::debug;
use xedi_ir::{Document, Interchange};

/// Indent width used when pretty-printing.
const INDENT_WIDTH: usize = 2;

static XML_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?[^?]*\?>\n*").expect("declaration pattern"));

/// Output options for [`XmlSerializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Pretty-print the output with a fixed indent width (default: true).
    pub indent: bool,
    /// Keep the XML declaration line (default: true).
    pub include_header: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: true,
            include_header: true,
        }
    }
}

/// Serializer that walks a parsed [`Document`] and emits XML text.
///
/// The root element is named `edi_` plus the document type code of the
/// first transaction set. Four context elements precede the structural
/// body to aid routing downstream: `env`, `sender_id`, `receiver_id`,
/// and `number_of_groups`.
#[derive(Debug, Clone, Default)]
pub struct XmlSerializer {
    options: XmlOptions,
}

impl XmlSerializer {
    /// Create a serializer with the given options.
    pub fn new(options: XmlOptions) -> Self {
        Self { options }
    }

    /// Create a serializer with default options.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Serialize a parsed document to XML.
    ///
    /// Fails with [`Error::DocumentNotParsed`] when the document has not
    /// completed parsing; no partial output is ever returned. Output is a
    /// pure function of the document and options, so repeated calls yield
    /// byte-identical text.
    pub fn serialize(&self, document: &Document) -> Result<String> {
        if !document.is_parsed() {
            return Err(Error::DocumentNotParsed);
        }

        let root = format!("edi_{}", document.doc_type(0, 0));
        debug!(root = %root, indent = self.options.indent, "serializing document");

        let mut writer = if self.options.indent {
            Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH)
        } else {
            Writer::new(Vec::new())
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new(root.as_str())))?;
        write_context(&mut writer, document)?;
        write_body(&mut writer, document)?;
        writer.write_event(Event::End(BytesEnd::new(root.as_str())))?;

        let mut xml = String::from_utf8(writer.into_inner())?;
        if !self.options.include_header {
            // Stripped from the generated text, not suppressed up front.
            xml = XML_DECLARATION.replace(&xml, "").into_owned();
        }
        Ok(xml)
    }
}

fn write_context<W: Write>(writer: &mut Writer<W>, document: &Document) -> Result<()> {
    let interchange = document.interchange();

    // ISA15: "T" marks a test interchange, everything else is production.
    let env = if interchange.is_some_and(Interchange::is_test) {
        "TEST"
    } else {
        "PROD"
    };
    write_value(writer, "env", Some(env))?;
    write_value(writer, "sender_id", interchange.and_then(Interchange::sender_id))?;
    write_value(
        writer,
        "receiver_id",
        interchange.and_then(Interchange::receiver_id),
    )?;

    // IEA01, the group count reported by the interchange footer.
    let group_count = interchange
        .and_then(|ic| ic.footer_fields.as_ref())
        .and_then(|footer| footer.first())
        .and_then(|field| field.as_deref());
    write_value(writer, "number_of_groups", group_count)?;

    Ok(())
}

fn write_body<W: Write>(writer: &mut Writer<W>, document: &Document) -> Result<()> {
    let Some(interchange) = document.interchange() else {
        return Ok(());
    };

    writer.write_event(Event::Start(BytesStart::new("ISA")))?;
    write_positional(writer, "ISA", &interchange.fields)?;
    for group in &interchange.group_segments {
        writer.write_event(Event::Start(BytesStart::new("GS")))?;
        write_positional(writer, "GS", &group.fields)?;
        for transaction in &group.transaction_sets {
            writer.write_event(Event::Start(BytesStart::new("ST")))?;
            write_positional(writer, "ST", &transaction.fields)?;
            for segment in &transaction.segments {
                write_segment(writer, &segment.name, Some(&segment.fields))?;
            }
            writer.write_event(Event::End(BytesEnd::new("ST")))?;
            // Transaction footers follow their ST element as siblings.
            write_segment(writer, "SE", transaction.footer_fields.as_deref())?;
        }
        writer.write_event(Event::End(BytesEnd::new("GS")))?;
        // Group footers sit beside their GS element under ISA.
        write_segment(writer, "GE", group.footer_fields.as_deref())?;
    }
    writer.write_event(Event::End(BytesEnd::new("ISA")))?;
    // The interchange footer is a direct child of the root, beside ISA.
    write_segment(writer, "IEA", interchange.footer_fields.as_deref())?;

    Ok(())
}

/// Parent element plus positional children. A missing footer (or a
/// segment without fields) still renders as an empty element.
fn write_segment<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    fields: Option<&[Option<String>]>,
) -> Result<()> {
    match fields {
        Some(fields) if !fields.is_empty() => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            write_positional(writer, name, fields)?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        _ => writer.write_event(Event::Empty(BytesStart::new(name)))?,
    }
    Ok(())
}

fn write_positional<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    fields: &[Option<String>],
) -> Result<()> {
    for (index, field) in fields.iter().enumerate() {
        let tag = format!("{}{:02}", name, index + 1);
        write_value(writer, &tag, field.as_deref())?;
    }
    Ok(())
}

fn write_value<W: Write>(writer: &mut Writer<W>, tag: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(text) if !text.is_empty() => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            writer.write_event(Event::Text(BytesText::new(text)))?;
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        _ => writer.write_event(Event::Empty(BytesStart::new(tag)))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xedi_ir::{GroupSegment, Segment, TransactionSet};

    fn fields(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    None
                } else {
                    Some((*v).to_string())
                }
            })
            .collect()
    }

    fn invoice_document() -> Document {
        let mut transaction = TransactionSet::new(fields(&["810", "143718"]));
        transaction.push(Segment::new(
            "BIG",
            fields(&["20091214", "28277779", "", "3344"]),
        ));
        transaction.close(fields(&["2", "143718"]));

        let mut group = GroupSegment::new(fields(&["IN", "84863"]));
        group.push(transaction);
        group.close(fields(&["1", "1"]));

        let mut isa = vec![None; 16];
        isa[0] = Some("00".to_string());
        isa[5] = Some("84863".to_string());
        isa[7] = Some("6129330000".to_string());
        isa[14] = Some("T".to_string());
        let mut interchange = Interchange::new(isa);
        interchange.push(group);
        interchange.close(fields(&["1", "000000001"]));

        let mut document = Document::new();
        document.interchanges.push(interchange);
        document.mark_parsed();
        document
    }

    fn compact() -> XmlSerializer {
        XmlSerializer::new(XmlOptions {
            indent: false,
            include_header: true,
        })
    }

    #[test]
    fn test_unparsed_document_is_rejected() {
        let document = Document::new();
        let err = XmlSerializer::with_defaults()
            .serialize(&document)
            .unwrap_err();
        assert!(matches!(err, Error::DocumentNotParsed));
    }

    #[test]
    fn test_root_tag_from_doc_type() {
        let xml = compact().serialize(&invoice_document()).unwrap();
        assert!(xml.contains("<edi_810>"));
        assert!(xml.ends_with("</edi_810>"));
    }

    #[test]
    fn test_root_tag_without_transaction_sets() {
        let mut document = Document::new();
        document.mark_parsed();

        let xml = compact().serialize(&document).unwrap();
        assert!(xml.contains("<edi_>"));
    }

    #[test]
    fn test_context_fields_in_fixed_order() {
        let xml = compact().serialize(&invoice_document()).unwrap();
        assert!(xml.contains(
            "<env>TEST</env><sender_id>84863</sender_id>\
             <receiver_id>6129330000</receiver_id>\
             <number_of_groups>1</number_of_groups>"
        ));
    }

    #[test]
    fn test_env_defaults_to_prod() {
        let mut document = invoice_document();
        document.interchanges[0].fields[14] = Some("P".to_string());
        let xml = compact().serialize(&document).unwrap();
        assert!(xml.contains("<env>PROD</env>"));

        // Absent flag is production too.
        let mut document = invoice_document();
        document.interchanges[0].fields[14] = None;
        let xml = compact().serialize(&document).unwrap();
        assert!(xml.contains("<env>PROD</env>"));
    }

    #[test]
    fn test_positional_field_naming() {
        let xml = compact().serialize(&invoice_document()).unwrap();
        assert!(xml.contains(
            "<BIG><BIG01>20091214</BIG01><BIG02>28277779</BIG02>\
             <BIG03/><BIG04>3344</BIG04></BIG>"
        ));
    }

    #[test]
    fn test_envelope_nesting() {
        let xml = compact().serialize(&invoice_document()).unwrap();

        // SE follows its ST element, GE follows GS, IEA follows ISA.
        assert!(xml.contains("</ST><SE>"));
        assert!(xml.contains("</GS><GE>"));
        assert!(xml.contains("</ISA><IEA>"));
        // The interchange footer is a child of the root, not of ISA.
        assert!(xml.contains("</IEA></edi_810>"));
    }

    #[test]
    fn test_absent_footer_renders_empty_element() {
        let mut document = invoice_document();
        document.interchanges[0].group_segments[0].transaction_sets[0].footer_fields = None;

        let xml = compact().serialize(&document).unwrap();
        assert!(xml.contains("</ST><SE/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut document = invoice_document();
        document.interchanges[0].group_segments[0].transaction_sets[0]
            .segments
            .push(Segment::new("N1", fields(&["ST", "A&B <WAREHOUSE>"])));

        let xml = compact().serialize(&document).unwrap();
        assert!(xml.contains("<N102>A&amp;B &lt;WAREHOUSE&gt;</N102>"));
    }

    #[test]
    fn test_header_stripping() {
        let with_header = compact().serialize(&invoice_document()).unwrap();
        assert!(with_header.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));

        let without_header = XmlSerializer::new(XmlOptions {
            indent: false,
            include_header: false,
        })
        .serialize(&invoice_document())
        .unwrap();

        assert!(!without_header.contains("<?xml"));
        // Only the declaration is removed, nothing else.
        assert!(with_header.ends_with(&without_header));
    }

    #[test]
    fn test_indented_output() {
        let xml = XmlSerializer::with_defaults()
            .serialize(&invoice_document())
            .unwrap();
        assert!(xml.contains("\n  <env>TEST</env>"));
        assert!(xml.contains("\n  <ISA>"));
        assert!(xml.contains("\n    <ISA01>00</ISA01>"));
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let document = invoice_document();
        let serializer = XmlSerializer::with_defaults();

        let first = serializer.serialize(&document).unwrap();
        let second = serializer.serialize(&document).unwrap();
        assert_eq!(first, second);
    }
}
