//! Parse-then-serialize integration tests

use xedi_x12::X12Parser;
use xedi_xml::{XmlOptions, XmlSerializer};

fn isa_row(test_flag: &str) -> String {
    let row = format!(
        "ISA*00*          *00*          *ZZ*84863          \
         *ZZ*6129330000     *091214*1108*U*00401*000000001*0*{test_flag}*:~"
    );
    assert_eq!(row.chars().count(), 106);
    row
}

fn invoice_810() -> String {
    format!(
        "{}GS*IN*84863*6129330000*20091214*1108*1*X*004030~\
         ST*810*143718~\
         BIG*20091214*28277779**3344~\
         SE*2*143718~\
         GE*1*1~\
         IEA*1*000000001~",
        isa_row("T")
    )
}

fn parse(data: &str) -> xedi_ir::Document {
    let mut parser = X12Parser::from_text(data);
    parser.parse().expect("sample document should parse");
    parser.into_document()
}

fn compact(document: &xedi_ir::Document) -> String {
    XmlSerializer::new(XmlOptions {
        indent: false,
        include_header: true,
    })
    .serialize(document)
    .expect("parsed document should serialize")
}

#[test]
fn converts_810_invoice_to_xml() -> anyhow::Result<()> {
    let document = parse(&invoice_810());
    let xml = compact(&document);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<edi_810>"));
    assert!(xml.contains("<env>TEST</env>"));
    assert!(xml.contains("<sender_id>84863</sender_id>"));
    assert!(xml.contains("<receiver_id>6129330000</receiver_id>"));
    assert!(xml.contains("<number_of_groups>1</number_of_groups>"));
    assert!(xml.contains(
        "<BIG><BIG01>20091214</BIG01><BIG02>28277779</BIG02>\
         <BIG03/><BIG04>3344</BIG04></BIG>"
    ));
    Ok(())
}

#[test]
fn emits_one_element_per_segment_with_all_fields() {
    let document = parse(&invoice_810());
    let xml = compact(&document);

    // One element per wire segment.
    for tag in ["<ISA>", "<GS>", "<ST>", "<BIG>", "<SE>", "<GE>", "<IEA>"] {
        assert_eq!(xml.matches(tag).count(), 1, "expected exactly one {tag}");
    }

    // Positional children cover every field, absent ones included: the
    // sample ISA row tokenizes to 16 fields.
    assert_eq!(xml.matches("<ISA0").count() + xml.matches("<ISA1").count(), 16);
    assert_eq!(xml.matches("<GS0").count(), 8);
    // BIG has 4 children, the third of which is the empty BIG03.
    assert_eq!(xml.matches("<BIG0").count(), 4);
    assert!(xml.contains("<BIG03/>"));
}

#[test]
fn production_flag_maps_to_prod_env() {
    let data = invoice_810().replacen("*0*T*:~", "*0*P*:~", 1);
    let document = parse(&data);
    let xml = compact(&document);
    assert!(xml.contains("<env>PROD</env>"));
}

#[test]
fn serializing_twice_is_byte_identical() {
    let document = parse(&invoice_810());
    let serializer = XmlSerializer::with_defaults();

    let first = serializer.serialize(&document).unwrap();
    let second = serializer.serialize(&document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn header_flag_removes_only_the_declaration() {
    let document = parse(&invoice_810());

    let with_header = XmlSerializer::with_defaults().serialize(&document).unwrap();
    let without_header = XmlSerializer::new(XmlOptions {
        indent: true,
        include_header: false,
    })
    .serialize(&document)
    .unwrap();

    assert!(with_header.starts_with("<?xml"));
    assert!(!without_header.contains("<?xml"));
    assert!(with_header.ends_with(&without_header));
}

#[test]
fn unparsed_document_yields_no_output() {
    let parser = X12Parser::from_text(&invoice_810());
    // parse() was never called.
    let result = XmlSerializer::with_defaults().serialize(parser.document());
    assert!(result.is_err());
}

#[test]
fn truncated_document_serializes_with_empty_footers() -> anyhow::Result<()> {
    let data = format!(
        "{}GS*IN*84863*6129330000~ST*810*143718~BIG*20091214~",
        isa_row("P")
    );
    let document = parse(&data);
    let xml = compact(&document);

    assert!(xml.contains("<SE/>"));
    assert!(xml.contains("<GE/>"));
    assert!(xml.contains("<IEA/>"));
    // No interchange footer means no group count to report.
    assert!(xml.contains("<number_of_groups/>"));
    Ok(())
}
