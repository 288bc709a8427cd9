use uic_xref::sources::uic::parser::{classify_line, detect_tag_kind, extract_content};
use uic_xref::types::TagKind;

#[test]
fn classifies_in_priority_order() {
    assert_eq!(detect_tag_kind("<?xml version=\"1.0\"?>"), TagKind::Declaration);
    assert_eq!(detect_tag_kind("</Tools>"), TagKind::ClosingTag);
    assert_eq!(detect_tag_kind("<Button Name=\"x\" />"), TagKind::SelfClosingTag);
    assert_eq!(
        detect_tag_kind("<Tool Name=\"Open\">"),
        TagKind::OpeningTagWithAttributes
    );
    assert_eq!(detect_tag_kind("<Tools>"), TagKind::OpeningTag);
    assert_eq!(detect_tag_kind("just some words"), TagKind::Text);
}

#[test]
fn closing_tag_wins_over_self_closing_marker() {
    assert_eq!(detect_tag_kind("</a/>"), TagKind::ClosingTag);
}

#[test]
fn attribute_kind_needs_angle_brackets_not_position() {
    assert_eq!(detect_tag_kind("x = <y>"), TagKind::OpeningTagWithAttributes);
    assert_eq!(detect_tag_kind("a = b"), TagKind::Text);
}

#[test]
fn content_prefers_inner_text() {
    assert_eq!(extract_content("<Caption> Bar </Caption>"), "Bar");
    assert_eq!(
        extract_content("<Tool Name=\"Open\">File</Tool>"),
        "File"
    );
}

#[test]
fn content_renders_quoted_attributes() {
    assert_eq!(
        extract_content("<Tool Name=\"Open\" Key=\"CMD.OPEN\">"),
        "Name=Open, Key=CMD.OPEN"
    );
    assert_eq!(extract_content("<Tools>"), "");
}

#[test]
fn classify_recovers_bare_values_from_attributes() {
    let line = classify_line("    <Tool Name=\"Open\" Key=\"CMD.OPEN\" />");
    assert_eq!(line.tag_kind, TagKind::SelfClosingTag);
    assert_eq!(line.tag_name, "Tool");
    assert_eq!(line.content, "Name=Open, Key=CMD.OPEN");
    assert_eq!(line.extended_content, vec!["Open", "CMD.OPEN"]);
}

#[test]
fn classify_keeps_inner_text_without_extended_values() {
    let line = classify_line("  <Name>Foo</Name>");
    assert_eq!(line.tag_kind, TagKind::OpeningTag);
    assert_eq!(line.tag_name, "Name");
    assert_eq!(line.content, "Foo");
    assert!(line.extended_content.is_empty());
}

#[test]
fn unstructured_line_is_plain_text() {
    let line = classify_line("   free text with no markup");
    assert_eq!(line.tag_kind, TagKind::Text);
    assert_eq!(line.tag_name, "");
    assert_eq!(line.content, "");
    assert!(line.extended_content.is_empty());
}

#[test]
fn empty_attribute_value_is_kept() {
    let line = classify_line("<Caption Text=\"\"/>");
    assert_eq!(line.content, "Text=");
    assert_eq!(line.extended_content, vec![""]);
}
