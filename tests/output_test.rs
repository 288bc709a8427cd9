mod common;

use common::create_tree;
use serde_json::Value;
use std::path::Path;
use uic_xref::resolver::{assign_block_ordinals, Resolver};
use uic_xref::runtime::output::{write_rows, write_rows_to_file};
use uic_xref::sources::command::token_index::TokenIndex;
use uic_xref::sources::uic::adapter::build_document;

fn rows() -> Vec<uic_xref::types::EnrichedRow> {
    let document = build_document(
        Path::new("/corpus/Panel.uic"),
        "<Panel>\n  <Tools>\n    <Button Name=\"Go\">\n      <Type>Push</Type>\n",
    );
    let tokens = TokenIndex::default();
    let mut rows = Resolver::new(&tokens, &[]).resolve_document(&document);
    assign_block_ordinals(&mut rows);
    rows
}

#[test]
fn writes_one_json_object_per_row() {
    let rows = rows();
    let mut buffer = Vec::new();
    write_rows(&rows, &mut buffer).expect("write should succeed");

    let text = String::from_utf8(buffer).expect("output is utf-8");
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);

    let last: Value = serde_json::from_str(lines[3]).expect("row is json");
    assert_eq!(last["group_key"], "1.1.1");
    assert_eq!(last["control_type"], "Button");
    assert_eq!(last["name"], "Go");
    assert_eq!(last["type"], "Push");
    assert_eq!(last["tag_kind"], "opening_tag");
    assert_eq!(last["block_ordinal"], 3);
    assert_eq!(last["references"], Value::Array(Vec::new()));
}

#[test]
fn writes_rows_to_file() {
    let dir = create_tree(&[]);
    let path = dir.path().join("rows.jsonl");
    write_rows_to_file(&rows(), &path).expect("write should succeed");

    let written = std::fs::read_to_string(&path).expect("file exists");
    assert_eq!(written.lines().count(), 4);
}
