//! Record encoder tests

use super::*;
use crate::schema::{detect_schema, Schema};

fn schema_for(csv_data: &str) -> Schema {
    detect_schema(csv_data.as_bytes(), b',', 100).unwrap()
}

fn record(cells: &[&str]) -> csv::StringRecord {
    csv::StringRecord::from(cells.to_vec())
}

#[test]
fn test_encode_typed_values() {
    let schema = schema_for("i,f,b,s\n1,1.5,true,x\n");
    let row = encode_row(&schema, &record(&["42", "2.5", "FALSE", "hello"]));

    assert_eq!(row.cells[0], Some(CellValue::Int(42)));
    assert_eq!(row.cells[1], Some(CellValue::Float(2.5)));
    assert_eq!(row.cells[2], Some(CellValue::Bool(false)));
    assert_eq!(row.cells[3], Some(CellValue::Text("hello".to_string())));
}

#[test]
fn test_encode_empty_cell_is_absent() {
    let schema = schema_for("a,b\n1,x\n");
    let row = encode_row(&schema, &record(&["", "y"]));

    assert_eq!(row.cells[0], None);
    assert_eq!(row.cells[1], Some(CellValue::Text("y".to_string())));
    assert_eq!(row.present_count(), 1);
}

#[test]
fn test_encode_whitespace_only_cell_is_absent() {
    let schema = schema_for("a\n1\n");
    let row = encode_row(&schema, &record(&["   "]));
    assert_eq!(row.cells[0], None);
}

#[test]
fn test_encode_short_row_omits_trailing_fields() {
    // A row with fewer cells than headers never errors
    let schema = schema_for("a,b,c\n1,x,2.5\n");
    let row = encode_row(&schema, &record(&["7"]));

    assert_eq!(row.cells.len(), 3);
    assert_eq!(row.cells[0], Some(CellValue::Int(7)));
    assert_eq!(row.cells[1], None);
    assert_eq!(row.cells[2], None);
}

#[test]
fn test_encode_unparseable_value_is_omitted() {
    // The streaming pass can see rows the sampler never did
    let schema = schema_for("n\n1\n2\n");
    let row = encode_row(&schema, &record(&["not-a-number"]));
    assert_eq!(row.cells[0], None);
}

#[test]
fn test_encode_non_bool_token_in_bool_column_is_omitted() {
    let schema = schema_for("flag\ntrue\n");
    let row = encode_row(&schema, &record(&["maybe"]));
    assert_eq!(row.cells[0], None);
}

#[test]
fn test_encode_string_column_keeps_special_characters() {
    let schema = schema_for("s\nplain\n");
    let row = encode_row(&schema, &record(&[r#"quote " and \ slash"#]));
    assert_eq!(
        row.cells[0],
        Some(CellValue::Text(r#"quote " and \ slash"#.to_string()))
    );
}

#[test]
fn test_encode_trims_values() {
    let schema = schema_for("a,s\n1,x\n");
    let row = encode_row(&schema, &record(&[" 5 ", "  padded  "]));
    assert_eq!(row.cells[0], Some(CellValue::Int(5)));
    assert_eq!(row.cells[1], Some(CellValue::Text("padded".to_string())));
}

#[test]
fn test_encode_widened_column_stores_numbers_as_text() {
    // bool+int collision widened to String; both literals survive as text
    let schema = schema_for("x\ntrue\n1\n");
    let row_bool = encode_row(&schema, &record(&["true"]));
    let row_int = encode_row(&schema, &record(&["1"]));
    assert_eq!(row_bool.cells[0], Some(CellValue::Text("true".to_string())));
    assert_eq!(row_int.cells[0], Some(CellValue::Text("1".to_string())));
}

#[test]
fn test_cell_value_accessors() {
    assert_eq!(CellValue::Int(3).as_int(), Some(3));
    assert_eq!(CellValue::Int(3).as_float(), None);
    assert_eq!(CellValue::Bool(true).as_bool(), Some(true));
    assert_eq!(CellValue::Text("t".to_string()).as_text(), Some("t"));
    assert_eq!(CellValue::Float(1.5).as_float(), Some(1.5));
}
