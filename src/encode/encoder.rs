//! Row encoding against a detected schema

use super::types::{CellValue, EncodedRow};
use crate::schema::{FieldType, Schema};

/// Encode one raw CSV record against the schema.
///
/// Per column: a missing trailing cell or a cell that trims to empty is
/// omitted entirely. Otherwise the cell is converted using the column's
/// decided type; a value that unexpectedly fails to parse is omitted as
/// well, since the detector may have sampled different rows than the
/// ones streamed here.
pub fn encode_row(schema: &Schema, record: &csv::StringRecord) -> EncodedRow {
    let cells = schema
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let value = record.get(i).map(str::trim).unwrap_or_default();
            if value.is_empty() {
                return None;
            }
            encode_cell(column.field_type, value)
        })
        .collect();

    EncodedRow { cells }
}

fn encode_cell(field_type: FieldType, value: &str) -> Option<CellValue> {
    match field_type {
        FieldType::Int64 => value.parse::<i64>().ok().map(CellValue::Int),
        FieldType::Float64 => value.parse::<f64>().ok().map(CellValue::Float),
        FieldType::Bool => match value.to_ascii_lowercase().as_str() {
            "true" => Some(CellValue::Bool(true)),
            "false" => Some(CellValue::Bool(false)),
            _ => None,
        },
        FieldType::String => Some(CellValue::Text(value.to_string())),
    }
}
