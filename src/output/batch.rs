//! Encoded rows to Arrow RecordBatch conversion

use crate::encode::{CellValue, EncodedRow};
use crate::error::{Error, Result};
use crate::schema::{FieldType, Schema};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{Field, Schema as ArrowSchema, SchemaRef};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Declare the Arrow schema for a detected CSV schema.
///
/// Every field is nullable: the sparse row encoding omits empty and
/// missing cells, which surface as nulls in the columnar output.
pub fn to_arrow_schema(schema: &Schema) -> ArrowSchema {
    let fields: Vec<Field> = schema
        .columns()
        .iter()
        .map(|col| Field::new(&col.name, col.field_type.arrow_type(), true))
        .collect();
    ArrowSchema::new(fields)
}

/// Convert a buffer of encoded rows into one RecordBatch.
///
/// Absent cells become nulls in their column's array.
pub fn rows_to_batch(
    schema: &Schema,
    arrow_schema: &SchemaRef,
    rows: &[EncodedRow],
) -> Result<RecordBatch> {
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.len());

    for (i, column) in schema.columns().iter().enumerate() {
        let cells = rows
            .iter()
            .map(|row| row.cells.get(i).and_then(Option::as_ref));

        let array: ArrayRef = match column.field_type {
            FieldType::Bool => {
                let arr: BooleanArray =
                    cells.map(|c| c.and_then(CellValue::as_bool)).collect();
                Arc::new(arr)
            }
            FieldType::Int64 => {
                let arr: Int64Array = cells.map(|c| c.and_then(CellValue::as_int)).collect();
                Arc::new(arr)
            }
            FieldType::Float64 => {
                let arr: Float64Array =
                    cells.map(|c| c.and_then(CellValue::as_float)).collect();
                Arc::new(arr)
            }
            FieldType::String => {
                let arr: StringArray = cells
                    .map(|c| c.and_then(|v| v.as_text().map(ToString::to_string)))
                    .collect();
                Arc::new(arr)
            }
        };
        columns.push(array);
    }

    RecordBatch::try_new(Arc::clone(arrow_schema), columns).map_err(|e| {
        Error::output(format!("Failed to create RecordBatch: {e}"))
    })
}
