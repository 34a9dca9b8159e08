//! Schema types

use serde::{Deserialize, Serialize};

/// The type detected for a CSV column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 text; the widest type, everything can be represented as it
    String,
    /// 64-bit signed integer
    Int64,
    /// 64-bit float
    Float64,
    /// Boolean literal ("true"/"false")
    Bool,
}

impl FieldType {
    /// Widen this type with new evidence, returning the join of the two.
    ///
    /// String absorbs everything; Int64 and Float64 combine numerically;
    /// Bool mixed with anything non-Bool is irreconcilable and falls
    /// back to String. The join is commutative and idempotent, so the
    /// final column type does not depend on sample order.
    pub fn widen(self, new: FieldType) -> FieldType {
        use FieldType::{Bool, Float64, Int64, String};
        match (self, new) {
            (String, _) | (_, String) => String,
            (Bool, Bool) => Bool,
            (Bool, _) | (_, Bool) => String,
            (Float64, _) | (_, Float64) => Float64,
            (Int64, Int64) => Int64,
        }
    }

    /// The Arrow data type this field maps to in the output file.
    pub fn arrow_type(self) -> arrow::datatypes::DataType {
        use arrow::datatypes::DataType;
        match self {
            FieldType::String => DataType::Utf8,
            FieldType::Int64 => DataType::Int64,
            FieldType::Float64 => DataType::Float64,
            FieldType::Bool => DataType::Boolean,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "UTF8"),
            FieldType::Int64 => write!(f, "INT64"),
            FieldType::Float64 => write!(f, "DOUBLE"),
            FieldType::Bool => write!(f, "BOOLEAN"),
        }
    }
}

/// One detected column: normalized name plus decided type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Normalized column name
    pub name: String,
    /// Decided field type
    pub field_type: FieldType,
}

/// The detected schema for one file: an ordered sequence of columns,
/// positionally aligned with the header row.
///
/// Immutable once detection finishes. Normalized names are NOT
/// deduplicated; two columns may share a name and keep their positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a schema from detected columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The columns, in header order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", col.name, col.field_type)?;
        }
        Ok(())
    }
}
