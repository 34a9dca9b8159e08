//! Schema detection from a bounded sample of rows

use super::types::{Column, FieldType, Schema};
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io;

/// Date-only patterns recognized as date-like.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Datetime patterns recognized as date-like; RFC3339 is tried
/// separately via chrono's dedicated parser.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Detect the schema of a CSV stream.
///
/// Reads the header row, then samples at most `sample_rows` data rows to
/// decide each column's type. A malformed row consumes one sampling
/// attempt but contributes no type evidence; end-of-input stops sampling
/// early. Failure to read the header row is the only fatal condition.
pub fn detect_schema<R: io::Read>(
    reader: R,
    delimiter: u8,
    sample_rows: usize,
) -> Result<Schema> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    let header = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(Error::schema_detect(format!("reading headers: {e}"))),
        None => return Err(Error::schema_detect("reading headers: empty input")),
    };

    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, raw)| normalize_header(raw, i))
        .collect();

    // Start every column at the narrowest informative type; evidence
    // only ever widens it.
    let mut types = vec![FieldType::Int64; names.len()];

    for _ in 0..sample_rows {
        match records.next() {
            None => break,
            // A failed read still consumes one of the sampling attempts.
            Some(Err(_)) => continue,
            Some(Ok(record)) => {
                for (i, value) in record.iter().enumerate() {
                    if i >= types.len() {
                        break;
                    }
                    let value = value.trim();
                    // Empty cells are never type evidence.
                    if value.is_empty() {
                        continue;
                    }
                    types[i] = types[i].widen(infer_value_type(value));
                }
            }
        }
    }

    let columns = names
        .into_iter()
        .zip(types)
        .map(|(name, field_type)| Column { name, field_type })
        .collect();
    Ok(Schema::new(columns))
}

/// Normalize a raw header cell into a column name.
///
/// Strips a leading BOM, trims whitespace, replaces spaces and dots
/// with underscores, and substitutes `column_<index>` for empty names.
pub fn normalize_header(raw: &str, index: usize) -> String {
    let name = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let name: String = name
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '.' { '_' } else { c })
        .collect();
    if name.is_empty() {
        format!("column_{index}")
    } else {
        name
    }
}

/// Classify a single non-empty cell value into an atomic field type.
pub fn infer_value_type(value: &str) -> FieldType {
    let value = value.trim();
    if value.is_empty() {
        return FieldType::String;
    }

    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return FieldType::Bool;
    }

    if value.parse::<i64>().is_ok() {
        return FieldType::Int64;
    }

    if value.parse::<f64>().is_ok() {
        return FieldType::Float64;
    }

    if is_date_like(value) {
        // Dates are stored as strings for compatibility.
        return FieldType::String;
    }

    FieldType::String
}

/// Whether a value matches one of the recognized date/time patterns.
pub fn is_date_like(value: &str) -> bool {
    if DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
    {
        return true;
    }
    if DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
    {
        return true;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
}
