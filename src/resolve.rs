//! Input path resolution
//!
//! Expands the configured input path into the ordered list of CSV files
//! to convert: a single file, or every `.csv` directly inside a
//! directory (non-recursive).

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A source file discovered during resolution, with its size at
/// discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path to the CSV file
    pub path: PathBuf,
    /// Byte size when the file was resolved
    pub size: u64,
}

impl SourceFile {
    /// Stat a path into a `SourceFile`.
    pub fn stat(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let meta = fs::metadata(&path).map_err(|e| Error::stat(&path, e))?;
        Ok(Self {
            path,
            size: meta.len(),
        })
    }
}

/// Resolve an input path into the list of files to convert.
///
/// * Regular file → a single-element list.
/// * Directory → every direct child with a `csv` extension, sorted by
///   path for a deterministic order.
///
/// An empty directory result is not an error; the caller decides how to
/// report zero work.
pub fn resolve_input(input: &Path) -> Result<Vec<SourceFile>> {
    let meta = fs::metadata(input).map_err(|e| Error::stat(input, e))?;

    if !meta.is_dir() {
        return Ok(vec![SourceFile {
            path: input.to_path_buf(),
            size: meta.len(),
        }]);
    }

    let entries = fs::read_dir(input).map_err(|e| Error::dir_list(input, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::dir_list(input, e))?;
        let path = entry.path();
        if !has_csv_extension(&path) {
            continue;
        }
        let meta = entry.metadata().map_err(|e| Error::stat(&path, e))?;
        if !meta.is_file() {
            continue;
        }
        files.push(SourceFile {
            path,
            size: meta.len(),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
