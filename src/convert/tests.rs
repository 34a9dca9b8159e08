//! Conversion pipeline tests

use super::*;
use arrow::array::{Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::io::Write;
use tempfile::tempdir;

fn test_config(input: PathBuf) -> ConvertConfig {
    ConvertConfig {
        input: Some(input),
        output: None,
        delete_original: false,
        log_level: "info".to_string(),
        batch_size: 100,
        delimiter: ",".to_string(),
        sample_rows: 100,
    }
}

fn write_csv(path: &Path, contents: &str) {
    let mut f = File::create(path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

fn read_parquet(path: &Path) -> Vec<RecordBatch> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(path).unwrap())
        .unwrap()
        .build()
        .unwrap();
    reader.map(|b| b.unwrap()).collect()
}

fn concat(batches: &[RecordBatch]) -> RecordBatch {
    arrow::compute::concat_batches(&batches[0].schema(), batches).unwrap()
}

// ============================================================================
// Output Path Tests
// ============================================================================

#[test]
fn test_output_path_alongside_input() {
    let config = test_config(PathBuf::from("x"));
    assert_eq!(
        output_path(Path::new("/data/sales.csv"), &config),
        PathBuf::from("/data/sales.parquet")
    );
}

#[test]
fn test_output_path_with_output_dir() {
    let mut config = test_config(PathBuf::from("x"));
    config.output = Some(PathBuf::from("/out"));
    assert_eq!(
        output_path(Path::new("/data/sales.csv"), &config),
        PathBuf::from("/out/sales.parquet")
    );
}

// ============================================================================
// Single-File Conversion Tests
// ============================================================================

#[test]
fn test_convert_file_int_and_string_with_sparse_cell() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.csv");
    write_csv(&input, "a,b\n1,foo\n2,bar\n,baz\n");

    let config = test_config(input.clone());
    let result = convert_file(&input, &config);
    assert!(result.is_success(), "error: {:?}", result.error);
    assert_eq!(result.input_path, input);
    assert!(result.output_size > 0);

    let out = result.output_path.unwrap();
    let batch = concat(&read_parquet(&out));
    assert_eq!(batch.num_rows(), 3);

    let a = batch
        .column(0)
        .as_any()
        .downcast_ref::<Int64Array>()
        .unwrap();
    assert_eq!(a.value(0), 1);
    assert_eq!(a.value(1), 2);
    // The empty cell is absent, not zero
    assert!(a.is_null(2));

    let b = batch
        .column(1)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(b.value(0), "foo");
    assert_eq!(b.value(2), "baz");
}

#[test]
fn test_convert_file_bool_int_collision_stored_as_text() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mixed.csv");
    write_csv(&input, "x\ntrue\n1\n");

    let config = test_config(input.clone());
    let result = convert_file(&input, &config);
    assert!(result.is_success());

    let batch = concat(&read_parquet(&result.output_path.unwrap()));
    let x = batch
        .column(0)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(x.value(0), "true");
    assert_eq!(x.value(1), "1");
}

#[test]
fn test_convert_file_short_rows_do_not_fail() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("short.csv");
    write_csv(&input, "a,b,c\n1,x,2.5\n7\n");

    let config = test_config(input.clone());
    let result = convert_file(&input, &config);
    assert!(result.is_success());

    let batch = concat(&read_parquet(&result.output_path.unwrap()));
    assert_eq!(batch.num_rows(), 2);
    assert!(batch.column(1).is_null(1));
    assert!(batch.column(2).is_null(1));
}

#[test]
fn test_convert_file_missing_input_is_stat_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.csv");
    let config = test_config(input.clone());

    let result = convert_file(&input, &config);
    assert!(!result.is_success());
    assert!(matches!(result.error, Some(Error::Stat { .. })));
    assert!(result.output_path.is_none());
}

#[test]
fn test_convert_file_empty_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    write_csv(&input, "");

    let config = test_config(input.clone());
    let result = convert_file(&input, &config);
    assert!(!result.is_success());
    assert!(matches!(result.error, Some(Error::SchemaDetect { .. })));

    // Schema detection failed before any output was created
    assert!(!input.with_extension("parquet").exists());
}

#[test]
fn test_convert_file_creates_output_dir() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.csv");
    write_csv(&input, "a\n1\n");

    let out_dir = dir.path().join("nested").join("out");
    let mut config = test_config(input.clone());
    config.output = Some(out_dir.clone());

    let result = convert_file(&input, &config);
    assert!(result.is_success());
    assert_eq!(result.output_path, Some(out_dir.join("data.parquet")));
    assert!(out_dir.join("data.parquet").exists());
}

#[test]
fn test_convert_file_keeps_source_by_default_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("keep.csv");
    write_csv(&input, "a\n1\n");

    let config = test_config(input.clone());
    let result = convert_file(&input, &config);
    assert!(result.is_success());
    assert!(input.exists());
}

#[test]
fn test_convert_file_deletes_source_when_configured() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("gone.csv");
    write_csv(&input, "a\n1\n");

    let mut config = test_config(input.clone());
    config.delete_original = true;

    let result = convert_file(&input, &config);
    assert!(result.is_success());
    assert!(!input.exists());
}

#[test]
fn test_convert_file_custom_delimiter() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("semi.csv");
    write_csv(&input, "a;b\n1;x\n");

    let mut config = test_config(input.clone());
    config.delimiter = ";".to_string();

    let result = convert_file(&input, &config);
    assert!(result.is_success());

    let batch = concat(&read_parquet(&result.output_path.unwrap()));
    assert_eq!(batch.num_columns(), 2);
    assert_eq!(batch.num_rows(), 1);
}

// ============================================================================
// Batch Run Tests
// ============================================================================

#[tokio::test]
async fn test_convert_all_preserves_input_order() {
    let dir = tempdir().unwrap();

    // First file is much bigger than the rest, so it finishes last under
    // concurrent execution; the result order must not care.
    let mut big = String::from("n\n");
    for i in 0..50_000 {
        big.push_str(&format!("{i}\n"));
    }
    write_csv(&dir.path().join("a.csv"), &big);
    write_csv(&dir.path().join("b.csv"), "n\n1\n");
    write_csv(&dir.path().join("c.csv"), "n\n2\n");
    write_csv(&dir.path().join("d.csv"), "n\n3\n");
    write_csv(&dir.path().join("e.csv"), "n\n4\n");

    let config = test_config(dir.path().to_path_buf());
    let results = convert_all(&config).await;

    assert_eq!(results.len(), 5);
    let names: Vec<_> = results
        .iter()
        .map(|r| {
            r.input_path
                .file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .to_string()
        })
        .collect();
    assert_eq!(names, vec!["a.csv", "b.csv", "c.csv", "d.csv", "e.csv"]);
    assert!(results.iter().all(ConversionResult::is_success));
}

#[tokio::test]
async fn test_convert_all_empty_directory_is_zero_work() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path().to_path_buf());
    let results = convert_all(&config).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_convert_all_one_failure_does_not_stop_the_batch() {
    let dir = tempdir().unwrap();
    write_csv(&dir.path().join("bad.csv"), "");
    write_csv(&dir.path().join("good.csv"), "a\n1\n");

    let config = test_config(dir.path().to_path_buf());
    let results = convert_all(&config).await;

    assert_eq!(results.len(), 2);
    assert!(!results[0].is_success());
    assert!(results[1].is_success());
}

#[tokio::test]
async fn test_convert_all_missing_input_is_single_error_result() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path().join("missing"));
    let results = convert_all(&config).await;

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0].error, Some(Error::Stat { .. })));
}

#[test]
fn test_bytes_saved() {
    let result = ConversionResult {
        input_path: PathBuf::from("a.csv"),
        output_path: Some(PathBuf::from("a.parquet")),
        input_size: 1000,
        output_size: 400,
        error: None,
    };
    assert_eq!(result.bytes_saved(), 600);

    let grew = ConversionResult {
        input_size: 100,
        output_size: 400,
        ..result
    };
    assert_eq!(grew.bytes_saved(), 0);
}
