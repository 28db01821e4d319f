//! Integration tests for schema file loading.

use std::fs;
use std::path::PathBuf;

use schemamap_cli::schema::read_columns;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("schemamap-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp schema file");
    path
}

#[test]
fn reads_plain_text_lists() {
    let path = temp_file("plain.txt", "emp_id\n  emp_name  \n\n# comment\ndept_cd\n");
    let columns = read_columns(&path).expect("read plain schema");
    assert_eq!(columns, vec!["emp_id", "emp_name", "dept_cd"]);
    fs::remove_file(&path).ok();
}

#[test]
fn reads_csv_header_row() {
    let path = temp_file("header.csv", "EmployeeID,EmployeeName,CreatedDate\n1,Ada,2024-01-01\n");
    let columns = read_columns(&path).expect("read csv schema");
    assert_eq!(columns, vec!["EmployeeID", "EmployeeName", "CreatedDate"]);
    fs::remove_file(&path).ok();
}

#[test]
fn empty_csv_yields_no_columns() {
    let path = temp_file("empty.csv", "");
    let columns = read_columns(&path).expect("read empty csv");
    assert!(columns.is_empty());
    fs::remove_file(&path).ok();
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("schemamap-does-not-exist.txt");
    assert!(read_columns(&path).is_err());
}
