use chrono::Datelike;
use std::fs;
use stencil::metadata::{append_gitignore, copyright_years, write_license};
use stencil::registry::Ecosystem;
use tempfile::TempDir;

#[test]
fn test_copyright_years() {
    assert_eq!(copyright_years(2019, 2024), "2019 - 2024");
    assert_eq!(copyright_years(2024, 2024), "2024");
}

#[test]
fn test_gitignore_is_created_with_ignore_block() {
    let temp_dir = TempDir::new().unwrap();

    append_gitignore(temp_dir.path(), Ecosystem::Node).unwrap();

    let content = fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap();
    assert!(content.contains("node_modules/"));
}

#[test]
fn test_gitignore_append_preserves_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".gitignore");
    fs::write(&path, "my-secret.txt\n").unwrap();

    append_gitignore(temp_dir.path(), Ecosystem::Python).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("my-secret.txt\n"));
    assert!(content.contains("__pycache__/"));
}

#[test]
fn test_gitignore_append_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();

    append_gitignore(temp_dir.path(), Ecosystem::Node).unwrap();
    let first = fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap();

    append_gitignore(temp_dir.path(), Ecosystem::Node).unwrap();
    let second = fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_license_substitutes_holder_and_year() {
    let temp_dir = TempDir::new().unwrap();
    let current_year = chrono::Local::now().year();

    write_license(temp_dir.path(), "Jane Doe", current_year).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("LICENSE")).unwrap();
    assert!(content.contains(&format!("Copyright (c) {} Jane Doe", current_year)));
    assert!(!content.contains("<year>"));
    assert!(!content.contains("<copyright holders>"));
}

#[test]
fn test_license_with_earlier_creation_year_renders_range() {
    let temp_dir = TempDir::new().unwrap();
    let current_year = chrono::Local::now().year();

    write_license(temp_dir.path(), "Jane Doe", 2019).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("LICENSE")).unwrap();
    assert!(content.contains(&format!("2019 - {}", current_year)));
}

#[test]
fn test_license_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("LICENSE");
    fs::write(&path, "old license\n").unwrap();

    write_license(temp_dir.path(), "Jane Doe", 2024).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("old license"));
    assert!(content.contains("MIT License"));
}
