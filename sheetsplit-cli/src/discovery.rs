//! Spreadsheet file discovery
//!
//! Scans the immediate entries of one directory; subdirectories are never
//! descended into.

use crate::error::CliError;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized spreadsheet extensions, matched case-insensitively
const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Find spreadsheet files directly inside `directory`, sorted by path
///
/// An empty result is not an error; the caller decides how to report it.
pub fn find_spreadsheets(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(CliError::NotADirectory(directory.display().to_string()).into());
    }

    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to list directory: {}", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read directory entry in: {}", directory.display())
        })?;
        let path = entry.path();
        if path.is_file() && has_spreadsheet_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn has_spreadsheet_extension(path: &Path) -> bool {
    path.extension().and_then(OsStr::to_str).is_some_and(|ext| {
        SPREADSHEET_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_finds_spreadsheets_case_insensitively() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.xlsx");
        touch(temp_dir.path(), "B.XLS");
        touch(temp_dir.path(), "c.XlSx");
        touch(temp_dir.path(), "notes.txt");

        let files = find_spreadsheets(temp_dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["B.XLS", "a.xlsx", "c.XlSx"]);
    }

    #[test]
    fn test_ignores_subdirectories_even_with_matching_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("fake.xlsx")).unwrap();
        touch(temp_dir.path(), "real.xlsx");

        let files = find_spreadsheets(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.xlsx"));
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let files = find_spreadsheets(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_extension_only_names_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), ".xlsx");

        let files = find_spreadsheets(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = find_spreadsheets(Path::new("/nonexistent/sheets"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Not a directory"));
    }

    #[test]
    fn test_plain_file_target_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("single.xlsx");
        File::create(&file).unwrap();

        let result = find_spreadsheets(&file);
        assert!(result.is_err());
    }
}
