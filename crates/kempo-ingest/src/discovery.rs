//! Source file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        // Check for .csv extension (case-insensitive)
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), count = files.len(), "listed csv files");

    Ok(files)
}

/// Area name for a source file: its file stem.
pub fn area_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_csv_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("osaka.csv"), "1").unwrap();
        fs::write(dir.path().join("aichi.CSV"), "1").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["aichi.CSV", "osaka.csv"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = list_csv_files(Path::new("/no/such/dir"));
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn area_name_drops_extension() {
        assert_eq!(area_name(Path::new("data/tokyo.csv")), "tokyo");
        assert_eq!(area_name(Path::new("data/hokkaido.2024.csv")), "hokkaido.2024");
    }
}
