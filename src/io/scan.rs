use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{Result, ToolError};

/// File name suffix identifying the workbooks we process.
pub const WORKBOOK_EXTENSION: &str = ".xlsx";

/// Lists the `.xlsx` files directly inside `dir`, sorted by file name.
///
/// Entries whose name does not end in `.xlsx` and entries that are not
/// regular files are skipped without notice.
#[instrument(level = "debug", skip_all, fields(dir = %dir.display()))]
pub fn list_workbooks(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            return Err(ToolError::MissingDirectory(dir.to_path_buf()));
        }
        Err(error) => return Err(error.into()),
    };

    let mut workbooks = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !is_workbook_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if !entry.path().is_file() {
            continue;
        }
        workbooks.push(entry.path());
    }

    workbooks.sort_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
    debug!(count = workbooks.len(), "workbooks found");
    Ok(workbooks)
}

fn is_workbook_name(name: &str) -> bool {
    name.ends_with(WORKBOOK_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn only_xlsx_files_are_listed_in_name_order() {
        let dir = tempdir().expect("temporary directory");
        for name in ["b.xlsx", "a.xlsx", "notes.txt", "c.XLSX", "d.xlsx.bak"] {
            fs::write(dir.path().join(name), b"").expect("fixture written");
        }
        fs::create_dir(dir.path().join("folder.xlsx")).expect("fixture directory");

        let found = list_workbooks(dir.path()).expect("directory listed");
        let names: Vec<String> = found
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.xlsx", "b.xlsx"]);
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempdir().expect("temporary directory");
        let missing = dir.path().join("nope");

        let error = list_workbooks(&missing).expect_err("missing directory");
        assert!(matches!(error, ToolError::MissingDirectory(path) if path == missing));
    }
}
