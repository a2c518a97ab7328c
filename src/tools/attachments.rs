//! Question attachments: files named after a question identifier.
//!
//! Two conventions exist, both derived by appending a fixed extension to the
//! identifier: `<id>.py` for source listings and `<id>.xlsx` for
//! spreadsheets. Existence is checked before any read so a missing
//! attachment reports cleanly instead of surfacing a parser error.

use super::ToolError;
use calamine::{open_workbook, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Reads question attachments from a configured directory.
pub struct AttachmentStore {
    dir: PathBuf,
}

impl AttachmentStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Return the contents of the Python file attached to a question.
    pub async fn python_contents(&self, question_id: &str) -> Result<String, ToolError> {
        let file_name = format!("{}.py", question_id);
        let path = self.dir.join(&file_name);

        if !path.exists() {
            return Err(ToolError::NotFound(file_name));
        }

        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| downstream(&e.to_string()))?;

        Ok(format!("Contents of {}:\n{}", file_name, contents))
    }

    /// Return a full text dump of the spreadsheet attached to a question.
    ///
    /// Matches the behavior of reading the first worksheet: every row is
    /// emitted as tab-separated cell values.
    pub async fn excel_contents(&self, question_id: &str) -> Result<String, ToolError> {
        let file_name = format!("{}.xlsx", question_id);
        let path = self.dir.join(&file_name);

        if !path.exists() {
            return Err(ToolError::NotFound(file_name));
        }

        let mut workbook: Xlsx<_> = open_workbook(&path)
            .map_err(|e: calamine::XlsxError| downstream(&e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| downstream(&format!("{} contains no worksheets", file_name)))?
            .map_err(|e| downstream(&e.to_string()))?;

        let dump = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format!("Contents of {}:\n{}", file_name, dump))
    }
}

fn downstream(message: &str) -> ToolError {
    ToolError::Downstream(format!("reading file: {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_python_contents_not_found() {
        let dir = TempDir::new().unwrap();
        let store = AttachmentStore::new(dir.path());

        let err = store.python_contents("Q42").await.unwrap_err();
        assert_eq!(err.to_string(), "File Q42.py not found.");
    }

    #[tokio::test]
    async fn test_excel_contents_not_found() {
        let dir = TempDir::new().unwrap();
        let store = AttachmentStore::new(dir.path());

        let err = store.excel_contents("Q42").await.unwrap_err();
        assert_eq!(err.to_string(), "File Q42.xlsx not found.");
    }

    #[tokio::test]
    async fn test_python_contents_reads_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Q1.py"), "print('hi')\n").unwrap();
        let store = AttachmentStore::new(dir.path());

        let result = store.python_contents("Q1").await.unwrap();
        assert!(result.starts_with("Contents of Q1.py:\n"));
        assert!(result.contains("print('hi')"));
    }

    #[tokio::test]
    async fn test_excel_contents_rejects_non_workbook() {
        // A present but unreadable workbook is a downstream failure, not a
        // missing file.
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Q2.xlsx"), "not a zip archive").unwrap();
        let store = AttachmentStore::new(dir.path());

        let err = store.excel_contents("Q2").await.unwrap_err();
        assert!(err.to_string().starts_with("Error reading file:"));
    }
}
