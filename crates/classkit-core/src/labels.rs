//! Label-list parsing shared by the lottery and the grouping tool.
//!
//! Lists are plain text: entries separated by newlines or commas, surrounding
//! whitespace trimmed, empty entries discarded. Order is preserved and
//! duplicates are kept.

use std::path::Path;

use crate::error::{CoreError, Result};

/// Split free text into labels.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a UTF-8 text file and parse it into labels.
///
/// # Errors
///
/// Returns [`CoreError::LabelImport`] if the file cannot be read. An empty
/// or whitespace-only file is not an error; it yields an empty list.
pub fn read_label_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CoreError::LabelImport {
        path: path.to_path_buf(),
        source,
    })?;
    let labels = parse_labels(&text);
    tracing::debug!(path = %path.display(), count = labels.len(), "imported label list");
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_on_newlines_and_commas() {
        let labels = parse_labels("Amy, Ben\nCleo,Dan");
        assert_eq!(labels, vec!["Amy", "Ben", "Cleo", "Dan"]);
    }

    #[test]
    fn trims_and_discards_empty_entries() {
        let labels = parse_labels("  Amy  ,,\r\n\n , Ben\r\n");
        assert_eq!(labels, vec!["Amy", "Ben"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let labels = parse_labels("Amy\nBen\nAmy");
        assert_eq!(labels, vec!["Amy", "Ben", "Amy"]);
    }

    #[test]
    fn blank_text_yields_nothing() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels(" \n , \n").is_empty());
    }

    #[test]
    fn reads_label_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "王小明\n李小華, 陳大文").unwrap();
        let labels = read_label_file(file.path()).unwrap();
        assert_eq!(labels, vec!["王小明", "李小華", "陳大文"]);
    }

    #[test]
    fn missing_file_is_an_import_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_label_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CoreError::LabelImport { .. }));
    }
}
