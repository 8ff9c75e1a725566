//! Output file naming and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::GenerateError;
use crate::templates::TemplateKind;

/// Build the output file name for a template kind and its axis labels.
///
/// Labels are appended in the order given; the baseline (empty) label adds
/// nothing, so an all-baseline combination yields `<kind>.html`.
pub fn output_file_name(kind: TemplateKind, labels: &[&str]) -> String {
    let mut name = String::from(kind.stem());
    for label in labels {
        name.push_str(label);
    }
    name.push_str(".html");
    name
}

/// Writes rendered artifacts under a single output root.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make sure the output root exists.
    pub fn prepare(&self) -> Result<(), GenerateError> {
        fs::create_dir_all(&self.root).map_err(|e| GenerateError::Write {
            path: self.root.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Create or truncate `file_name` under the root and write `bytes` to it.
    pub fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, GenerateError> {
        let path = self.root.join(file_name);
        fs::write(&path, bytes).map_err(|e| GenerateError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn baseline_labels_contribute_nothing() {
        assert_eq!(output_file_name(TemplateKind::Index, &["", "", ""]), "index.html");
        assert_eq!(
            output_file_name(TemplateKind::ZeroResults, &["", "", ""]),
            "zero_results.html"
        );
    }

    #[test]
    fn labels_are_concatenated_in_order() {
        let name = output_file_name(TemplateKind::Search, &["_unstable", "", "_nofocus", "_both"]);

        assert_eq!(name, "search_unstable_nofocus_both.html");
    }

    #[test]
    fn overwrites_previous_output() {
        let temp = tempdir().unwrap();
        let writer = OutputWriter::new(temp.path());

        writer.write("index.html", b"a much longer first version").unwrap();
        let path = writer.write("index.html", b"short").unwrap();

        assert_eq!(fs::read(path).unwrap(), b"short");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = tempdir().unwrap();
        let writer = OutputWriter::new(temp.path().join("missing"));

        let result = writer.write("index.html", b"x");

        assert!(matches!(result, Err(GenerateError::Write { .. })));
    }
}
