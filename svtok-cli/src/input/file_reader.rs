//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Path of the output file written for `input` inside `output_dir`
    ///
    /// The input's extension is replaced, so `notes/brev.txt` becomes
    /// `<output_dir>/brev.<extension>`.
    pub fn output_path(input: &Path, output_dir: &Path, extension: &str) -> Result<PathBuf> {
        let stem = input
            .file_stem()
            .with_context(|| format!("Input has no file name: {}", input.display()))?;
        Ok(output_dir.join(format!("{}.{extension}", stem.to_string_lossy())))
    }
}
