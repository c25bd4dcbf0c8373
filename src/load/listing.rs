use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{MaskVisError, MaskVisResult};

/// A file whose stem is a plain integer, e.g. `00012.png`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberedFile {
    pub number: u64,
    pub path: PathBuf,
}

/// List regular files in `dir` (non-recursive).
pub(crate) fn list_files(dir: &Path) -> MaskVisResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read directory '{}'", dir.display()))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list directory '{}'", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat '{}'", entry.path().display()))?;
        if file_type.is_file() {
            out.push(entry.path());
        }
    }
    Ok(out)
}

/// List files in `dir` whose extension is one of `extensions` (case-insensitive), sorted by the
/// integer value of their stem.
///
/// A matching file whose stem is not an integer is an error: ordering would be undefined.
pub fn list_numbered(dir: &Path, extensions: &[&str]) -> MaskVisResult<Vec<NumberedFile>> {
    let mut out = Vec::new();
    for path in list_files(dir)? {
        if !has_extension(&path, extensions) {
            continue;
        }
        let number = file_stem(&path)
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| {
                MaskVisError::validation(format!(
                    "file name '{}' is not an integer frame number",
                    path.display()
                ))
            })?;
        out.push(NumberedFile { number, path });
    }
    out.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.path.cmp(&b.path)));
    Ok(out)
}

pub(crate) fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

pub(crate) fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Parse the trailing run of ASCII digits in `stem` (`mask_0012` -> 12).
pub fn trailing_index(stem: &str) -> Option<u64> {
    let digits_start = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    stem[digits_start..].parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/load/listing.rs"]
mod tests;
