use crate::runtime::corpus::list_files;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// All files with `extension` under every root, de-duplicated and sorted by
/// full path string (`a-b/x` before `a/x`).
pub fn discover_files(roots: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>, String> {
    let mut files = BTreeMap::new();
    for root in roots {
        for path in list_files(root, extension)? {
            files.insert(path.to_string_lossy().into_owned(), path);
        }
    }
    Ok(files.into_values().collect())
}

pub fn discover_documents(roots: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>, String> {
    let documents = discover_files(roots, extension)?;
    tracing::info!(
        "[Uic] {} .{} documents under {} roots",
        documents.len(),
        extension,
        roots.len()
    );
    Ok(documents)
}

/// Lower-cased basename used as the reference-index key for a document.
pub fn document_key(path: &Path) -> String {
    crate::sources::common::file_name_of(path).to_lowercase()
}
