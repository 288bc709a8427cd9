use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every file under `root` whose extension equals `extension`
/// (case-insensitive), sorted by path string. Unreadable subdirectories are skipped.
pub fn list_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, String> {
    if !root.is_dir() {
        return Err(format!("Root directory not found: {}", root.display()));
    }

    let mut files = Vec::new();
    for item in WalkDir::new(root).follow_links(false) {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!("[Corpus] Skipping entry under {}: {}", root.display(), err);
                continue;
            }
        };
        if item.file_type().is_file() && has_extension(item.path(), extension) {
            files.push(item.into_path());
        }
    }

    files.sort_by_cached_key(|path| path.to_string_lossy().into_owned());
    Ok(files)
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case_and_leading_dot() {
        assert!(has_extension(Path::new("a/Main.UIC"), "uic"));
        assert!(has_extension(Path::new("a/Main.uic"), ".uic"));
        assert!(!has_extension(Path::new("a/Main.uicx"), "uic"));
        assert!(!has_extension(Path::new("a/uic"), "uic"));
    }
}
