#![allow(dead_code)]
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use uic_xref::runtime::text_source::{FsTextSource, TextSource};

/// Writes `files` (relative path, content) under a fresh temp directory.
pub fn create_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        std::fs::write(&path, content).expect("Failed to write fixture");
    }
    dir
}

/// In-memory text source keyed by path.
pub struct MockTextSource {
    pub files: HashMap<PathBuf, String>,
    pub reads: Mutex<Vec<PathBuf>>,
}

impl MockTextSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            reads: Mutex::new(Vec::new()),
        }
    }

    pub fn add_file(&mut self, path: &str, content: &str) {
        self.files.insert(PathBuf::from(path), content.to_string());
    }
}

impl TextSource for MockTextSource {
    fn read(&self, path: &Path) -> Result<String, String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("MockTextSource: no file at {}", path.display()))
    }
}

/// Reads from disk, except for the named files which always fail.
pub struct FailingTextSource {
    pub inner: FsTextSource,
    pub failing: HashSet<String>,
}

impl FailingTextSource {
    pub fn new(failing: &[&str]) -> Self {
        Self {
            inner: FsTextSource::default(),
            failing: failing.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl TextSource for FailingTextSource {
    fn read(&self, path: &Path) -> Result<String, String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing.contains(&name) {
            return Err(format!("Permission denied: {}", path.display()));
        }
        self.inner.read(path)
    }
}
