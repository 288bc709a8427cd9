use crate::runtime::text_source::{Encoding, DEFAULT_ENCODINGS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Searched for documents and command files; each also gets its own reference index.
    pub roots: Vec<PathBuf>,
    #[serde(default = "default_document_extension")]
    pub document_extension: String,
    #[serde(default = "default_reference_extension")]
    pub reference_extension: String,
    #[serde(default = "default_command_extension")]
    pub command_extension: String,
    #[serde(default = "default_reference_attribute")]
    pub reference_attribute: String,
    #[serde(default = "default_encodings")]
    pub encodings: Vec<Encoding>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_document_extension() -> String {
    "uic".to_string()
}

fn default_reference_extension() -> String {
    "xml".to_string()
}

fn default_command_extension() -> String {
    "pmlcmd".to_string()
}

fn default_reference_attribute() -> String {
    "Path".to_string()
}

fn default_encodings() -> Vec<Encoding> {
    DEFAULT_ENCODINGS.to_vec()
}

impl RunConfig {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            document_extension: default_document_extension(),
            reference_extension: default_reference_extension(),
            command_extension: default_command_extension(),
            reference_attribute: default_reference_attribute(),
            encodings: default_encodings(),
            output: None,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        Self::from_json(&content)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }
}
