use serde::{Deserialize, Serialize};
use std::path::Path;

/// Yields the text of a file. Implementations decode permissively, so the
/// only failures are I/O failures.
pub trait TextSource: Send + Sync {
    fn read(&self, path: &Path) -> Result<String, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-16 announced by a byte order mark.
    #[serde(rename = "utf-16", alias = "utf16")]
    Utf16,
    #[serde(rename = "utf-16-le", alias = "utf-16le")]
    Utf16Le,
    #[serde(rename = "utf-16-be", alias = "utf-16be")]
    Utf16Be,
    #[serde(rename = "windows-1252", alias = "cp1252")]
    Windows1252,
    #[serde(rename = "latin-1", alias = "iso-8859-1")]
    Latin1,
}

/// BOM-less UTF-16 accepts nearly any even-length input, so it is opt-in.
pub const DEFAULT_ENCODINGS: &[Encoding] = &[
    Encoding::Utf8,
    Encoding::Utf16,
    Encoding::Windows1252,
    Encoding::Latin1,
];

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

impl Encoding {
    /// Strict decode; `None` when the bytes are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => strict(
                encoding_rs::UTF_8,
                bytes.strip_prefix(BOM_UTF8).unwrap_or(bytes),
            ),
            Encoding::Utf16 => match encoding_rs::Encoding::for_bom(bytes) {
                Some((encoding, bom_len))
                    if encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE =>
                {
                    strict(encoding, &bytes[bom_len..])
                }
                _ => None,
            },
            Encoding::Utf16Le => strict(
                encoding_rs::UTF_16LE,
                bytes.strip_prefix(BOM_UTF16_LE).unwrap_or(bytes),
            ),
            Encoding::Utf16Be => strict(
                encoding_rs::UTF_16BE,
                bytes.strip_prefix(BOM_UTF16_BE).unwrap_or(bytes),
            ),
            // WHATWG windows-1252: the five bytes cp1252 leaves undefined map to
            // the C1 controls, the same code points latin-1 would give.
            Encoding::Windows1252 => strict(encoding_rs::WINDOWS_1252, bytes),
            // encoding_rs treats "latin-1" as a windows-1252 label.
            Encoding::Latin1 => Some(bytes.iter().map(|&byte| char::from(byte)).collect()),
        }
    }
}

fn strict(encoding: &'static encoding_rs::Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// Tries each encoding in order, then falls back to lossy UTF-8.
pub fn decode_with_fallback(bytes: &[u8], encodings: &[Encoding]) -> String {
    encodings
        .iter()
        .find_map(|encoding| encoding.decode(bytes))
        .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned())
}

pub struct FsTextSource {
    encodings: Vec<Encoding>,
}

impl FsTextSource {
    pub fn new(encodings: Vec<Encoding>) -> Self {
        Self { encodings }
    }
}

impl Default for FsTextSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODINGS.to_vec())
    }
}

impl TextSource for FsTextSource {
    fn read(&self, path: &Path) -> Result<String, String> {
        let bytes = std::fs::read(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        Ok(decode_with_fallback(&bytes, &self.encodings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_wins_when_valid() {
        let text = decode_with_fallback("Légende".as_bytes(), DEFAULT_ENCODINGS);
        assert_eq!(text, "Légende");
    }

    #[test]
    fn windows_1252_bytes_fall_through_utf8() {
        let bytes = b"Caf\xE9 \x80";
        assert_eq!(decode_with_fallback(bytes, DEFAULT_ENCODINGS), "Café €");
    }

    #[test]
    fn undefined_windows_1252_byte_maps_to_c1_control() {
        assert_eq!(Encoding::Windows1252.decode(b"a\x81b"), Some("a\u{81}b".to_string()));
        assert_eq!(Encoding::Latin1.decode(b"a\x81b"), Some("a\u{81}b".to_string()));
    }

    #[test]
    fn utf16_variants_reject_broken_input() {
        assert_eq!(Encoding::Utf16Le.decode(&[0x41]), None);
        assert_eq!(Encoding::Utf16Le.decode(&[0x00, 0xD8]), None);
        assert_eq!(
            Encoding::Utf16Be.decode(&[0xFE, 0xFF, 0x00, 0x41]),
            Some("A".to_string())
        );
    }

    #[test]
    fn utf8_bom_is_dropped() {
        assert_eq!(
            decode_with_fallback(b"\xEF\xBB\xBF<A>", DEFAULT_ENCODINGS),
            "<A>"
        );
    }

    #[test]
    fn utf16_requires_bom() {
        assert_eq!(Encoding::Utf16.decode(&[0x41, 0x00]), None);
        assert_eq!(
            Encoding::Utf16.decode(&[0xFF, 0xFE, 0x41, 0x00]),
            Some("A".to_string())
        );
    }

    #[test]
    fn exhausted_list_decodes_lossily() {
        let text = decode_with_fallback(b"ok\xFF", &[Encoding::Utf8]);
        assert_eq!(text, "ok\u{FFFD}");
    }
}
