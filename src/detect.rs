//! Input-kind detection for files and buffers.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::extract::RunPage;
use crate::model::ResumeData;

/// What a given input appears to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A JSON array of positioned-run pages
    RunDump,
    /// A JSON resume structure
    Structure,
    /// Resume-style plain text
    PlainText,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::RunDump => write!(f, "positioned-run dump"),
            InputKind::Structure => write!(f, "resume structure"),
            InputKind::PlainText => write!(f, "plain text"),
        }
    }
}

/// UTF-8 byte order mark, tolerated at the start of any input.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Detect the input kind from raw bytes.
///
/// A buffer whose first non-whitespace byte opens a JSON array that
/// parses as a run dump is a [`InputKind::RunDump`]; one opening a
/// JSON object that parses as a resume structure is a
/// [`InputKind::Structure`]. Everything else, including JSON-looking
/// text that fails to parse, is treated as plain text — the structural
/// parser accepts arbitrary text, so plain text is always a safe
/// fallback.
pub fn detect_input_from_bytes(data: &[u8]) -> InputKind {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let first = data.iter().find(|b| !b.is_ascii_whitespace());

    match first {
        Some(b'[') => {
            if serde_json::from_slice::<Vec<RunPage>>(data).is_ok() {
                InputKind::RunDump
            } else {
                InputKind::PlainText
            }
        }
        Some(b'{') => {
            if serde_json::from_slice::<ResumeData>(data).is_ok() {
                InputKind::Structure
            } else {
                InputKind::PlainText
            }
        }
        _ => InputKind::PlainText,
    }
}

/// Detect the input kind from a file path.
///
/// A `.txt` or `.md` extension short-circuits to plain text; anything
/// else (including `.json`, which may hold either JSON kind) is read
/// and sniffed by content.
pub fn detect_input_from_path<P: AsRef<Path>>(path: P) -> Result<InputKind> {
    let path = path.as_ref();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("md") {
            return Ok(InputKind::PlainText);
        }
    }

    let data = fs::read(path)?;
    Ok(detect_input_from_bytes(&data))
}

/// Check if bytes hold a positioned-run dump.
pub fn is_run_dump_bytes(data: &[u8]) -> bool {
    detect_input_from_bytes(data) == InputKind::RunDump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_run_dump() {
        let data = br#"[{"items":[{"str":"Hi","transform":[12,0,0,12,72,700],"width":11}]}]"#;
        assert_eq!(detect_input_from_bytes(data), InputKind::RunDump);
        assert!(is_run_dump_bytes(data));
    }

    #[test]
    fn test_detect_structure() {
        let data = br#"{"header":{"name":"Jane","contactItems":[]},"sections":[]}"#;
        assert_eq!(detect_input_from_bytes(data), InputKind::Structure);
    }

    #[test]
    fn test_detect_plain_text() {
        assert_eq!(detect_input_from_bytes(b"Jane Doe\nEXPERIENCE"), InputKind::PlainText);
        assert_eq!(detect_input_from_bytes(b""), InputKind::PlainText);
    }

    #[test]
    fn test_detect_bracketed_text_is_not_a_dump() {
        assert_eq!(
            detect_input_from_bytes(b"[note to self] revise summary"),
            InputKind::PlainText
        );
    }

    #[test]
    fn test_detect_skips_bom_and_whitespace() {
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend_from_slice(b"  \n[]");
        assert_eq!(detect_input_from_bytes(&data), InputKind::RunDump);
    }
}
