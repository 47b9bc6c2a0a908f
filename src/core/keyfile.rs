//! Language key file format.
//!
//! ```text
//! version> 1.0
//!
//! # FIELD: HELLO com.example.Foo
//! 0> Hello
//!
//! # ANNOTATION METHOD: greeting() com.example.Screen Lcom.example.MyAnno;
//! 1> Hi
//!
//! ```
//!
//! Files are UTF-16 with a byte-order mark (big-endian when written), lines
//! end with `\n`, and newlines inside a literal are escaped as the two
//! characters `\n` so every value stays on one line.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::data::OutputEntry;

const VERSION_PREFIX: &str = "version> ";
const COMMENT_PREFIX: &str = "# ";
const BOM_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_LE: [u8; 2] = [0xFF, 0xFE];

/// Escape real newlines as the two-character sequence `\n`.
pub fn escape_literal(literal: &str) -> String {
    literal.replace('\n', "\\n")
}

/// Reverse [`escape_literal`].
pub fn unescape_literal(value: &str) -> String {
    value.replace("\\n", "\n")
}

/// Render the key file as text.
pub fn render_key_file(version: &str, entries: &[OutputEntry]) -> String {
    let mut out = String::new();
    out.push_str(VERSION_PREFIX);
    out.push_str(version);
    out.push_str("\n\n");

    for entry in entries {
        out.push_str(COMMENT_PREFIX);
        out.push_str(entry.record.comment());
        out.push('\n');
        out.push_str(&entry.index.to_string());
        out.push_str("> ");
        out.push_str(&escape_literal(entry.record.literal()));
        out.push_str("\n\n");
    }

    out
}

/// Encode text as UTF-16 big-endian with a byte-order mark.
pub fn encode_utf16(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&BOM_BE);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// Write the key file, replacing any existing file.
///
/// The whole file is rendered in memory first, so a failed write never leaves
/// a partially rendered artifact behind.
pub fn write_key_file(path: &Path, version: &str, entries: &[OutputEntry]) -> Result<()> {
    let bytes = encode_utf16(&render_key_file(version, entries));
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write key file: {}", path.display()))
}

// ============================================================
// Reading
// ============================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyFileError {
    #[error("odd number of bytes in UTF-16 data")]
    OddLength,

    #[error("invalid UTF-16 data")]
    InvalidUtf16,

    #[error("line 1: missing 'version>' header")]
    MissingVersion,

    #[error("line {line}: expected '<index>> <text>' after comment")]
    MissingValue { line: usize },

    #[error("line {line}: invalid key index '{index}'")]
    InvalidIndex { line: usize, index: String },

    #[error("line {line}: expected '# <comment>'")]
    UnexpectedLine { line: usize },
}

/// One parsed key file entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFileEntry {
    pub index: usize,
    pub comment: String,
    /// Literal text with escapes reversed.
    pub literal: String,
}

/// A parsed key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFile {
    pub version: String,
    pub entries: Vec<KeyFileEntry>,
}

/// Decode UTF-16 bytes. A byte-order mark selects the endianness; without one
/// big-endian is assumed.
pub fn decode_utf16(bytes: &[u8]) -> Result<String, KeyFileError> {
    if bytes.len() % 2 != 0 {
        return Err(KeyFileError::OddLength);
    }

    let (body, little_endian) = match bytes.get(..2) {
        Some(bom) if bom == BOM_BE => (&bytes[2..], false),
        Some(bom) if bom == BOM_LE => (&bytes[2..], true),
        _ => (bytes, false),
    };

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if little_endian {
                u16::from_le_bytes(pair)
            } else {
                u16::from_be_bytes(pair)
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|_| KeyFileError::InvalidUtf16)
}

/// Parse key file text.
pub fn parse_key_file(text: &str) -> Result<KeyFile, KeyFileError> {
    // Split on `\n` only: a literal may end in `\r`.
    let mut lines = text.split('\n').enumerate().map(|(i, line)| (i + 1, line));

    let version = lines
        .next()
        .and_then(|(_, line)| line.strip_prefix(VERSION_PREFIX))
        .ok_or(KeyFileError::MissingVersion)?
        .to_string();

    let mut entries = Vec::new();
    while let Some((line_no, line)) = lines.next() {
        if line.is_empty() {
            continue;
        }

        let comment = line
            .strip_prefix(COMMENT_PREFIX)
            .ok_or(KeyFileError::UnexpectedLine { line: line_no })?;

        let (value_line_no, value_line) = lines
            .next()
            .ok_or(KeyFileError::MissingValue { line: line_no + 1 })?;

        let (index, value) = value_line
            .split_once("> ")
            .ok_or(KeyFileError::MissingValue {
                line: value_line_no,
            })?;

        let index = index.parse().map_err(|_| KeyFileError::InvalidIndex {
            line: value_line_no,
            index: index.to_string(),
        })?;

        entries.push(KeyFileEntry {
            index,
            comment: comment.to_string(),
            literal: unescape_literal(value),
        });
    }

    Ok(KeyFile { version, entries })
}

/// Read and parse a key file from disk.
pub fn read_key_file(path: &Path) -> Result<KeyFile> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read key file: {}", path.display()))?;
    let text = decode_utf16(&bytes)
        .with_context(|| format!("Failed to decode key file: {}", path.display()))?;
    parse_key_file(&text).with_context(|| format!("Failed to parse key file: {}", path.display()))
}
