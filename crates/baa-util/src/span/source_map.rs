//! Source map - file loading and line lookup.
//!
//! The [`SourceMap`] owns every source file of a compilation session and
//! hands out [`FileId`]s. Input files are UTF-16LE when they begin with the
//! BOM `0xFEFF`, otherwise UTF-8; either way the decoded text is kept as a
//! single UTF-8 `String`. Line endings are not normalized here; the lexer
//! understands `\n`, `\r\n` and bare `\r`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use super::FileId;

/// Errors produced while loading a source file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but contains no bytes.
    #[error("file is empty: {0}")]
    Empty(PathBuf),

    /// A UTF-16LE file (BOM present) contained an odd byte count or an
    /// unpaired surrogate.
    #[error("invalid UTF-16LE sequence in {0}")]
    InvalidUtf16(PathBuf),

    /// A BOM-less file was not valid UTF-8.
    #[error("invalid UTF-8 sequence in {0}")]
    InvalidUtf8(PathBuf),

    /// Any other I/O failure.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single loaded source file.
#[derive(Debug)]
pub struct SourceFile {
    /// Display name (path or synthetic name like `<stdin>`).
    pub name: String,
    /// Decoded source text.
    pub src: String,
    /// Byte offset of the first character of each line.
    line_starts: Vec<usize>,
}

impl SourceFile {
    fn new(name: String, src: String) -> Self {
        let line_starts = compute_line_starts(&src);
        Self {
            name,
            src,
            line_starts,
        }
    }

    /// Returns the text of the given 1-based line, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let idx = (line - 1) as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .copied()
            .unwrap_or(self.src.len());
        let text = &self.src[start..end];
        Some(text.trim_end_matches(['\n', '\r']))
    }

    /// Number of lines in the file (an empty file has one empty line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Line starts for `\n`, `\r\n` and bare `\r` terminators.
fn compute_line_starts(src: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let bytes = src.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => starts.push(i + 1),
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                starts.push(i + 1);
            },
            _ => {},
        }
        i += 1;
    }
    starts
}

/// Owns all source files of a session.
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
    /// Path/name to FileId, in insertion order.
    index: IndexMap<String, FileId>,
}

impl SourceMap {
    /// Create an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a file from disk, decoding UTF-16LE (with BOM) or UTF-8.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, SourceError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        if bytes.is_empty() {
            return Err(SourceError::Empty(path.to_path_buf()));
        }

        let src = decode_source(&bytes, path)?;
        Ok(self.add_file(path.display().to_string(), src))
    }

    /// Register an in-memory source under a display name.
    pub fn add_file(&mut self, name: String, src: String) -> FileId {
        let id = FileId::new(self.files.len() as u32);
        self.index.insert(name.clone(), id);
        self.files.push(SourceFile::new(name, src));
        id
    }

    /// Look up a file by id. Panics on a foreign id.
    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.index()]
    }

    /// Display name for a file id, or `<unknown>` for ids this map never
    /// issued (e.g. dummy spans in tests).
    pub fn name(&self, id: FileId) -> &str {
        self.files
            .get(id.index())
            .map(|f| f.name.as_str())
            .unwrap_or("<unknown>")
    }

    /// Find a previously loaded file by name.
    pub fn file_id(&self, name: &str) -> Option<FileId> {
        self.index.get(name).copied()
    }

    /// Number of loaded files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no files are loaded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Decode raw bytes: UTF-16LE when the BOM `FF FE` leads, UTF-8 otherwise.
/// A UTF-8 BOM, when present, is stripped rather than handed to the lexer.
fn decode_source(bytes: &[u8], path: &Path) -> Result<String, SourceError> {
    if bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] == 0xFE {
        let payload = &bytes[2..];
        if payload.len() % 2 != 0 {
            return Err(SourceError::InvalidUtf16(path.to_path_buf()));
        }
        let units: Vec<u16> = payload
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).map_err(|_| SourceError::InvalidUtf16(path.to_path_buf()))
    } else {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| SourceError::InvalidUtf8(path.to_path_buf()))?;
        Ok(text.strip_prefix('\u{FEFF}').unwrap_or(text).to_owned())
    }
}
