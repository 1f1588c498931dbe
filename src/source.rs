//! Source resolution for editor construction
//!
//! Turns an input descriptor (path, open reader, or literal text) into a
//! sequence of decoded lines. Paths with a `.gz` or `.bz2` extension are
//! decompressed transparently; readers and literal text never are. Decoding
//! uses a caller-supplied encoding label (default UTF-8) and fails with the
//! offending byte offset instead of substituting replacement characters.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bzip2::read::BzDecoder;
use encoding_rs::{DecoderResult, Encoding, UTF_8};
use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::EditorError;

/// Where an editor's text comes from.
///
/// The variant is chosen explicitly by the caller and resolved exactly once
/// at construction; no runtime type inspection.
pub enum Source<'a> {
    /// Filesystem path; `.gz` / `.bz2` extensions select decompression
    Path(&'a Path),
    /// Open reader, drained to exhaustion and dropped before resolution returns
    Reader(Box<dyn Read + 'a>),
    /// Literal text; no I/O occurs
    Text(&'a str),
}

impl std::fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Reader(_) => f.debug_tuple("Reader").finish(),
            Self::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
        }
    }
}

/// Compression container selected from a path's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    Gzip,
    Bzip2,
    Raw,
}

fn compression_for(path: &Path) -> Compression {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
    {
        Some(ext) if ext == "gz" => Compression::Gzip,
        Some(ext) if ext == "bz2" => Compression::Bzip2,
        _ => Compression::Raw,
    }
}

/// Resolve a source into decoded lines plus the encoding that was applied.
///
/// The returned line vector has no stored terminators; a final newline in
/// the source does not produce a trailing empty line.
pub(crate) fn resolve(
    source: Source<'_>,
    encoding: Option<&str>,
) -> Result<(Vec<String>, &'static Encoding), EditorError> {
    let encoding = match encoding {
        Some(label) => {
            Encoding::for_label(label.as_bytes()).ok_or_else(|| EditorError::UnknownEncoding {
                label: label.to_string(),
            })?
        }
        None => UTF_8,
    };

    let lines = match source {
        Source::Path(path) => {
            let bytes = read_path(path)?;
            debug!(path = %path.display(), bytes = bytes.len(), "read source file");
            split_lines(&decode(&bytes, encoding)?)
        }
        Source::Reader(mut reader) => {
            let mut bytes = Vec::new();
            reader
                .read_to_end(&mut bytes)
                .map_err(|e| EditorError::SourceNotFound {
                    path: "<reader>".to_string(),
                    message: e.to_string(),
                })?;
            split_lines(&decode(&bytes, encoding)?)
        }
        Source::Text(text) => split_lines(text),
    };

    Ok((lines, encoding))
}

/// Read a file's bytes, decompressing per the extension.
///
/// The handle is opened, drained, and dropped here; nothing survives the call.
fn read_path(path: &Path) -> Result<Vec<u8>, EditorError> {
    let file = File::open(path).map_err(|e| EditorError::SourceNotFound {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut bytes = Vec::new();
    match compression_for(path) {
        Compression::Gzip => {
            GzDecoder::new(file)
                .read_to_end(&mut bytes)
                .map_err(|e| EditorError::Decompression {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
        }
        Compression::Bzip2 => {
            BzDecoder::new(file)
                .read_to_end(&mut bytes)
                .map_err(|e| EditorError::Decompression {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
        }
        Compression::Raw => {
            let mut file = file;
            file.read_to_end(&mut bytes)
                .map_err(|e| EditorError::SourceNotFound {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
        }
    }
    Ok(bytes)
}

/// Decode bytes under the given encoding, failing at the first malformed
/// sequence with its byte offset. No replacement characters are emitted.
fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String, EditorError> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut out = String::with_capacity(
        decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .unwrap_or(bytes.len()),
    );

    let mut total_read = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[total_read..], &mut out, true);
        total_read += read;
        match result {
            DecoderResult::InputEmpty => return Ok(out),
            DecoderResult::OutputFull => out.reserve(out.capacity().max(64)),
            DecoderResult::Malformed(bad, pushed) => {
                return Err(EditorError::Encoding {
                    encoding: encoding.name(),
                    offset: total_read - bad as usize - pushed as usize,
                })
            }
        }
    }
}

/// Split text on universal newline boundaries: `\n`, `\r\n`, and lone `\r`
/// each end a line. A final terminator does not produce a trailing empty
/// element; interior blank lines are preserved exactly.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(text[start..i].to_string());
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(text[start..i].to_string());
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Line splitting tests
    // ========================================================================

    #[test]
    fn test_split_lines_basic() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_trailing_newline_dropped() {
        // A final newline terminates the last line rather than opening a new one
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_interior_blanks_preserved() {
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_split_lines_crlf_and_cr() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    // ========================================================================
    // Compression dispatch tests
    // ========================================================================

    #[test]
    fn test_compression_by_extension() {
        assert_eq!(compression_for(Path::new("data.txt.gz")), Compression::Gzip);
        assert_eq!(compression_for(Path::new("data.GZ")), Compression::Gzip);
        assert_eq!(compression_for(Path::new("data.bz2")), Compression::Bzip2);
        assert_eq!(compression_for(Path::new("data.BZ2")), Compression::Bzip2);
        assert_eq!(compression_for(Path::new("data.txt")), Compression::Raw);
        assert_eq!(compression_for(Path::new("data")), Compression::Raw);
    }

    // ========================================================================
    // Decoding tests
    // ========================================================================

    #[test]
    fn test_decode_utf8() {
        let out = decode("héllo".as_bytes(), UTF_8).unwrap();
        assert_eq!(out, "héllo");
    }

    #[test]
    fn test_decode_invalid_utf8_reports_offset() {
        let err = decode(b"ok\xffrest", UTF_8).unwrap_err();
        match err {
            EditorError::Encoding { encoding, offset } => {
                assert_eq!(encoding, "UTF-8");
                assert_eq!(offset, 2);
            }
            other => panic!("expected Encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_latin1_label() {
        // 0xE9 is é in ISO-8859-1
        let encoding = Encoding::for_label(b"iso-8859-1").unwrap();
        let out = decode(b"caf\xe9", encoding).unwrap();
        assert_eq!(out, "café");
    }

    #[test]
    fn test_resolve_unknown_label() {
        let result = resolve(Source::Text("x"), Some("utf-99"));
        assert!(matches!(result, Err(EditorError::UnknownEncoding { .. })));
    }

    #[test]
    fn test_resolve_literal_text_no_decode() {
        let (lines, encoding) = resolve(Source::Text("a\nb\n"), None).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
        assert_eq!(encoding, UTF_8);
    }
}
