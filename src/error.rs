//! Error taxonomy for editor construction and buffer access
//!
//! Construction failures (missing source, bad container, undecodable bytes)
//! abort construction entirely; no partially-built editor is observable.
//! Buffer failures (out-of-range indices) leave the buffer in its prior state.

/// Errors produced while building an editor or mutating its line buffer
#[derive(Debug, Clone)]
pub enum EditorError {
    /// Source path does not exist or could not be read
    SourceNotFound { path: String, message: String },
    /// Compressed container (.gz / .bz2) is malformed
    Decompression { path: String, message: String },
    /// Bytes could not be decoded under the selected encoding
    Encoding {
        /// Canonical name of the encoding that rejected the input
        encoding: &'static str,
        /// Byte offset of the malformed sequence
        offset: usize,
    },
    /// Encoding label is not a recognized encoding name
    UnknownEncoding { label: String },
    /// Indexed access, deletion, or insertion with an out-of-range index
    IndexOutOfBounds { index: isize, len: usize },
    /// Other I/O error (e.g. writing the buffer back to disk)
    Io { path: String, message: String },
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceNotFound { path, message } => {
                write!(f, "cannot read {}: {}", path, message)
            }
            Self::Decompression { path, message } => {
                write!(f, "cannot decompress {}: {}", path, message)
            }
            Self::Encoding { encoding, offset } => {
                write!(f, "undecodable {} byte sequence at offset {}", encoding, offset)
            }
            Self::UnknownEncoding { label } => write!(f, "unknown encoding label: {}", label),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "line index {} out of bounds (len {})", index, len)
            }
            Self::Io { path, message } => write!(f, "i/o error on {}: {}", path, message),
        }
    }
}

impl std::error::Error for EditorError {}
