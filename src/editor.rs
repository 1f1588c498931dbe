//! The line-oriented Editor: an addressable, mutable sequence of text lines
//!
//! An `Editor` is built once from a single resolved source (path, reader, or
//! literal text) and then mutated in place. Lines are stored without their
//! terminators; newline is the join/split delimiter. Indexing accepts
//! negative indices with distance-from-end semantics, resolved against the
//! buffer length at the time of each operation.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::error::EditorError;
use crate::scan;
use crate::source::{self, split_lines, Source};

/// A mutable ordered sequence of text lines with a persistent search cursor.
///
/// Equality compares line content only; encoding, source origin, and cursor
/// position are deliberately excluded, so the same logical content loaded
/// from a plain file, a compressed file, a reader, or a string compares equal.
#[derive(Debug, Clone)]
pub struct Editor {
    pub(crate) lines: Vec<String>,
    /// Last-found position for cyclic search; 0 on construction
    pub(crate) cursor: usize,
    /// Encoding applied at construction; diagnostic only
    encoding: &'static Encoding,
}

impl Editor {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build an editor from an explicit source variant and optional encoding
    /// label. Any opened handle is drained and closed before this returns,
    /// on both success and failure.
    pub fn open(source: Source<'_>, encoding: Option<&str>) -> Result<Self, EditorError> {
        let (lines, encoding) = source::resolve(source, encoding)?;
        debug!(lines = lines.len(), encoding = encoding.name(), "editor constructed");
        Ok(Self {
            lines,
            cursor: 0,
            encoding,
        })
    }

    /// Load a file, decompressing `.gz` / `.bz2` by extension, decoded as UTF-8
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        Self::open(Source::Path(path.as_ref()), None)
    }

    /// Load a file decoded with the named encoding (e.g. `"iso-8859-1"`)
    pub fn from_path_with_encoding(
        path: impl AsRef<Path>,
        encoding: &str,
    ) -> Result<Self, EditorError> {
        Self::open(Source::Path(path.as_ref()), Some(encoding))
    }

    /// Drain an open reader to exhaustion, decoded as UTF-8
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EditorError> {
        Self::open(Source::Reader(Box::new(reader)), None)
    }

    /// Build from literal text; no I/O and no decoding occur
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
            cursor: 0,
            encoding: UTF_8,
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines as a slice, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate lines in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Encoding applied at construction (diagnostic; not part of equality)
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Current cyclic-search cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Line at `index`; negative indices count from the end
    pub fn line(&self, index: isize) -> Result<&str, EditorError> {
        let at = self.resolve_index(index)?;
        Ok(&self.lines[at])
    }

    /// First `n` lines joined by newline, clamped to the buffer length
    pub fn head(&self, n: usize) -> String {
        self.lines[..n.min(self.lines.len())].join("\n")
    }

    /// Last `n` lines joined by newline, clamped to the buffer length
    pub fn tail(&self, n: usize) -> String {
        let len = self.lines.len();
        self.lines[len - n.min(len)..].join("\n")
    }

    // ========================================================================
    // Structural mutation
    // ========================================================================
    //
    // Multi-line input is split before splicing, so no element ever contains
    // an embedded newline. Index validation happens before any change; a
    // failed operation leaves the buffer untouched.

    /// Split `text` into lines and append them at the end
    pub fn append(&mut self, text: &str) {
        self.lines.extend(split_lines(text));
    }

    /// Split `text` into lines and insert them at the beginning, in order
    pub fn prepend(&mut self, text: &str) {
        self.lines.splice(0..0, split_lines(text));
    }

    /// Split `text` and insert the lines starting at `index`; existing lines
    /// from `index` onward shift right. `index` may be negative; `len` itself
    /// is valid and appends.
    pub fn insert(&mut self, index: isize, text: &str) -> Result<(), EditorError> {
        let at = self.resolve_insert_index(index)?;
        self.lines.splice(at..at, split_lines(text));
        Ok(())
    }

    /// Remove and return the line at `index` (negative ok)
    pub fn delete_at(&mut self, index: isize) -> Result<String, EditorError> {
        let at = self.resolve_index(index)?;
        let removed = self.lines.remove(at);
        self.clamp_cursor();
        Ok(removed)
    }

    /// Replace every occurrence of `old` with `new` in every line's text.
    /// Returns the number of lines modified. Absent `old` is a no-op
    /// returning 0. Line count is unaffected, so `new` is expected to be
    /// single-line text.
    pub fn replace(&mut self, old: &str, new: &str) -> usize {
        if old.is_empty() {
            return 0;
        }
        let mut modified = 0;
        for line in &mut self.lines {
            if line.contains(old) {
                *line = line.replace(old, new);
                modified += 1;
            }
        }
        modified
    }

    /// Replace only the first occurrence of `old` across the buffer.
    /// Returns the number of lines modified (0 or 1).
    pub fn replace_first(&mut self, old: &str, new: &str) -> usize {
        if old.is_empty() {
            return 0;
        }
        for line in &mut self.lines {
            if let Some(pos) = line.find(old) {
                line.replace_range(pos..pos + old.len(), new);
                return 1;
            }
        }
        0
    }

    /// Remove every line that is empty after trimming surrounding whitespace,
    /// preserving the relative order of the remainder
    pub fn remove_blank_lines(&mut self) {
        self.lines.retain(|line| !line.trim().is_empty());
        self.clamp_cursor();
    }

    // ========================================================================
    // Templating
    // ========================================================================

    /// Distinct `{name}` template placeholder names across all lines.
    ///
    /// Recomputed on every call; results do not survive mutation.
    pub fn templates(&self) -> HashSet<String> {
        scan::templates(&self.lines)
    }

    /// Distinct `{{name}}` constant names across all lines
    pub fn constants(&self) -> HashSet<String> {
        scan::constants(&self.lines)
    }

    /// Produce a new editor with each `{name}` replaced by `values[name]`.
    ///
    /// `{{name}}` escapes collapse to literal `{name}`; placeholders missing
    /// from `values` are preserved verbatim. Substituted values may contain
    /// newlines; the rendered text is re-split so every element is still a
    /// single line. The receiver is not mutated.
    pub fn render(&self, values: &HashMap<String, String>) -> Editor {
        let rendered: Vec<String> = self
            .lines
            .iter()
            .map(|line| render_line(line, values))
            .collect();
        Editor {
            lines: split_lines(&rendered.join("\n")),
            cursor: 0,
            encoding: self.encoding,
        }
    }

    /// Write the buffer to `path`, lines joined by a single newline
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| EditorError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    // ========================================================================
    // Index resolution
    // ========================================================================

    /// Resolve a possibly-negative index against the current length.
    /// Valid range after resolution is `0..len`.
    fn resolve_index(&self, index: isize) -> Result<usize, EditorError> {
        let len = self.lines.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if resolved < 0 || resolved >= len as isize {
            return Err(EditorError::IndexOutOfBounds { index, len });
        }
        Ok(resolved as usize)
    }

    /// Like `resolve_index` but `len` itself is valid (insertion at the end)
    fn resolve_insert_index(&self, index: isize) -> Result<usize, EditorError> {
        let len = self.lines.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if resolved < 0 || resolved > len as isize {
            return Err(EditorError::IndexOutOfBounds { index, len });
        }
        Ok(resolved as usize)
    }

    /// Restore the cursor invariant `cursor < len` after the buffer shrinks
    /// (or starts empty); resets to 0 rather than guessing a new position.
    fn clamp_cursor(&mut self) {
        if self.cursor >= self.lines.len() {
            self.cursor = 0;
        }
    }
}

/// Substitute tokens in one line; escapes collapse, unknown names survive
fn render_line(line: &str, values: &HashMap<String, String>) -> String {
    let tokens = scan::scan_line(line);
    if tokens.is_empty() {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len());
    let mut pos = 0;
    for token in tokens {
        out.push_str(&line[pos..token.start]);
        match token.kind {
            scan::TokenKind::Template => match values.get(token.name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&line[token.start..token.end]),
            },
            scan::TokenKind::Constant => {
                out.push('{');
                out.push_str(token.name);
                out.push('}');
            }
        }
        pos = token.end;
    }
    out.push_str(&line[pos..]);
    out
}

/// Concatenate any number of editors into a new one, lines in argument order.
/// Inputs are not mutated; the result starts with a fresh cursor.
pub fn concat<'a, I>(editors: I) -> Editor
where
    I: IntoIterator<Item = &'a Editor>,
{
    let mut lines = Vec::new();
    for editor in editors {
        lines.extend_from_slice(&editor.lines);
    }
    Editor {
        lines,
        cursor: 0,
        encoding: UTF_8,
    }
}

impl PartialEq for Editor {
    /// Line content only; cursor and encoding are excluded
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}

impl Eq for Editor {}

impl std::fmt::Display for Editor {
    /// The whole buffer, lines joined by a single newline
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

impl std::ops::Index<isize> for Editor {
    type Output = str;

    /// Panicking indexed access, like `Vec`; use [`Editor::line`] to handle
    /// out-of-range indices as values
    fn index(&self, index: isize) -> &str {
        match self.line(index) {
            Ok(line) => line,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a> IntoIterator for &'a Editor {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
