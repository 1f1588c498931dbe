//! Brace-token scanning
//!
//! Finds `{name}` template placeholders and `{{name}}` escaped constants in
//! line text. Names are runs of ASCII alphanumerics and underscores; braces
//! around anything else are treated as literal text. A double-brace token is
//! consumed whole, so its interior is never also reported as a template.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Template,
    Constant,
}

/// One recognized brace token within a line
#[derive(Debug, Clone, Copy)]
pub(crate) struct BraceToken<'a> {
    pub name: &'a str,
    pub kind: TokenKind,
    /// Byte offset of the opening brace
    pub start: usize,
    /// Byte offset one past the closing brace
    pub end: usize,
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Try to read `name` + closer starting at `pos`; returns the name range end
/// and the token end on success.
fn read_name(bytes: &[u8], pos: usize, closer: &[u8]) -> Option<(usize, usize)> {
    let mut i = pos;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    if i == pos {
        return None; // empty name
    }
    if bytes[i..].starts_with(closer) {
        Some((i, i + closer.len()))
    } else {
        None
    }
}

/// Scan one line left to right for brace tokens.
///
/// `{{name}}` is tried first at every opening brace so escapes win over the
/// single-brace reading of their interior. Names are deliberately restricted
/// to ASCII word characters; braces around anything else, including
/// non-ASCII letters, are literal text.
pub(crate) fn scan_line(line: &str) -> Vec<BraceToken<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'{') {
            if let Some((name_end, token_end)) = read_name(bytes, i + 2, b"}}") {
                tokens.push(BraceToken {
                    name: &line[i + 2..name_end],
                    kind: TokenKind::Constant,
                    start: i,
                    end: token_end,
                });
                i = token_end;
                continue;
            }
        }
        if let Some((name_end, token_end)) = read_name(bytes, i + 1, b"}") {
            tokens.push(BraceToken {
                name: &line[i + 1..name_end],
                kind: TokenKind::Template,
                start: i,
                end: token_end,
            });
            i = token_end;
        } else {
            i += 1;
        }
    }
    tokens
}

/// Distinct `{name}` template names across all lines
pub(crate) fn templates(lines: &[String]) -> HashSet<String> {
    names_of(lines, TokenKind::Template)
}

/// Distinct `{{name}}` constant names across all lines
pub(crate) fn constants(lines: &[String]) -> HashSet<String> {
    names_of(lines, TokenKind::Constant)
}

fn names_of(lines: &[String], kind: TokenKind) -> HashSet<String> {
    lines
        .iter()
        .flat_map(|line| scan_line(line))
        .filter(|token| token.kind == kind)
        .map(|token| token.name.to_string())
        .collect()
}
