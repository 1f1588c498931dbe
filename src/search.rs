//! Cyclic and one-shot search over the line buffer
//!
//! `find_next` is stateful: it scans forward from just after the persistent
//! cursor, wraps past the end back to index 0, and moves the cursor to the
//! hit. The line at the cursor itself is the last one considered, so repeated
//! calls visit every match in ascending order and then wrap back to the
//! smallest. `find_next_from_start` restarts the scan at index 0 inclusive,
//! regardless of prior cursor state. "Not found" is `None`, never a sentinel
//! index, and leaves the cursor unchanged.

use tracing::debug;

use crate::editor::Editor;

impl Editor {
    /// Index of the next line containing `pattern`, scanning cyclically from
    /// just after the cursor. Moves the cursor to the hit.
    pub fn find_next(&mut self, pattern: &str) -> Option<usize> {
        self.find_from(self.cursor + 1, pattern)
    }

    /// Like [`Editor::find_next`] but the scan starts at index 0 inclusive,
    /// independent of prior cursor state
    pub fn find_next_from_start(&mut self, pattern: &str) -> Option<usize> {
        self.find_from(0, pattern)
    }

    /// Cyclic search with a caller-supplied line predicate instead of a
    /// substring pattern; same cursor semantics as [`Editor::find_next`]
    pub fn find_next_by<P>(&mut self, predicate: P) -> Option<usize>
    where
        P: Fn(&str) -> bool,
    {
        self.find_from_by(self.cursor + 1, predicate)
    }

    fn find_from(&mut self, start: usize, pattern: &str) -> Option<usize> {
        if pattern.is_empty() {
            return None;
        }
        let hit = self.find_from_by(start, |line| line.contains(pattern));
        if let Some(idx) = hit {
            debug!(pattern, idx, "cyclic search hit");
        }
        hit
    }

    fn find_from_by<P>(&mut self, start: usize, predicate: P) -> Option<usize>
    where
        P: Fn(&str) -> bool,
    {
        let len = self.lines.len();
        if len == 0 {
            return None;
        }
        for step in 0..len {
            let idx = (start + step) % len;
            if predicate(&self.lines[idx]) {
                self.cursor = idx;
                return Some(idx);
            }
        }
        None
    }

    /// Ascending indices of every line containing `pattern` as a substring.
    /// Does not touch the cursor.
    pub fn find_all(&self, pattern: &str) -> Vec<usize> {
        if pattern.is_empty() {
            return Vec::new();
        }
        self.find_all_by(|line| line.contains(pattern))
    }

    /// Ascending indices of every line matching a caller-supplied predicate
    pub fn find_all_by<P>(&self, predicate: P) -> Vec<usize>
    where
        P: Fn(&str) -> bool,
    {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| predicate(line))
            .map(|(idx, _)| idx)
            .collect()
    }
}
