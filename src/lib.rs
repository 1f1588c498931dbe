//! Line-oriented text buffers from heterogeneous sources
//!
//! This crate normalizes plain files, gzip/bzip2-compressed files, open
//! readers, and literal strings - in any named character encoding - into a
//! single addressable sequence of lines supporting search, mutation,
//! templating, and equality comparison.
//!
//! ```
//! use stanza::Editor;
//!
//! let mut editor = Editor::from_text("greet {name}\n\ndone");
//! editor.remove_blank_lines();
//! assert_eq!(editor.len(), 2);
//! assert!(editor.templates().contains("name"));
//! ```

pub mod cli;
pub mod editor;
pub mod error;
pub mod source;
pub mod trace;

mod scan;
mod search;

// Re-export commonly used types
pub use editor::{concat, Editor};
pub use error::EditorError;
pub use source::Source;
