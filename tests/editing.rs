//! Structural editing, templating, and round-trip tests over the fixture

mod common;

use std::collections::HashMap;

use common::{fixture, SAMPLE};
use stanza::{concat, Editor};

// ========================================================================
// Head/tail and indexed access
// ========================================================================

#[test]
fn test_head_tail_match_direct_index() {
    let editor = Editor::from_text(SAMPLE);
    assert_eq!(editor.head(1), editor[0]);
    assert_eq!(editor.tail(1), editor[-1]);
}

#[test]
fn test_append_prepend_insert_flow() {
    let mut editor = Editor::from_text(SAMPLE);
    let block = "new\nlines";

    editor.append(block);
    assert_eq!(&editor[-1], "lines");

    editor.prepend(block);
    assert_eq!(&editor[1], "lines");

    editor.delete_at(0).unwrap();
    editor.delete_at(0).unwrap();
    editor.delete_at(-1).unwrap();
    editor.delete_at(-1).unwrap();

    editor.insert(-1, block).unwrap();
    assert_eq!(&editor[-2], "lines");
    assert_eq!(&editor[-3], "new");
}

// ========================================================================
// Replace round-trip
// ========================================================================

#[test]
fn test_replace_round_trip_restores_content() {
    let mut editor = Editor::from_text(SAMPLE);
    let original = editor.clone();
    let old = "A café line opens the sample buffer.";
    let new = "replacement";

    assert_eq!(editor.replace(old, new), 1);
    assert_eq!(&editor[0], "replacement");

    assert_eq!(editor.replace(new, old), 1);
    assert_eq!(editor, original);
}

// ========================================================================
// Concat
// ========================================================================

#[test]
fn test_concat_with_itself_doubles_length() {
    let editor = Editor::from_text(SAMPLE);
    let doubled = concat([&editor, &editor]);
    assert_eq!(doubled.len(), 2 * editor.len());
    assert_eq!(&doubled.lines()[..editor.len()], editor.lines());
}

// ========================================================================
// Templating and persistence
// ========================================================================

#[test]
fn test_render_fills_template_and_collapses_constant() {
    let editor = Editor::from_text(SAMPLE);
    let mut values = HashMap::new();
    values.insert("greeting".to_string(), "hello".to_string());

    let rendered = editor.render(&values);
    assert_eq!(&rendered[3], "templates look like hello");
    assert_eq!(&rendered[4], "constants look like {unit}");

    // Receiver still carries its tokens
    assert!(editor.templates().contains("greeting"));
    assert!(rendered.templates().is_empty());
}

#[test]
fn test_write_then_reopen_round_trips() {
    let fx = fixture();
    let editor = Editor::from_text(SAMPLE);
    let out = fx.dir.path().join("rewritten.txt");

    editor.write(&out).unwrap();
    let reopened = Editor::from_path(&out).unwrap();
    assert_eq!(reopened, editor);
}

#[test]
fn test_rendered_multiline_value_round_trips_through_disk() {
    let fx = fixture();
    let editor = Editor::from_text(SAMPLE);
    let mut values = HashMap::new();
    values.insert("greeting".to_string(), "salut\nbonjour".to_string());

    let rendered = editor.render(&values);
    assert_eq!(rendered.len(), editor.len() + 1);
    assert_eq!(&rendered[3], "templates look like salut");
    assert_eq!(&rendered[4], "bonjour");

    let out = fx.dir.path().join("rendered_multiline.txt");
    rendered.write(&out).unwrap();
    assert_eq!(Editor::from_path(&out).unwrap(), rendered);
}

#[test]
fn test_rendered_buffer_round_trips_through_disk() {
    let fx = fixture();
    let editor = Editor::from_path(&fx.plain).unwrap();
    let mut values = HashMap::new();
    values.insert("greeting".to_string(), "bonjour".to_string());

    let rendered = editor.render(&values);
    let out = fx.dir.path().join("rendered.txt");
    rendered.write(&out).unwrap();

    let reopened = Editor::from_path(&out).unwrap();
    assert_eq!(reopened, rendered);
    assert_eq!(&reopened[3], "templates look like bonjour");
}
