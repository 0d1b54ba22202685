//! Boundary to the host text editor.
//!
//! The engine itself never touches editor state; a frontend implements
//! [`EditorHost`] and [`convert_selection`] drives the extract →
//! convert → replace cycle. The replacement happens inside one undo
//! transaction so a single undo restores the original text; the host's
//! `begin`/`end` calls are always paired because the conversion between
//! them is infallible.

use crate::convert::{to_cyrillic, to_latin};

/// Conversion direction, as chosen from the frontend's menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToCyrillic,
    ToLatin,
}

/// Minimal selection/replacement surface of the host editor.
///
/// Offsets are opaque to the engine; `text` and `replace_range` must
/// agree on their meaning. `replace_range` calls arrive only between
/// `begin_undo_transaction` and `end_undo_transaction`.
pub trait EditorHost {
    /// Current selection as `(start, end)`, or `None` when nothing is
    /// selected. Frontends use this to enable/disable the menu entries.
    fn selected_range(&self) -> Option<(usize, usize)>;

    fn text(&self, start: usize, end: usize) -> String;

    fn replace_range(&mut self, start: usize, end: usize, replacement: &str);

    fn begin_undo_transaction(&mut self);

    fn end_undo_transaction(&mut self);
}

/// Whether a conversion is currently possible (something is selected).
pub fn can_convert(host: &dyn EditorHost) -> bool {
    host.selected_range().is_some()
}

/// Convert the current selection in place. Returns `false` when there
/// is no selection; the editor is then left untouched.
pub fn convert_selection<H: EditorHost>(host: &mut H, direction: Direction) -> bool {
    let Some((start, end)) = host.selected_range() else {
        return false;
    };
    let selected = host.text(start, end);
    let replacement = match direction {
        Direction::ToCyrillic => to_cyrillic(&selected),
        Direction::ToLatin => to_latin(&selected),
    };

    host.begin_undo_transaction();
    host.replace_range(start, end, &replacement);
    host.end_undo_transaction();
    true
}
