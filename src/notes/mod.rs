//! Note pane: text buffer, highlight spans and saving

pub mod highlight;
pub mod save;

use cosmic::iced_widget::text_editor::{self, Action};

use crate::session::status::Status;
use highlight::Highlights;

/// Note buffer with its highlight spans
pub struct NotesState {
    pub content: text_editor::Content<cosmic::Renderer>,
    pub highlights: Highlights,
    /// Where the current selection started, as `(line, byte column)`
    anchor: Option<(usize, usize)>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self::with_text("")
    }
}

impl NotesState {
    pub fn with_text(text: &str) -> Self {
        Self {
            content: text_editor::Content::with_text(text),
            highlights: Highlights::default(),
            anchor: None,
        }
    }

    /// Apply an editor action, moving highlights along with edited text
    pub fn perform(&mut self, action: Action) {
        let cursor = self.content.cursor_position();
        let had_selection = self.content.selection().is_some();
        let is_click = matches!(action, Action::Click(_));
        let before = (action.is_edit() && !self.highlights.is_empty()).then(|| self.text());

        self.anchor = match &action {
            Action::Select(_) | Action::Drag(_) if had_selection => self.anchor,
            Action::Select(_) | Action::Drag(_) => Some(cursor),
            Action::SelectAll => Some((0, 0)),
            Action::Scroll { .. } => self.anchor,
            // Word and line selection grow both ways from the click
            _ => None,
        };

        self.content.perform(action);

        if is_click {
            self.anchor = Some(self.content.cursor_position());
        }
        if let Some(old) = before {
            let new = self.text();
            let caret = highlight::offset_of(&new, self.content.cursor_position());
            self.highlights.follow_edit(&old, &new, caret);
        }
    }

    /// Highlight the current selection
    pub fn highlight_selection(&mut self) -> Status {
        let Some(selected) = self.content.selection() else {
            return Status::NoTextSelected;
        };
        let cursor = self.content.cursor_position();
        match highlight::selection_span(&self.text(), cursor, self.anchor, &selected) {
            Some(spans) => {
                self.highlights.extend(spans);
                Status::TextHighlighted
            }
            None => {
                log::debug!("Could not place selection of {} bytes", selected.len());
                Status::NoTextSelected
            }
        }
    }

    pub fn clear_highlights(&mut self) -> Status {
        self.highlights.clear();
        Status::HighlightsCleared
    }

    /// Full buffer contents exactly as typed
    pub fn text(&self) -> String {
        verbatim_text(self.content.text(), self.content.line_count())
    }
}

/// Undo the line break `Content::text` appends to unterminated buffers.
///
/// A buffer of `n` lines holds `n - 1` breaks, so a text with `n` of them
/// carries one the user never typed.
fn verbatim_text(mut text: String, line_count: usize) -> String {
    if text.ends_with('\n') && text.matches('\n').count() >= line_count.max(1) {
        text.pop();
    }
    text
}
