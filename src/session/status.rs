//! Status bar messages
//!
//! Every action reports exactly one `Status`. The bar shows the latest one;
//! nothing is kept once it is replaced.

use std::path::PathBuf;

use crate::config::PenColor;
use crate::domain::PenWidth;
use crate::fl;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Status {
    #[default]
    Ready,
    Drawing,
    StrokeAdded,
    PenColor(PenColor),
    ColorCancelled,
    InvalidColor(String),
    LineWidth(PenWidth),
    Undone,
    NothingToUndo,
    Cleared,
    TextHighlighted,
    NoTextSelected,
    HighlightsCleared,
    NotesSaved(PathBuf),
    SaveCancelled,
    SaveFailed,
    BoardExported(PathBuf),
    NothingToExport,
    ExportCancelled,
    ExportFailed,
}

impl Status {
    /// Localized single-line text for the status bar
    pub fn message(&self) -> String {
        match self {
            Status::Ready => fl!("status-ready"),
            Status::Drawing => fl!("status-drawing"),
            Status::StrokeAdded => fl!("status-stroke-added"),
            Status::PenColor(color) => fl!("status-pen-color", color = color.to_hex()),
            Status::ColorCancelled => fl!("status-color-cancelled"),
            Status::InvalidColor(input) => fl!("status-invalid-color", input = input.as_str()),
            Status::LineWidth(width) => fl!("status-line-width", width = width.get()),
            Status::Undone => fl!("status-undo"),
            Status::NothingToUndo => fl!("status-nothing-to-undo"),
            Status::Cleared => fl!("status-cleared"),
            Status::TextHighlighted => fl!("status-highlighted"),
            Status::NoTextSelected => fl!("status-no-selection"),
            Status::HighlightsCleared => fl!("status-highlights-cleared"),
            Status::NotesSaved(path) => {
                fl!("status-notes-saved", path = path.display().to_string())
            }
            Status::SaveCancelled => fl!("status-save-cancelled"),
            Status::SaveFailed => fl!("status-save-failed"),
            Status::BoardExported(path) => {
                fl!("status-exported", path = path.display().to_string())
            }
            Status::NothingToExport => fl!("status-nothing-to-export"),
            Status::ExportCancelled => fl!("status-export-cancelled"),
            Status::ExportFailed => fl!("status-export-failed"),
        }
    }

    /// Whether this status reports a failure the user should notice
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Status::SaveFailed | Status::ExportFailed | Status::InvalidColor(_)
        )
    }
}
