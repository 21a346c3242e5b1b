//! Message types for the whiteboard session
//!
//! This module contains the Msg enum with nested sub-enums for organized
//! message handling, plus constructor helpers used by widgets and shortcuts.

use std::path::PathBuf;

use cosmic::iced_widget::text_editor;

use crate::config::PenColor;
use crate::domain::Point;

// ============================================================================
// Board Types
// ============================================================================

/// Pointer action on the board, in board-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawAction {
    /// Pointer pressed: start a gesture
    Begin(Point),
    /// Pointer dragged while pressed
    Extend(Point),
    /// Pointer released
    End(Point),
}

/// History edits on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMsg {
    /// Remove the most recent stroke
    Undo,
    /// Remove every stroke
    Clear,
}

// ============================================================================
// Pen Types
// ============================================================================

/// Pen popup actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    /// Toggle popup visibility
    Toggle,
    /// Close popup
    Close,
}

/// Pen configuration messages
#[derive(Debug, Clone, PartialEq)]
pub enum PenMsg {
    /// Color popup actions
    Popup(PopupAction),
    /// Pick a color
    SetColor(PenColor),
    /// Hex entry edited
    HexInput(String),
    /// Apply the hex entry
    HexApply,
    /// Width slider moved (no save)
    SetWidth(f32),
    /// Width slider released (save to config)
    SaveWidth,
}

// ============================================================================
// Notes Types
// ============================================================================

/// Note pane messages
#[derive(Debug, Clone)]
pub enum NotesMsg {
    /// Editor action (typing, selection, scrolling)
    Edit(text_editor::Action),
    /// Highlight the current selection
    Highlight,
    /// Remove all highlights
    ClearHighlights,
    /// Ask for a path to save the notes to
    Save,
    /// Save dialog result (`None` when dismissed)
    SaveTo(Option<PathBuf>),
}

// ============================================================================
// Export Types
// ============================================================================

/// Board export messages
#[derive(Debug, Clone)]
pub enum ExportMsg {
    /// Ask for a path to export the board to
    Export,
    /// Export dialog result (`None` when dismissed)
    ExportTo(Option<PathBuf>),
}

// ============================================================================
// Main Message Enum
// ============================================================================

/// All whiteboard messages
#[derive(Debug, Clone)]
pub enum Msg {
    Draw(DrawAction),
    Edit(EditMsg),
    Pen(PenMsg),
    Notes(NotesMsg),
    Export(ExportMsg),
    /// A notification dialog was dismissed
    DialogClosed,
}

impl Msg {
    pub fn undo() -> Self {
        Self::Edit(EditMsg::Undo)
    }

    pub fn clear() -> Self {
        Self::Edit(EditMsg::Clear)
    }

    pub fn toggle_pen_popup() -> Self {
        Self::Pen(PenMsg::Popup(PopupAction::Toggle))
    }

    pub fn close_pen_popup() -> Self {
        Self::Pen(PenMsg::Popup(PopupAction::Close))
    }

    pub fn set_color(color: PenColor) -> Self {
        Self::Pen(PenMsg::SetColor(color))
    }

    pub fn set_width(value: f32) -> Self {
        Self::Pen(PenMsg::SetWidth(value))
    }

    pub fn save_width() -> Self {
        Self::Pen(PenMsg::SaveWidth)
    }

    pub fn highlight() -> Self {
        Self::Notes(NotesMsg::Highlight)
    }

    pub fn clear_highlights() -> Self {
        Self::Notes(NotesMsg::ClearHighlights)
    }

    pub fn save_notes() -> Self {
        Self::Notes(NotesMsg::Save)
    }

    pub fn export_board() -> Self {
        Self::Export(ExportMsg::Export)
    }
}
