//! Whiteboard widgets
//!
//! This module contains:
//! - The board canvas program
//! - Toolbar, pen popup and status bar builders
//! - The note editor with its line highlighter
//! - Pen message handlers

mod board;
pub mod notes_editor;
pub mod pen_handlers;
pub mod pen_popup;
pub mod status_bar;
pub mod toolbar;

pub use board::Board;
