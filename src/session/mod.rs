//! Whiteboard session management module
//!
//! This module contains:
//! - Drawing session and UI state
//! - Message types for board, pen, notes and export interactions
//! - Keyboard shortcuts
//! - Status bar messages

pub mod messages;
pub mod shortcuts;
pub mod state;
pub mod status;
