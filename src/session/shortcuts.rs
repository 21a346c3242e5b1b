use cosmic::iced::keyboard::{Key, Modifiers, key::Named};

use crate::session::messages::Msg;

/// Map a key press to a whiteboard message
///
/// Undo is bound to Control+Z through the platform-independent control
/// modifier, so it reaches the same handler as the toolbar button.
pub fn handle_key_event(key: Key, modifiers: Modifiers, pen_popup_open: bool) -> Option<Msg> {
    match key {
        Key::Character(c)
            if c.as_str().eq_ignore_ascii_case("z") && modifiers.control() && !modifiers.shift() =>
        {
            Some(Msg::undo())
        }
        Key::Character(c) if c.as_str().eq_ignore_ascii_case("s") && modifiers.control() => {
            Some(Msg::save_notes())
        }
        Key::Character(c) if c.as_str().eq_ignore_ascii_case("e") && modifiers.control() => {
            Some(Msg::export_board())
        }
        // Escape dismisses the color popup without picking
        Key::Named(Named::Escape) if pen_popup_open => Some(Msg::close_pen_popup()),
        _ => None,
    }
}
