//! Pen message handlers for the color popup and width slider
//!
//! Handles PenMsg for popup state, color choice, width and config persistence.

use crate::config::{PenColor, WhiteboardConfig};
use crate::session::messages::{PenMsg, PopupAction};
use crate::session::state::{DrawingSession, UiState};
use crate::session::status::Status;

/// Outcome of a pen message
#[derive(Debug, Default, PartialEq)]
pub struct PenUpdate {
    /// Status to show, if the message produced one
    pub status: Option<Status>,
    /// Whether the pen config was modified and needs saving
    pub save_config: bool,
}

impl PenUpdate {
    fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            save_config: false,
        }
    }

    fn saved(status: Status) -> Self {
        Self {
            status: Some(status),
            save_config: true,
        }
    }
}

/// Handle a PenMsg, modifying the session pen and popup state
pub fn handle_pen_msg(session: &mut DrawingSession, ui: &mut UiState, msg: PenMsg) -> PenUpdate {
    match msg {
        PenMsg::Popup(action) => handle_popup(session, ui, action),
        PenMsg::SetColor(color) => apply_color(session, ui, color),
        PenMsg::HexInput(input) => {
            ui.hex_input = input;
            PenUpdate::default()
        }
        PenMsg::HexApply => match PenColor::parse_hex(&ui.hex_input) {
            Some(color) => apply_color(session, ui, color),
            None => {
                log::debug!("Rejected hex color {:?}", ui.hex_input);
                PenUpdate::status(Status::InvalidColor(ui.hex_input.trim().to_string()))
            }
        },
        PenMsg::SetWidth(value) => {
            ui.width_slider = value;
            // saved on release, not during drag
            PenUpdate::status(Status::LineWidth(session.set_width(value)))
        }
        PenMsg::SaveWidth => PenUpdate {
            status: None,
            save_config: true,
        },
    }
}

/// Save the current pen to persistent storage
pub fn save_pen_config(session: &DrawingSession) {
    let pen = session.pen();
    let mut config = WhiteboardConfig::load();
    config.pen_color = pen.color;
    config.pen_width = pen.width.get();
    config.save();
}

fn apply_color(session: &mut DrawingSession, ui: &mut UiState, color: PenColor) -> PenUpdate {
    session.set_color(color);
    ui.pen_popup_open = false;
    ui.hex_input = color.to_hex();
    PenUpdate::saved(Status::PenColor(color))
}

fn handle_popup(session: &DrawingSession, ui: &mut UiState, action: PopupAction) -> PenUpdate {
    match action {
        PopupAction::Toggle if !ui.pen_popup_open => {
            ui.pen_popup_open = true;
            ui.hex_input = session.pen().color.to_hex();
            PenUpdate::default()
        }
        // Closing without a pick keeps the pen unchanged
        PopupAction::Toggle | PopupAction::Close if ui.pen_popup_open => {
            ui.pen_popup_open = false;
            PenUpdate::status(Status::ColorCancelled)
        }
        _ => PenUpdate::default(),
    }
}
