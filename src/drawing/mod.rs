//! Board input and history handlers
//!
//! This module provides:
//! - The pointer listener interface fed by the board widget
//! - Message handlers for DrawAction and EditMsg

pub mod handlers;

use crate::domain::Point;
use crate::session::state::DrawingSession;
use crate::session::status::Status;

/// Receiver of board pointer events, one method per event kind
pub trait PointerListener {
    fn pointer_down(&mut self, at: Point) -> Status;
    fn pointer_move(&mut self, at: Point) -> Status;
    fn pointer_up(&mut self, at: Point) -> Status;
}

impl PointerListener for DrawingSession {
    fn pointer_down(&mut self, at: Point) -> Status {
        self.begin(at);
        Status::Drawing
    }

    fn pointer_move(&mut self, at: Point) -> Status {
        match self.extend(at) {
            Some(_) => Status::Drawing,
            None => Status::Ready,
        }
    }

    fn pointer_up(&mut self, _at: Point) -> Status {
        match self.end() {
            Some(_) => Status::StrokeAdded,
            None => Status::Ready,
        }
    }
}
