//! Board message handlers
//!
//! Each handler applies one message and reports the resulting status.

use super::PointerListener;
use crate::session::messages::{DrawAction, EditMsg};
use crate::session::state::DrawingSession;
use crate::session::status::Status;

/// Route a pointer action to the listener
pub fn handle_draw_msg(listener: &mut impl PointerListener, action: DrawAction) -> Status {
    match action {
        DrawAction::Begin(at) => listener.pointer_down(at),
        DrawAction::Extend(at) => listener.pointer_move(at),
        DrawAction::End(at) => listener.pointer_up(at),
    }
}

/// Apply an undo or clear to the session
pub fn handle_edit_msg(session: &mut DrawingSession, msg: EditMsg) -> Status {
    match msg {
        EditMsg::Undo => match session.undo() {
            Some(_) => Status::Undone,
            None => Status::NothingToUndo,
        },
        EditMsg::Clear => {
            let removed = session.clear();
            log::info!("Cleared {} strokes from the board", removed);
            Status::Cleared
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn run(session: &mut DrawingSession, actions: &[DrawAction]) -> Vec<Status> {
        actions
            .iter()
            .map(|&a| handle_draw_msg(session, a))
            .collect()
    }

    #[test]
    fn test_gesture_statuses() {
        let mut session = DrawingSession::default();
        let statuses = run(
            &mut session,
            &[
                DrawAction::Begin(Point::new(10.0, 10.0)),
                DrawAction::Extend(Point::new(20.0, 10.0)),
                DrawAction::End(Point::new(20.0, 10.0)),
            ],
        );
        assert_eq!(
            statuses,
            vec![Status::Drawing, Status::Drawing, Status::StrokeAdded]
        );
        assert_eq!(session.strokes().len(), 1);
    }

    #[test]
    fn test_stray_events_report_ready() {
        let mut session = DrawingSession::default();
        let statuses = run(
            &mut session,
            &[
                DrawAction::Extend(Point::new(1.0, 1.0)),
                DrawAction::End(Point::new(1.0, 1.0)),
            ],
        );
        assert_eq!(statuses, vec![Status::Ready, Status::Ready]);
        assert!(session.is_empty());
    }

    #[test]
    fn test_scenario_undo_leaves_first_stroke() {
        let mut session = DrawingSession::default();
        run(
            &mut session,
            &[
                DrawAction::Begin(Point::new(10.0, 10.0)),
                DrawAction::Extend(Point::new(20.0, 10.0)),
                DrawAction::Extend(Point::new(20.0, 20.0)),
                DrawAction::End(Point::new(20.0, 20.0)),
                DrawAction::Begin(Point::new(0.0, 0.0)),
                DrawAction::Extend(Point::new(5.0, 5.0)),
                DrawAction::End(Point::new(5.0, 5.0)),
            ],
        );
        assert_eq!(handle_edit_msg(&mut session, EditMsg::Undo), Status::Undone);
        assert_eq!(session.strokes().len(), 1);
        assert_eq!(session.strokes()[0].segment_count(), 2);
    }

    #[test]
    fn test_undo_and_clear_statuses() {
        let mut session = DrawingSession::default();
        assert_eq!(
            handle_edit_msg(&mut session, EditMsg::Undo),
            Status::NothingToUndo
        );
        assert_eq!(handle_edit_msg(&mut session, EditMsg::Clear), Status::Cleared);
        assert_eq!(
            handle_edit_msg(&mut session, EditMsg::Undo),
            Status::NothingToUndo
        );
    }
}
