use crate::config::PenColor;
use crate::domain::{ActiveStroke, Bounds, Pen, PenWidth, Point, Segment, SegmentId, Stroke, StrokeId};

/// Pen state and stroke history for the board
///
/// Segments are produced one pointer move at a time, but history holds whole
/// strokes: the in-progress gesture lives in an [`ActiveStroke`] until
/// [`end`](Self::end) moves it into history, so one undo reverses one gesture.
#[derive(Clone, Debug, Default)]
pub struct DrawingSession {
    pen: Pen,
    active: Option<ActiveStroke>,
    history: Vec<Stroke>,
    next_stroke: u64,
    next_segment: u64,
}

impl DrawingSession {
    pub fn new(pen: Pen) -> Self {
        Self {
            pen,
            ..Self::default()
        }
    }

    /// Start a gesture at `at`. Any unfinished gesture is discarded.
    pub fn begin(&mut self, at: Point) {
        let id = StrokeId(self.next_stroke);
        self.next_stroke += 1;
        if self.active.is_some() {
            log::debug!("Discarding unfinished stroke before starting {:?}", id);
        }
        self.active = Some(ActiveStroke::new(id, self.pen, at));
    }

    /// Add a segment from the last point to `at`. Ignored without a gesture.
    pub fn extend(&mut self, at: Point) -> Option<Segment> {
        let active = self.active.as_mut()?;
        let id = SegmentId(self.next_segment);
        self.next_segment += 1;
        Some(active.push(id, at))
    }

    /// Finish the gesture, committing it if anything was drawn
    pub fn end(&mut self) -> Option<&Stroke> {
        let stroke = self.active.take()?.seal()?;
        log::debug!(
            "Committed {:?} with {} segments",
            stroke.id,
            stroke.segment_count()
        );
        self.history.push(stroke);
        self.history.last()
    }

    /// Pen color for future strokes
    pub fn set_color(&mut self, color: PenColor) {
        self.pen.color = color;
    }

    /// Pen width for future strokes, from a continuous slider value
    pub fn set_width(&mut self, value: f32) -> PenWidth {
        self.pen.width = PenWidth::from_slider(value);
        self.pen.width
    }

    /// Remove the most recently committed stroke with all its segments
    pub fn undo(&mut self) -> Option<Stroke> {
        let stroke = self.history.pop()?;
        log::debug!(
            "Undid {:?} ({} segments)",
            stroke.id,
            stroke.segment_count()
        );
        Some(stroke)
    }

    /// Remove every stroke, including an unfinished one. The pen is kept.
    pub fn clear(&mut self) -> usize {
        self.active = None;
        let removed = self.history.len();
        self.history.clear();
        removed
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn active(&self) -> Option<&ActiveStroke> {
        self.active.as_ref()
    }

    /// Committed strokes in drawing order
    pub fn strokes(&self) -> &[Stroke] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Bounds of all committed strokes, including half the widest pen
    pub fn extent(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for stroke in &self.history {
            let Some(b) = stroke.bounds() else { continue };
            let pad = stroke.pen.width.as_f32() / 2.0;
            let padded = Bounds {
                min: Point::new(b.min.x - pad, b.min.y - pad),
                max: Point::new(b.max.x + pad, b.max.y + pad),
            };
            bounds = Some(match bounds {
                Some(acc) => acc.union(padded),
                None => padded,
            });
        }
        bounds
    }
}

/// Transient UI state that is not part of the drawing model
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Whether the pen color popup is showing
    pub pen_popup_open: bool,
    /// Text in the hex color entry
    pub hex_input: String,
    /// Raw slider position (the pen keeps the rounded value)
    pub width_slider: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn draw(session: &mut DrawingSession, start: Point, moves: &[Point]) {
        session.begin(start);
        for &m in moves {
            session.extend(m);
        }
        session.end();
    }

    #[test]
    fn test_segment_count_matches_extends() {
        for n in 1..6 {
            let mut session = DrawingSession::default();
            session.begin(p(0.0, 0.0));
            for i in 0..n {
                assert!(session.extend(p(i as f32, 1.0)).is_some());
            }
            let committed = session.end().unwrap();
            assert_eq!(committed.segment_count(), n);

            let undone = session.undo().unwrap();
            assert_eq!(undone.segment_count(), n);
            assert!(session.is_empty());
        }
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut session = DrawingSession::default();
        assert!(session.undo().is_none());
        assert!(session.is_empty());
        assert_eq!(session.pen(), Pen::default());
        assert!(session.active().is_none());
    }

    #[test]
    fn test_pen_changes_only_affect_future_strokes() {
        let mut session = DrawingSession::default();
        draw(&mut session, p(0.0, 0.0), &[p(1.0, 1.0)]);

        let red = PenColor::from_rgb8(255, 0, 0);
        session.set_color(red);
        assert_eq!(session.set_width(7.2).get(), 7);
        draw(&mut session, p(5.0, 5.0), &[p(6.0, 6.0)]);

        let strokes = session.strokes();
        assert_eq!(strokes[0].pen, Pen::default());
        assert_eq!(strokes[1].pen.color, red);
        assert_eq!(strokes[1].pen.width.get(), 7);
    }

    #[test]
    fn test_pen_is_captured_for_whole_gesture() {
        let mut session = DrawingSession::default();
        session.begin(p(0.0, 0.0));
        session.extend(p(1.0, 0.0));
        session.set_width(9.0);
        session.extend(p(2.0, 0.0));
        let stroke = session.end().unwrap();
        assert_eq!(stroke.pen.width, PenWidth::DEFAULT);
        assert_eq!(session.pen().width.get(), 9);
    }

    #[test]
    fn test_clear_then_undo() {
        let mut session = DrawingSession::default();
        session.set_width(5.0);
        draw(&mut session, p(0.0, 0.0), &[p(1.0, 1.0)]);
        draw(&mut session, p(2.0, 2.0), &[p(3.0, 3.0)]);

        assert_eq!(session.clear(), 2);
        assert!(session.is_empty());
        assert!(session.undo().is_none());
        assert_eq!(session.pen().width.get(), 5);
    }

    #[test]
    fn test_clear_discards_gesture_in_progress() {
        let mut session = DrawingSession::default();
        session.begin(p(0.0, 0.0));
        session.extend(p(1.0, 1.0));
        session.clear();
        assert!(session.active().is_none());
        assert!(session.extend(p(2.0, 2.0)).is_none());
        assert!(session.end().is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn test_extend_and_end_without_gesture() {
        let mut session = DrawingSession::default();
        assert!(session.extend(p(3.0, 3.0)).is_none());
        assert!(session.end().is_none());
        assert!(session.end().is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn test_click_without_move_commits_nothing() {
        let mut session = DrawingSession::default();
        session.begin(p(4.0, 4.0));
        assert!(session.end().is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn test_cursor_tracks_last_point() {
        let mut session = DrawingSession::default();
        assert_eq!(session.active().map(|a| a.cursor), None);
        session.begin(p(1.0, 2.0));
        assert_eq!(session.active().map(|a| a.cursor), Some(p(1.0, 2.0)));
        session.extend(p(3.0, 4.0));
        assert_eq!(session.active().map(|a| a.cursor), Some(p(3.0, 4.0)));
        session.end();
        assert_eq!(session.active().map(|a| a.cursor), None);
    }

    #[test]
    fn test_two_strokes_then_undo_keeps_first() {
        let mut session = DrawingSession::default();
        draw(&mut session, p(10.0, 10.0), &[p(20.0, 10.0), p(20.0, 20.0)]);
        draw(&mut session, p(0.0, 0.0), &[p(5.0, 5.0)]);

        let undone = session.undo().unwrap();
        assert_eq!(undone.segment_count(), 1);

        let remaining = session.strokes();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].segment_count(), 2);
        assert_eq!(
            remaining[0].points(),
            vec![p(10.0, 10.0), p(20.0, 10.0), p(20.0, 20.0)]
        );
    }

    #[test]
    fn test_segment_handles_are_unique() {
        let mut session = DrawingSession::default();
        draw(&mut session, p(0.0, 0.0), &[p(1.0, 0.0), p(2.0, 0.0)]);
        draw(&mut session, p(0.0, 5.0), &[p(1.0, 5.0)]);
        let mut ids: Vec<_> = session
            .strokes()
            .iter()
            .flat_map(|s| s.segments().iter().map(|seg| seg.id))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_ne!(session.strokes()[0].id, session.strokes()[1].id);
    }

    #[test]
    fn test_extent_includes_pen_width() {
        let mut session = DrawingSession::default();
        assert!(session.extent().is_none());
        session.set_width(4.0);
        draw(&mut session, p(10.0, 10.0), &[p(30.0, 20.0)]);
        let extent = session.extent().unwrap();
        assert_eq!(extent.min, p(8.0, 8.0));
        assert_eq!(extent.max, p(32.0, 22.0));
    }
}
