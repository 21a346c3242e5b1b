//! Board - Canvas program for freehand drawing
//!
//! This widget handles:
//! - Drawing committed strokes (cached until history changes)
//! - Drawing the gesture in progress segment by segment
//! - Mouse input for starting, extending and ending gestures

use cosmic::iced_core::mouse::{self, Button, Event as MouseEvent};
use cosmic::iced_core::{Color, Rectangle};
use cosmic::iced_widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path, Stroke};

use crate::domain::{ActiveStroke, Pen, Point, Stroke as BoardStroke};
use crate::session::messages::DrawAction;

/// Canvas program rendering the board and translating pointer input
pub struct Board<'a, Message> {
    /// Committed strokes in drawing order
    pub strokes: &'a [BoardStroke],
    /// Gesture in progress, if any
    pub active: Option<&'a ActiveStroke>,
    /// Geometry cache for committed strokes
    pub cache: &'a canvas::Cache,
    /// Pointer event handler
    pub on_event: Box<dyn Fn(DrawAction) -> Message + 'a>,
}

impl<'a, Message> Board<'a, Message> {
    pub fn new(
        strokes: &'a [BoardStroke],
        active: Option<&'a ActiveStroke>,
        cache: &'a canvas::Cache,
        on_event: impl Fn(DrawAction) -> Message + 'a,
    ) -> Self {
        Self {
            strokes,
            active,
            cache,
            on_event: Box::new(on_event),
        }
    }
}

/// Board-local point for a window position
fn to_board(bounds: Rectangle, position: cosmic::iced_core::Point) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

fn to_iced(point: Point) -> cosmic::iced_core::Point {
    cosmic::iced_core::Point::new(point.x, point.y)
}

/// Round caps and joins so fast gestures still read as one smooth line
fn pen_stroke(pen: Pen) -> Stroke<'static> {
    let color: Color = pen.color.into();
    Stroke::default()
        .with_color(color)
        .with_width(pen.width.as_f32())
        .with_line_cap(LineCap::Round)
        .with_line_join(LineJoin::Round)
}

impl<'a, Message: Clone + 'static> canvas::Program<Message, cosmic::Theme, cosmic::Renderer>
    for Board<'a, Message>
{
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(MouseEvent::ButtonPressed(Button::Left)) => {
                let Some(pos) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };
                let at = Point::new(pos.x, pos.y);
                return (
                    canvas::event::Status::Captured,
                    Some((self.on_event)(DrawAction::Begin(at))),
                );
            }
            // Moves outside the board still extend an active gesture
            canvas::Event::Mouse(MouseEvent::CursorMoved { position }) if self.active.is_some() => {
                let at = to_board(bounds, position);
                return (
                    canvas::event::Status::Captured,
                    Some((self.on_event)(DrawAction::Extend(at))),
                );
            }
            canvas::Event::Mouse(MouseEvent::ButtonReleased(Button::Left)) => {
                if let Some(active) = self.active {
                    let at = cursor
                        .position()
                        .map(|p| to_board(bounds, p))
                        .unwrap_or(active.cursor);
                    return (
                        canvas::event::Status::Captured,
                        Some((self.on_event)(DrawAction::End(at))),
                    );
                }
            }
            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &cosmic::Renderer,
        _theme: &cosmic::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let committed = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(
                cosmic::iced_core::Point::ORIGIN,
                frame.size(),
                Color::WHITE,
            );

            for stroke in self.strokes {
                let points = stroke.points();
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                let path = Path::new(|b| {
                    b.move_to(to_iced(*first));
                    for point in rest {
                        b.line_to(to_iced(*point));
                    }
                });
                frame.stroke(&path, pen_stroke(stroke.pen));
            }
        });

        let mut frame = Frame::new(renderer, bounds.size());
        if let Some(active) = self.active {
            let style = pen_stroke(active.pen);
            for segment in active.segments() {
                frame.stroke(
                    &Path::line(to_iced(segment.from), to_iced(segment.to)),
                    style,
                );
            }
        }

        vec![committed, frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
