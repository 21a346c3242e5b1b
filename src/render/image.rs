//! Image rendering for strokes using tiny-skia
//!
//! These functions draw committed strokes onto an RgbaImage for export.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local};
use image::{ImageFormat, RgbaImage};
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::domain::{Bounds, Stroke as BoardStroke};

/// Size of the exported image: from the board origin to the far edge of the
/// strokes, at least one pixel in each direction
pub fn export_size(extent: Bounds) -> (u32, u32) {
    let width = extent.max.x.ceil().max(1.0) as u32;
    let height = extent.max.y.ceil().max(1.0) as u32;
    (width, height)
}

/// Build a polyline path through the stroke's points
fn build_stroke_path(stroke: &BoardStroke) -> Option<tiny_skia::Path> {
    let points = stroke.points();
    let (first, rest) = points.split_first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in rest {
        pb.line_to(point.x, point.y);
    }
    pb.finish()
}

/// Render strokes in drawing order onto a white image
pub fn render_strokes(strokes: &[BoardStroke], size: (u32, u32)) -> Result<RgbaImage> {
    let (width, height) = size;
    let mut pixmap =
        Pixmap::new(width, height).ok_or_else(|| anyhow!("Invalid export size {width}x{height}"))?;
    pixmap.fill(Color::WHITE);

    for stroke in strokes {
        let Some(path) = build_stroke_path(stroke) else {
            continue;
        };
        let [r, g, b, a] = stroke.pen.color.to_rgba_u8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let style = Stroke {
            width: stroke.pen.width.as_f32(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &style, Transform::identity(), None);
    }

    // Opaque background, so premultiplied data equals straight RGBA
    RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| anyhow!("Rendered buffer does not match {width}x{height}"))
}

/// Render strokes and write them as PNG
pub fn export_png(path: &Path, strokes: &[BoardStroke], extent: Bounds) -> Result<()> {
    let image = render_strokes(strokes, export_size(extent))?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Could not write image to {}", path.display()))
}

/// File name proposed by the export dialog
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("board-{}.png", now.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PenColor;
    use crate::domain::Point;
    use crate::session::state::DrawingSession;

    fn board_with_red_line() -> DrawingSession {
        let mut session = DrawingSession::default();
        session.set_color(PenColor::from_rgb8(255, 0, 0));
        session.set_width(6.0);
        session.begin(Point::new(10.0, 20.0));
        session.extend(Point::new(50.0, 20.0));
        session.end();
        session
    }

    #[test]
    fn test_export_size_covers_extent() {
        let session = board_with_red_line();
        let extent = session.extent().unwrap();
        assert_eq!(export_size(extent), (53, 23));
    }

    #[test]
    fn test_render_draws_stroke_color_on_white() {
        let session = board_with_red_line();
        let image = render_strokes(session.strokes(), (60, 40)).unwrap();

        assert_eq!(image.get_pixel(30, 20).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(30, 35).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(2, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_rejects_empty_size() {
        assert!(render_strokes(&[], (0, 10)).is_err());
    }

    #[test]
    fn test_export_png_writes_file() {
        let session = board_with_red_line();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.png");
        export_png(&path, session.strokes(), session.extent().unwrap()).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (53, 23));
        assert_eq!(decoded.get_pixel(30, 20).0, [255, 0, 0, 255]);
    }
}
