//! Pen state: the color and width applied to new strokes

use crate::config::PenColor;

/// Stroke width in whole pixels, always within `MIN..=MAX`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PenWidth(u8);

impl PenWidth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: PenWidth = PenWidth(2);

    /// Clamp an integer width into range
    pub fn new(width: u8) -> Self {
        Self(width.clamp(Self::MIN, Self::MAX))
    }

    /// Convert a continuous slider value: round to nearest, then clamp.
    /// Non-finite input maps to the minimum width.
    pub fn from_slider(value: f32) -> Self {
        if !value.is_finite() {
            return Self(Self::MIN);
        }
        let rounded = value.round().clamp(f32::from(Self::MIN), f32::from(Self::MAX));
        Self(rounded as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for PenWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Color and width captured for a stroke
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pen {
    pub color: PenColor,
    pub width: PenWidth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_rounds_then_clamps() {
        assert_eq!(PenWidth::from_slider(0.4).get(), 1);
        assert_eq!(PenWidth::from_slider(10.6).get(), 10);
        assert_eq!(PenWidth::from_slider(3.4).get(), 3);
        assert_eq!(PenWidth::from_slider(3.6).get(), 4);
        assert_eq!(PenWidth::from_slider(-7.0).get(), 1);
    }

    #[test]
    fn test_slider_non_finite() {
        assert_eq!(PenWidth::from_slider(f32::NAN).get(), 1);
        assert_eq!(PenWidth::from_slider(f32::INFINITY).get(), 1);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(PenWidth::new(0).get(), 1);
        assert_eq!(PenWidth::new(200).get(), 10);
        assert_eq!(PenWidth::default().get(), 2);
    }

    #[test]
    fn test_default_pen() {
        let pen = Pen::default();
        assert_eq!(pen.color, PenColor::BLACK);
        assert_eq!(pen.width, PenWidth::DEFAULT);
    }
}
