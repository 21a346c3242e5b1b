//! Pure domain types with minimal dependencies
//!
//! This module contains the drawing model used throughout the application.
//! Types here should have no framework dependencies (cosmic, iced, etc.)
//! so the drawing session can be driven and tested without a window.

pub mod geometry;
pub mod pen;
pub mod stroke;

pub use geometry::*;
pub use pen::*;
pub use stroke::*;
