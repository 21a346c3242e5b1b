//! Board rasterizing module
//!
//! This module contains:
//! - Image rendering using tiny-skia (for exporting to PNG)

pub mod image;
