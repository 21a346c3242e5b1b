//! Configuration persistence for whiteboard settings

use std::fmt;
use std::path::PathBuf;

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::iced::Color;
use serde::{Deserialize, Serialize};

/// Serializable RGB color used for the pen and for note highlights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl PenColor {
    pub const BLACK: PenColor = PenColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Build a color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]
    }

    /// Lowercase `#rrggbb` form used in status messages
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse `#rrggbb` or `rrggbb`, ignoring surrounding whitespace
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Whether two colors are indistinguishable in the picker
    pub fn approx_eq(self, other: PenColor) -> bool {
        (self.r - other.r).abs() < 0.05
            && (self.g - other.g).abs() < 0.05
            && (self.b - other.b).abs() < 0.05
    }
}

impl Default for PenColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for PenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<PenColor> for Color {
    fn from(c: PenColor) -> Self {
        Color::from_rgb(c.r, c.g, c.b)
    }
}

impl From<Color> for PenColor {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Default folder offered by the save and export dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveLocation {
    #[default]
    Documents,
    Pictures,
    Home,
}

impl SaveLocation {
    /// Resolve to a directory, falling back to the home directory
    pub fn dir(self) -> Option<PathBuf> {
        let dir = match self {
            SaveLocation::Documents => dirs::document_dir(),
            SaveLocation::Pictures => dirs::picture_dir(),
            SaveLocation::Home => None,
        };
        dir.or_else(dirs::home_dir)
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct WhiteboardConfig {
    /// Pen color used for new strokes
    pub pen_color: PenColor,
    /// Pen width in pixels (1-10)
    pub pen_width: u8,
    /// Tint applied to highlighted note text
    #[serde(default = "default_highlight_color")]
    pub highlight_color: PenColor,
    /// Folder proposed when saving notes or exporting the board
    #[serde(default)]
    pub save_location: SaveLocation,
}

fn default_highlight_color() -> PenColor {
    PenColor {
        r: 0.85,
        g: 0.6,
        b: 0.0,
    } // Amber
}

impl WhiteboardConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.nullbyte.whiteboard";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => {
                if let Err(err) = self.write_entry(&config) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            Err(err) => {
                log::error!("Could not create config handler for saving: {:?}", err);
            }
        }
    }
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            pen_color: PenColor::BLACK,
            pen_width: 2,
            highlight_color: default_highlight_color(),
            save_location: SaveLocation::Documents,
        }
    }
}
