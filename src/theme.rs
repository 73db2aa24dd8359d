//! Theme module for ccf-grid
//!
//! Status colors and glyphs shared by the scene renderers and the terminal
//! viewer, plus the viewer's own chrome palette.

use std::fmt;

use ratatui::style::Color;

use crate::models::ImplementationStatus;

/// 24-bit color as written into the scene (`#RRGGBB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Parse `#RRGGBB` or `#RGB` (case-insensitive)
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.trim().strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => Some(Rgb(
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            )),
            3 => {
                let channel = |i: usize| -> Option<u8> {
                    let v = u8::from_str_radix(&digits[i..=i], 16).ok()?;
                    Some(v * 17)
                };
                Some(Rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

// ============================================================================
// Status Colors and Glyphs
// ============================================================================

/// Widely adopted - green (#4CAF50)
pub const STATUS_ADOPTED: Rgb = Rgb(0x4C, 0xAF, 0x50);

/// Growing adoption - amber (#FFC107)
pub const STATUS_GROWING: Rgb = Rgb(0xFF, 0xC1, 0x07);

/// Emerging - red (#F44336)
pub const STATUS_EMERGING: Rgb = Rgb(0xF4, 0x43, 0x36);

pub fn status_color(status: ImplementationStatus) -> Rgb {
    match status {
        ImplementationStatus::WidelyAdopted => STATUS_ADOPTED,
        ImplementationStatus::GrowingAdoption => STATUS_GROWING,
        ImplementationStatus::Emerging => STATUS_EMERGING,
    }
}

pub fn status_glyph(status: ImplementationStatus) -> &'static str {
    match status {
        ImplementationStatus::WidelyAdopted => "✔️",
        ImplementationStatus::GrowingAdoption => "🔄",
        ImplementationStatus::Emerging => "✨",
    }
}

/// Modal overlay dimming
pub const OVERLAY_DIM: &str = "rgba(0, 0, 0, 0.5)";

/// Foreground used on top of status colors
pub const FOREGROUND_ON_STATUS: &str = "#fff";

/// Cell border
pub const CELL_STROKE: &str = "black";

// ============================================================================
// Viewer Chrome - Deep Space Palette
// ============================================================================

/// Primary background color - deepest space black (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color - slightly lighter (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Dark text drawn on light status fills
pub const TEXT_ON_STATUS: Color = Color::Rgb(17, 17, 17);
