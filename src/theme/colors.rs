//! Colors - Greet GUI Theme Colors

use gpui::{Rgba, rgb};

/// Application color palette - all colors are accessed via associated functions
pub struct UiColors;

impl UiColors {
    /// Header background - Cyan/Teal
    pub fn header_bg() -> Rgba {
        rgb(0x2cb3b8)
    }

    // Background colors
    /// Main background
    pub fn background() -> Rgba {
        rgb(0xf5f5f5)
    }
    /// Content area background
    pub fn content_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba {
        rgb(0x1a2332)
    }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba {
        rgb(0x1f2937)
    }
    /// Secondary text
    pub fn text_secondary() -> Rgba {
        rgb(0x6b7280)
    }
    /// Muted text
    pub fn text_muted() -> Rgba {
        rgb(0x9ca3af)
    }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba {
        rgb(0xffffff)
    }
    /// Header text
    pub fn text_header() -> Rgba {
        rgb(0xffffff)
    }

    // Border colors
    /// Default border
    pub fn border() -> Rgba {
        rgb(0xe5e7eb)
    }
    /// Focused border
    pub fn border_focus() -> Rgba {
        rgb(0x3b82f6)
    }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba {
        rgb(0xf5c518)
    }
    /// Primary button text
    pub fn button_primary_text() -> Rgba {
        rgb(0x1f2937)
    }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba {
        rgb(0x6b7280)
    }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Input border
    pub fn input_border() -> Rgba {
        rgb(0xd1d5db)
    }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba {
        rgb(0x9ca3af)
    }
}
