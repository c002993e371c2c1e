//! Colors - Table Theme Colors

use gpui::{rgb, Rgba};

/// Table color palette - All colors are accessed via associated functions
pub struct TableColors;

impl TableColors {
    // Background colors
    /// Table background
    pub fn table_bg() -> Rgba { rgb(0xffffff) }
    /// Header section background
    pub fn header_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Footer section background
    pub fn footer_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Row hover
    pub fn row_hover() -> Rgba { rgb(0xf9fafb) }

    // Text colors
    /// Body text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Header and footer text
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Empty state text
    pub fn text_muted() -> Rgba { rgb(0x6b7280) }

    // Status colors
    /// Positive values - Green
    pub fn positive() -> Rgba { rgb(0x22c55e) }
    /// Negative values - Red
    pub fn negative() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Row divider
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
}

impl TableColors {
    /// Text color for a utility class token, if the view understands it
    pub fn text_for_class(token: &str) -> Option<Rgba> {
        match token {
            "text-green-500" => Some(Self::positive()),
            "text-red-500" => Some(Self::negative()),
            "text-gray-500" => Some(Self::text_muted()),
            "text-gray-600" | "text-gray-700" => Some(Self::text_secondary()),
            "text-gray-800" => Some(Self::text_primary()),
            _ => None,
        }
    }
}
