// File: crates/story-core/src/theme.rs
// Summary: Renderer-agnostic colours, the fixed channel palette and chart theming.

use crate::data::Channel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Palette keyed by channel identifier. Colour assignment must never depend on
/// dataset row order or the configured draw order, or series silently swap hues.
pub fn channel_colour(channel: Channel) -> Rgba {
    match channel {
        Channel::Bbc => Rgba::opaque(0x00, 0x00, 0x00),
        Channel::Msnbc => Rgba::opaque(0xff, 0xc7, 0x11),
        Channel::Cnn => Rgba::opaque(0xfc, 0x36, 0x05),
        Channel::Fox => Rgba::opaque(0x22, 0x55, 0xaa),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub highlight_fill: Rgba,
    pub axis_label: Rgba,
    pub legend_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(255, 255, 255),
            highlight_fill: Rgba::opaque(0xee, 0xee, 0xee),
            axis_label: Rgba::opaque(0x99, 0x99, 0x99),
            legend_text: Rgba::opaque(0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            highlight_fill: Rgba::opaque(40, 40, 45),
            axis_label: Rgba::opaque(150, 150, 160),
            legend_text: Rgba::opaque(210, 210, 220),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
