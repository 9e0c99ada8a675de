use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS color value that canvas and inline styles both accept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f32),
    Hsl(u16, u8, u8),
    Hsla(u16, u8, u8, f32),
}

impl Color {
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    pub const fn hex(value: u32) -> Color {
        Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Same hue with the given opacity.
    pub fn with_alpha(self, alpha: f32) -> Color {
        match self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, alpha),
            Color::Hsl(h, s, l) | Color::Hsla(h, s, l, _) => Color::Hsla(h, s, l, alpha),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsl(h, s, l) => write!(f, "hsl({}, {}%, {}%)", h, s, l),
            Color::Hsla(h, s, l, a) => write!(f, "hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

/// The colors a segment is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub solid: Color,
    /// Inner end of the segment gradient.
    pub gradient_start: Color,
    /// Outer end of the segment gradient.
    pub gradient_end: Color,
    pub glow: Color,
}

const fn swatch(solid: u32, light: u32) -> Swatch {
    let base = Color::hex(solid);
    let (r, g, b) = ((solid >> 16) as u8, (solid >> 8) as u8, solid as u8);
    Swatch {
        solid: base,
        gradient_start: base,
        gradient_end: Color::hex(light),
        glow: Color::Rgba(r, g, b, 0.6),
    }
}

pub const PALETTE: [Swatch; 12] = [
    swatch(0xf97316, 0xfb923c),
    swatch(0x22c55e, 0x4ade80),
    swatch(0x3b82f6, 0x60a5fa),
    swatch(0xe11d48, 0xfb7185),
    swatch(0xa855f7, 0xc4b5fd),
    swatch(0x06b6d4, 0x22d3ee),
    swatch(0xeab308, 0xfacc15),
    swatch(0xec4899, 0xf472b6),
    swatch(0x14b8a6, 0x2dd4bf),
    swatch(0x8b5cf6, 0xa78bfa),
    swatch(0xf43f5e, 0xfb7185),
    swatch(0x0ea5e9, 0x38bdf8),
];

/// Swatch for the segment at `index`. Past the fixed palette, hues step by 47 degrees.
pub fn swatch_for(index: usize) -> Swatch {
    if let Some(swatch) = PALETTE.get(index) {
        return *swatch;
    }
    let hue = ((index * 47) % 360) as u16;
    Swatch {
        solid: Color::Hsl(hue, 75, 55),
        gradient_start: Color::Hsl(hue, 75, 55),
        gradient_end: Color::Hsl(hue, 85, 70),
        glow: Color::Hsla(hue, 75, 55, 0.6),
    }
}
