use std::io::Write;

/// A colour, expressed in RGB, CMYK, or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl Colour {
    /// An RGB colour; components are clamped to 0.0..=1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB {
            r: unit(r),
            g: unit(g),
            b: unit(b),
        }
    }

    /// An RGB colour from 0-255 components
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        let byte = |v: u8| v as f32 / 255.0;
        Colour::RGB {
            r: byte(r),
            g: byte(g),
            b: byte(b),
        }
    }

    /// Parse a CSS-style hex colour such as `#1e90ff` or `1e90ff`
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }

    /// A CMYK colour; components are clamped to 0.0..=1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK {
            c: unit(c),
            m: unit(m),
            y: unit(y),
            k: unit(k),
        }
    }

    /// A shade of grey from 0.0 (black) to 1.0 (white)
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g: unit(g) }
    }

    /// Write the operator that makes this the fill (text) colour
    #[allow(clippy::write_with_newline)]
    pub(crate) fn write_fill<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        match *self {
            Colour::RGB { r, g, b } => write!(w, "{r} {g} {b} rg\n"),
            Colour::CMYK { c, m, y, k } => write!(w, "{c} {m} {y} {k} k\n"),
            Colour::Grey { g } => write!(w, "{g} g\n"),
        }
    }

    /// Write the operator that makes this the stroke (line) colour
    #[allow(clippy::write_with_newline)]
    pub(crate) fn write_stroke<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        match *self {
            Colour::RGB { r, g, b } => write!(w, "{r} {g} {b} RG\n"),
            Colour::CMYK { c, m, y, k } => write!(w, "{c} {m} {y} {k} K\n"),
            Colour::Grey { g } => write!(w, "{g} G\n"),
        }
    }
}

fn unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

impl From<(f32, f32, f32)> for Colour {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Colour::new_rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<(f32, f32, f32, f32)> for Colour {
    fn from((c, m, y, k): (f32, f32, f32, f32)) -> Self {
        Colour::new_cmyk(c, m, y, k)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// A light grey that's visible on paper but doesn't distract from the labels
    pub const GUIDE_GREY: Colour = Colour::Grey { g: 0.75 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}
