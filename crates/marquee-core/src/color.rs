//! RGBA color value shared by the config layer and the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// 8-bit straight-alpha color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// Same color with the alpha channel replaced
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a fraction in [0, 1]
    #[inline]
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Linear interpolation in premultiplied space, `t` clamped to [0, 1]
    ///
    /// Fading towards `TRANSPARENT` keeps the hue instead of darkening it.
    pub fn lerp(self, to: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let (from_a, to_a) = (self.opacity(), to.opacity());
        let alpha = from_a + (to_a - from_a) * t;
        if alpha <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let mix = |f: u8, g: u8| {
            let from = f as f64 * from_a;
            let premultiplied = from + (g as f64 * to_a - from) * t;
            (premultiplied / alpha).round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: mix(self.r, to.r),
            g: mix(self.g, to.g),
            b: mix(self.b, to.b),
            a: (alpha * 255.0).round() as u8,
        }
    }

    /// Composite `self` over an opaque `below` color
    pub fn over(self, below: Rgba) -> Rgba {
        below.with_alpha(0xff).lerp(self.with_alpha(0xff), self.opacity())
    }
}

/// Parse a hex color string
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB", "#RRGGBBAA"
pub fn parse_hex_color(hex: &str) -> Option<Rgba> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => Some(Rgba::rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some(Rgba::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Rgba::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}
