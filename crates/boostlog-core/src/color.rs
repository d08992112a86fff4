// File: crates/boostlog-core/src/color.rs
// Summary: Renderer-agnostic RGBA color tokens with CSS-style text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// 8-bit RGBA color. Serialized as `rgb(r, g, b)` or `rgba(r, g, b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha given as a 0..=1 fraction (clamped).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha_to_u8(alpha), ..self }
    }

    pub fn alpha_fraction(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

fn alpha_to_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = (self.alpha_fraction() * 100.0).round() / 100.0;
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::Syntax(s.to_string()));
        }
        let inner = text
            .strip_prefix("rgba(")
            .or_else(|| text.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::Syntax(s.to_string()))?;

        // rgb() may carry a fourth component too.
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorParseError::Syntax(s.to_string()));
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| ColorParseError::Component(p.to_string()));
        let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
        let a = match parts.get(3) {
            None => 255,
            Some(p) => {
                let alpha = p
                    .parse::<f32>()
                    .map_err(|_| ColorParseError::Component(p.to_string()))?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(ColorParseError::Component(p.to_string()));
                }
                alpha_to_u8(alpha)
            }
        };
        Ok(Self { r, g, b, a })
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(Rgba { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}
