//! Normalised hex colours.
//!
//! Hyprland writes colours in several shapes (`0xffRRGGBB`, `RRGGBB`,
//! `#RRGGBB`).  Everything inside hyprcc compares colours in one form only:
//! [`HexColor`], an uppercase `#RRGGBB` string built from the **last six**
//! characters of whatever was given.

use std::fmt;

/// Fallback colour for options whose default is the `unset` sentinel.
pub const UNSET_FALLBACK: &str = "FFFFFF";

/// A colour in normalised `#RRGGBB` form (uppercase, no alpha).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

/// A string that does not end in six hex digits.
#[derive(Debug, thiserror::Error)]
#[error("not a hex colour: {0:?}")]
pub struct ColorError(pub String);

impl HexColor {
    /// Normalise `input` by keeping its last six characters.
    ///
    /// ```
    /// use hyprcc::color::HexColor;
    /// assert_eq!(HexColor::parse("0xff33ccff").unwrap().as_str(), "#33CCFF");
    /// assert_eq!(HexColor::parse("#abcdef").unwrap().as_str(), "#ABCDEF");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() < 6 {
            return Err(ColorError(input.to_string()));
        }
        let tail = &chars[chars.len() - 6..];
        if !tail.iter().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError(input.to_string()));
        }
        let digits: String = tail.iter().map(|c| c.to_ascii_uppercase()).collect();
        Ok(Self(format!("#{}", digits)))
    }

    /// Build a colour from channel values in `[0.0, 1.0]`.
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self(format!(
            "#{:02X}{:02X}{:02X}",
            channel(r),
            channel(g),
            channel(b)
        ))
    }

    /// The `#RRGGBB` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without the leading `#`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
