use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// CSS hex color literal (`#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`).
///
/// The original spelling is preserved so the serialized value matches what
/// the caller wrote, e.g. `#27013F` stays upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: impl Into<String>) -> ChartResult<Self> {
        let value = value.into();
        if is_hex_color(&value) {
            Ok(Self(value))
        } else {
            Err(ChartError::InvalidColor { value })
        }
    }

    /// Wraps a literal known to be well-formed at compile time.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(is_hex_color(value), "malformed color literal {value}");
        Self(value.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the color as `(r, g, b, a)` channels, expanding short forms.
    #[must_use]
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        let digits = &self.0[1..];
        let channel = |hex: &str| u8::from_str_radix(hex, 16).unwrap_or(0);
        match digits.len() {
            3 => {
                let expand = |idx: usize| channel(&digits[idx..=idx].repeat(2));
                (expand(0), expand(1), expand(2), 0xFF)
            }
            4 => {
                let expand = |idx: usize| channel(&digits[idx..=idx].repeat(2));
                (expand(0), expand(1), expand(2), expand(3))
            }
            8 => (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
                channel(&digits[6..8]),
            ),
            _ => (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
                0xFF,
            ),
        }
    }

    /// Case-insensitive comparison of the encoded channels.
    #[must_use]
    pub fn same_color(&self, other: &Self) -> bool {
        self.to_rgba() == other.to_rgba()
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

impl TryFrom<String> for HexColor {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ChartError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_long_and_alpha_forms() {
        assert!(HexColor::parse("#fff").is_ok());
        assert!(HexColor::parse("#f80c").is_ok());
        assert!(HexColor::parse("#27013F").is_ok());
        assert!(HexColor::parse("#F2740580").is_ok());
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["27013F", "#27013", "#27", "#GG0000", "", "#", "rgb(0,0,0)"] {
            assert_eq!(
                HexColor::parse(bad),
                Err(ChartError::InvalidColor {
                    value: bad.to_owned()
                })
            );
        }
    }

    #[test]
    fn expands_channels() {
        let short = HexColor::parse("#f80").expect("valid");
        assert_eq!(short.to_rgba(), (0xFF, 0x88, 0x00, 0xFF));
        let short_alpha = HexColor::parse("#f80c").expect("valid");
        assert_eq!(short_alpha.to_rgba(), (0xFF, 0x88, 0x00, 0xCC));
        let long = HexColor::parse("#F27405").expect("valid");
        assert_eq!(long.to_rgba(), (0xF2, 0x74, 0x05, 0xFF));
        assert!(long.same_color(&HexColor::parse("#f27405").expect("valid")));
    }
}
