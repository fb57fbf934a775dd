use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel RGBA color.
///
/// This is the value type the wheel trades in: channel math happens in
/// integer space, and the packed form follows the ARGB layout used by the
/// `0xAARRGGBB` literals throughout this crate.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
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

    /// Unpack from `0xAARRGGBB`.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
            a: (argb >> 24) as u8,
        }
    }

    /// Pack into `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// The same color with the alpha channel forced to fully opaque.
    pub const fn opaque(self) -> Self {
        Self { a: 0xFF, ..self }
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(source: &str) -> Result<Self> {
        let digits = source.strip_prefix('#').unwrap_or(source);
        let value = u32::from_str_radix(digits, 16)
            .with_context(|| format!("invalid hex color {source:?}"))?;
        match digits.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            8 => Ok(Self {
                r: (value >> 24) as u8,
                g: (value >> 16) as u8,
                b: (value >> 8) as u8,
                a: value as u8,
            }),
            _ => bail!("expected #rrggbb or #rrggbbaa, got {source:?}"),
        }
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba(0x{:02x}{:02x}{:02x}{:02x})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = anyhow::Error;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse_hex(source)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32, // 0..360
    pub s: f32, // 0..1
    pub v: f32, // 0..1
    pub a: f32, // 0..1
}

impl Hsv {
    pub fn from_rgba(rgba: Rgba) -> Self {
        let r = rgba.r as f32 / 255.0;
        let g = rgba.g as f32 / 255.0;
        let b = rgba.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };
        let v = max;

        let mut h = 0.0;
        if max != min {
            if max == r {
                h = (g - b) / d + (if g < b { 6.0 } else { 0.0 });
            } else if max == g {
                h = (b - r) / d + 2.0;
            } else {
                h = (r - g) / d + 4.0;
            }
            h *= 60.0;
        }

        Self {
            h,
            s,
            v,
            a: rgba.a as f32 / 255.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_approx_eq {
        ($a:expr, $b:expr) => {
            assert!(
                ($a - $b).abs() < 1e-4,
                "assertion failed: `(left == right)` (left: `{:?}`, right: `{:?}`)",
                $a,
                $b
            );
        };
    }

    #[test]
    fn argb_packing_round_trips() {
        let color = Rgba::from_argb(0xFF39_C5BB);
        assert_eq!(color.r, 0x39);
        assert_eq!(color.g, 0xC5);
        assert_eq!(color.b, 0xBB);
        assert_eq!(color.a, 0xFF);
        assert_eq!(color.to_argb(), 0xFF39_C5BB);
    }

    #[test]
    fn opaque_forces_only_the_alpha_channel() {
        let translucent = Rgba::from_argb(0x1039_C5BB);
        let forced = translucent.opaque();
        assert_eq!(forced.a, 0xFF);
        assert_eq!((forced.r, forced.g, forced.b), (0x39, 0xC5, 0xBB));
    }

    #[test]
    fn hex_formatting_round_trips_both_lengths() {
        let opaque = Rgba::new(0x39, 0xC5, 0xBB, 0xFF);
        assert_eq!(opaque.to_hex(), "#39c5bb");
        assert_eq!(Rgba::parse_hex("#39c5bb").unwrap(), opaque);

        let translucent = Rgba::new(0x39, 0xC5, 0xBB, 0x80);
        assert_eq!(translucent.to_hex(), "#39c5bb80");
        assert_eq!(Rgba::parse_hex("39c5bb80").unwrap(), translucent);
    }

    #[test]
    fn malformed_hex_is_an_error_not_a_panic() {
        assert!(Rgba::parse_hex("#39c5").is_err());
        assert!(Rgba::parse_hex("not-a-color").is_err());
        assert!(Rgba::parse_hex("#39c5bb8").is_err());
        assert!("".parse::<Rgba>().is_err());
    }

    #[test]
    fn serde_uses_the_hex_string_form() {
        let color = Rgba::new(0x00, 0xFF, 0xFF, 0xFF);
        let encoded = serde_json::to_string(&color).unwrap();
        assert_eq!(encoded, "\"#00ffff\"");
        let decoded: Rgba = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, color);
    }

    #[test]
    fn hue_extraction_hits_the_primaries_and_secondaries() {
        assert_approx_eq!(Hsv::from_rgba(Rgba::from_argb(0xFFFF_0000)).h, 0.0);
        assert_approx_eq!(Hsv::from_rgba(Rgba::from_argb(0xFFFF_FF00)).h, 60.0);
        assert_approx_eq!(Hsv::from_rgba(Rgba::from_argb(0xFF00_FF00)).h, 120.0);
        assert_approx_eq!(Hsv::from_rgba(Rgba::from_argb(0xFF00_FFFF)).h, 180.0);
        assert_approx_eq!(Hsv::from_rgba(Rgba::from_argb(0xFF00_00FF)).h, 240.0);
        assert_approx_eq!(Hsv::from_rgba(Rgba::from_argb(0xFFFF_00FF)).h, 300.0);
    }

    #[test]
    fn hue_extraction_of_a_gray_is_zero_with_no_saturation() {
        let gray = Hsv::from_rgba(Rgba::new(0x80, 0x80, 0x80, 0xFF));
        assert_approx_eq!(gray.h, 0.0);
        assert_approx_eq!(gray.s, 0.0);
        assert_approx_eq!(gray.v, 128.0 / 255.0);
    }
}
