use glam::Vec4;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Color type represented as RGBA
pub struct Color([u8; 4]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid css color: {0:?}")]
pub struct ParseColorError(pub String);

impl From<Vec4> for Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(value: Vec4) -> Self {
        let value = value.clamp(Vec4::ZERO, Vec4::ONE) * 255.0;

        Self([
            value.x.round() as u8,
            value.y.round() as u8,
            value.z.round() as u8,
            value.w.round() as u8,
        ])
    }
}

impl From<Color> for Vec4 {
    fn from(value: Color) -> Self {
        Self::new(
            f32::from(value.0[0]),
            f32::from(value.0[1]),
            f32::from(value.0[2]),
            f32::from(value.0[3]),
        ) / 255.0
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl Color {
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    pub const RED: Self = Self([255, 0, 0, 255]);
    pub const GREEN: Self = Self([0, 255, 0, 255]);
    pub const BLUE: Self = Self([0, 0, 255, 255]);
    pub const YELLOW: Self = Self([255, 255, 0, 255]);
    pub const PURPLE: Self = Self([128, 0, 128, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const BLACK: Self = Self([0, 0, 0, 255]);

    pub const fn get_red(&self) -> u8 {
        self.0[0]
    }

    pub const fn get_green(&self) -> u8 {
        self.0[1]
    }

    pub const fn get_blue(&self) -> u8 {
        self.0[2]
    }

    pub const fn get_alpha(&self) -> u8 {
        self.0[3]
    }

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self([red, green, blue, alpha])
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn with_alpha(mut self, value: f32) -> Self {
        self.0[3] = (255.0 * value) as u8;

        self
    }

    /// Formats the color the way a 2D canvas context accepts it as a style.
    pub fn to_css(&self) -> String {
        let [red, green, blue, alpha] = self.0;

        if alpha == 255 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("rgba({red}, {green}, {blue}, {:.3})", f32::from(alpha) / 255.0)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Accepts `transparent`, `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        let error = || ParseColorError(value.to_string());
        let hex = trimmed.strip_prefix('#').ok_or_else(error)?;

        if !hex.is_ascii() {
            return Err(error());
        }

        let nibble = |index: usize| {
            u8::from_str_radix(&hex[index..=index], 16)
                .map(|value| value * 17)
                .map_err(|_| error())
        };
        let byte = |index: usize| {
            u8::from_str_radix(&hex[index..index + 2], 16).map_err(|_| error())
        };

        match hex.len() {
            3 => Ok(Self([nibble(0)?, nibble(1)?, nibble(2)?, 255])),
            4 => Ok(Self([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?])),
            6 => Ok(Self([byte(0)?, byte(2)?, byte(4)?, 255])),
            8 => Ok(Self([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
            _ => Err(error()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let [red, green, blue, alpha] = self.0;

        serializer.serialize_str(&format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ColorVisitor;

        impl serde::de::Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("css hex color")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}
