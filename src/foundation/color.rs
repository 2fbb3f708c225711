use crate::foundation::error::{SubburnError, SubburnResult};

/// Straight-alpha RGBA8 color.
///
/// Component range validity is guaranteed by construction (`u8`). Loosely-typed
/// adapter input (raw integer tuples from node parameters) goes through
/// [`Rgba::from_components`], which rejects wrong arity and out-of-range values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color from a loosely-typed integer slice (3 = RGB, 4 = RGBA).
    pub fn from_components(components: &[i64]) -> SubburnResult<Self> {
        if components.len() != 3 && components.len() != 4 {
            return Err(SubburnError::validation(format!(
                "color must have 3 or 4 components, got {}",
                components.len()
            )));
        }
        for (idx, &c) in components.iter().enumerate() {
            if !(0..=255).contains(&c) {
                return Err(SubburnError::validation(format!(
                    "color component {idx} must be in [0, 255], got {c}"
                )));
            }
        }
        Ok(Self {
            r: components[0] as u8,
            g: components[1] as u8,
            b: components[2] as u8,
            a: components.get(3).map(|&a| a as u8).unwrap_or(255),
        })
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `true` when the alpha channel is 255.
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Fixed-width `0xRRGGBBAA` hex encoding understood by the filter engine.
    pub fn to_hex(self) -> String {
        format!("0x{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Relative luminance in `[0, 1]` (Rec. 709 weights), ignoring alpha.
    pub fn luminance(self) -> f64 {
        (0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b))
            / 255.0
    }

    /// Opaque black or white, whichever contrasts more with this color.
    pub fn contrasting(self) -> Self {
        if self.luminance() > 0.5 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
