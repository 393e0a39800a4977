use crate::foundation::error::{DeckError, DeckResult};

pub use kurbo::{Point, Rect};

/// Full card width including bleed.
pub const CARD_WIDTH: u32 = 822;
/// Full card height including bleed.
pub const CARD_HEIGHT: u32 = 1122;
/// Width of the cut line box, centered on the card.
pub const CUT_WIDTH: u32 = 750;
/// Height of the cut line box, centered on the card.
pub const CUT_HEIGHT: u32 = 1050;
/// Width of the safe area box, centered on the card.
pub const SAFE_WIDTH: u32 = 678;
/// Height of the safe area box, centered on the card.
pub const SAFE_HEIGHT: u32 = 978;

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const RED: Self = Self::opaque(255, 0, 0);
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    pub fn parse_hex(s: &str) -> DeckResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(DeckError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| DeckError::validation(format!("color '{s}' is not valid hex")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = DeckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

/// Integer position in canvas space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel box with inclusive corners `(x0, y0)` and `(x1, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of `box_w x box_h` centered on a `width x height` surface.
    ///
    /// Corners are computed in floating point and truncated, so odd differences lose the half
    /// pixel.
    pub fn centered(width: u32, height: u32, box_w: u32, box_h: u32) -> Self {
        let c = Rect::new(0.0, 0.0, f64::from(width), f64::from(height)).center();
        let (hw, hh) = (f64::from(box_w) / 2.0, f64::from(box_h) / 2.0);
        Self::new(
            (c.x - hw) as i32,
            (c.y - hh) as i32,
            (c.x + hw) as i32,
            (c.y + hh) as i32,
        )
    }

    pub fn contains(self, p: PixelPoint) -> bool {
        self.x0 <= p.x && p.x <= self.x1 && self.y0 <= p.y && p.y <= self.y1
    }

    /// Reflect a point across both midlines of the box.
    pub fn mirror(self, p: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x0 + self.x1 - p.x, self.y0 + self.y1 - p.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
