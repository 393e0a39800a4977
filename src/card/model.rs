use std::fmt;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{DeckError, DeckResult};

/// Suit index `0..=3`. Names follow the deck this engine was built for.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Suit(u8);

impl Suit {
    pub const COUNT: u8 = 4;
    const NAMES: [&'static str; 4] = ["star", "pagoda", "sword", "gem"];

    pub fn new(index: u8) -> DeckResult<Self> {
        if index >= Self::COUNT {
            return Err(DeckError::invalid_card(format!(
                "suit must be in 0..=3, got {index}"
            )));
        }
        Ok(Self(index))
    }

    pub fn all() -> [Suit; 4] {
        [Self(0), Self(1), Self(2), Self(3)]
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[usize::from(self.0)]
    }
}

impl TryFrom<u8> for Suit {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Suit> for u8 {
    fn from(value: Suit) -> Self {
        value.0
    }
}

/// Non-numeric cards, each drawn from its own artwork and corner glyph.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SpecialTag {
    #[serde(rename = "P")]
    Phoenix,
    #[serde(rename = "D")]
    Dragon,
    #[serde(rename = "O")]
    Dog,
    #[serde(rename = "M")]
    Mahjong,
}

impl SpecialTag {
    pub const ALL: [SpecialTag; 4] = [Self::Phoenix, Self::Dragon, Self::Dog, Self::Mahjong];

    pub fn code(self) -> char {
        match self {
            Self::Phoenix => 'P',
            Self::Dragon => 'D',
            Self::Dog => 'O',
            Self::Mahjong => 'M',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code.to_ascii_uppercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Phoenix => "phoenix",
            Self::Dragon => "dragon",
            Self::Dog => "dog",
            Self::Mahjong => "mahjong",
        }
    }
}

/// What a card shows: a rank `1..=13` or one of the special cards.
///
/// JSON form is either a number (`6`) or a special code (`"P"`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum CardValue {
    Rank(u8),
    Special(SpecialTag),
}

impl CardValue {
    pub const ACE: u8 = 1;
    pub const JACK: u8 = 11;
    pub const KING: u8 = 13;

    /// Parse `A`, `J`, `Q`, `K`, `1..=13` or a special code (`P`, `D`, `O`, `M`).
    pub fn parse(s: &str) -> DeckResult<Self> {
        let s = s.trim();
        let value = match s.to_ascii_uppercase().as_str() {
            "A" => Self::Rank(Self::ACE),
            "J" => Self::Rank(Self::JACK),
            "Q" => Self::Rank(12),
            "K" => Self::Rank(Self::KING),
            other => {
                if let Ok(n) = other.parse::<u8>() {
                    Self::Rank(n)
                } else {
                    let mut chars = other.chars();
                    match (chars.next().and_then(SpecialTag::from_code), chars.next()) {
                        (Some(tag), None) => Self::Special(tag),
                        _ => {
                            return Err(DeckError::invalid_card(format!(
                                "unknown card value '{s}'"
                            )));
                        }
                    }
                }
            }
        };
        value.validate()?;
        Ok(value)
    }

    pub fn validate(self) -> DeckResult<()> {
        match self {
            Self::Rank(n) if !(Self::ACE..=Self::KING).contains(&n) => Err(
                DeckError::invalid_card(format!("rank must be in 1..=13, got {n}")),
            ),
            _ => Ok(()),
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Self::Rank(n) if n >= Self::JACK)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(1) => f.write_str("A"),
            Self::Rank(11) => f.write_str("J"),
            Self::Rank(12) => f.write_str("Q"),
            Self::Rank(13) => f.write_str("K"),
            Self::Rank(n) => write!(f, "{n}"),
            Self::Special(tag) => write!(f, "{}", tag.code()),
        }
    }
}

/// Non-printing print-alignment outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Guides {
    pub cut: bool,
    pub safe: bool,
}

impl Guides {
    pub const NONE: Self = Self {
        cut: false,
        safe: false,
    };

    /// Parse a flag string: `C` enables the cut line, `S` the safe line (case-insensitive).
    pub fn parse(flags: &str) -> DeckResult<Self> {
        let mut out = Self::NONE;
        for ch in flags.chars() {
            match ch.to_ascii_uppercase() {
                'C' => out.cut = true,
                'S' => out.safe = true,
                _ => {
                    return Err(DeckError::validation(format!(
                        "unknown guide flag '{ch}' (expected C or S)"
                    )));
                }
            }
        }
        Ok(out)
    }
}

/// How many corners receive the rank label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerMode {
    /// Top-left and its 180° mirror at bottom-right.
    Two,
    /// All four corners.
    #[default]
    Four,
}

/// Everything needed to render one card face.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardFaceConfig {
    pub value: CardValue,
    #[serde(default)]
    pub suit: Option<Suit>,
    #[serde(default)]
    pub guides: Guides,
    #[serde(default)]
    pub corners: CornerMode,
    /// Shear slope applied to pip positions; `None` keeps the straight grid.
    #[serde(default)]
    pub tilt: Option<f64>,
    /// Clear everything outside the cut line after rendering.
    #[serde(default)]
    pub cut_mask: bool,
}

impl CardFaceConfig {
    pub fn ranked(rank: u8, suit: Suit) -> Self {
        Self {
            value: CardValue::Rank(rank),
            suit: Some(suit),
            guides: Guides::NONE,
            corners: CornerMode::Four,
            tilt: None,
            cut_mask: false,
        }
    }

    pub fn special(tag: SpecialTag) -> Self {
        Self {
            value: CardValue::Special(tag),
            suit: None,
            guides: Guides::NONE,
            corners: CornerMode::Four,
            tilt: None,
            cut_mask: false,
        }
    }

    pub fn validate(&self) -> DeckResult<()> {
        self.value.validate()?;
        match (self.value, self.suit) {
            (CardValue::Rank(n), None) => Err(DeckError::invalid_card(format!(
                "rank {n} needs a suit"
            ))),
            (CardValue::Special(tag), Some(_)) => Err(DeckError::invalid_card(format!(
                "special card '{}' does not take a suit",
                tag.code()
            ))),
            _ => Ok(()),
        }?;
        if let Some(slope) = self.tilt
            && !slope.is_finite()
        {
            return Err(DeckError::validation("tilt slope must be finite"));
        }
        Ok(())
    }
}

/// Largest radius, thickness or block size a style file may ask for.
pub const MAX_STYLE_EXTENT: u32 = 1000;

/// Rounded guide outline style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideStyle {
    pub radius: u32,
    pub thickness: u32,
    pub color: Rgba8,
}

impl GuideStyle {
    pub const CUT: Self = Self {
        radius: 50,
        thickness: 5,
        color: Rgba8::BLUE,
    };
    pub const SAFE: Self = Self {
        radius: 40,
        thickness: 2,
        color: Rgba8::RED,
    };

    fn validate(&self, name: &str) -> DeckResult<()> {
        if self.radius > MAX_STYLE_EXTENT || self.thickness > MAX_STYLE_EXTENT {
            return Err(DeckError::validation(format!(
                "{name}: radius {} and thickness {} must be at most {MAX_STYLE_EXTENT}",
                self.radius, self.thickness
            )));
        }
        Ok(())
    }
}

/// Guide as written in a style file. Absent fields fall back to the guide's own defaults.
#[derive(serde::Deserialize)]
struct PartialGuide {
    radius: Option<u32>,
    thickness: Option<u32>,
    color: Option<Rgba8>,
}

impl PartialGuide {
    fn over(self, base: GuideStyle) -> GuideStyle {
        GuideStyle {
            radius: self.radius.unwrap_or(base.radius),
            thickness: self.thickness.unwrap_or(base.thickness),
            color: self.color.unwrap_or(base.color),
        }
    }
}

fn cut_guide<'de, D: serde::Deserializer<'de>>(d: D) -> Result<GuideStyle, D::Error> {
    <PartialGuide as serde::Deserialize>::deserialize(d).map(|p| p.over(GuideStyle::CUT))
}

fn safe_guide<'de, D: serde::Deserializer<'de>>(d: D) -> Result<GuideStyle, D::Error> {
    <PartialGuide as serde::Deserialize>::deserialize(d).map(|p| p.over(GuideStyle::SAFE))
}

/// Corner label block geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CornerStyle {
    pub block_width: u32,
    pub block_height: u32,
    /// Vertical anchor of the glyph cell inside the block.
    pub glyph_top: i32,
    pub suit_size: u32,
    pub suit_top: i32,
}

impl Default for CornerStyle {
    fn default() -> Self {
        Self {
            block_width: 130,
            block_height: 300,
            glyph_top: 0,
            suit_size: 120,
            suit_top: 132,
        }
    }
}

/// Frame drawn around face-card artwork.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameStyle {
    pub inset_x: i32,
    pub inset_y: i32,
    pub thickness: i32,
    pub color: Rgba8,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            inset_x: 210,
            inset_y: 200,
            thickness: 4,
            color: Rgba8::BLACK,
        }
    }
}

/// Shared, read-only styling for every card face.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FaceStyle {
    pub background: Rgba8,
    /// Horizontal and vertical margins of the pip grid.
    pub grid_margin: [f64; 2],
    pub pip_size: u32,
    pub ace_size: u32,
    /// Draw pips in the lower half of the card upside down.
    pub flip_lower_pips: bool,
    pub corner: CornerStyle,
    pub face_frame: FrameStyle,
    #[serde(deserialize_with = "cut_guide")]
    pub cut_guide: GuideStyle,
    #[serde(deserialize_with = "safe_guide")]
    pub safe_guide: GuideStyle,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::WHITE,
            grid_margin: [280.0, 280.0],
            pip_size: 144,
            ace_size: 336,
            flip_lower_pips: true,
            corner: CornerStyle::default(),
            face_frame: FrameStyle::default(),
            cut_guide: GuideStyle::CUT,
            safe_guide: GuideStyle::SAFE,
        }
    }
}

impl FaceStyle {
    /// Reject geometry that would overflow pixel math or stall the guide rasterizer.
    pub fn validate(&self) -> DeckResult<()> {
        self.cut_guide.validate("cut_guide")?;
        self.safe_guide.validate("safe_guide")?;

        if !(0..=MAX_STYLE_EXTENT as i32).contains(&self.face_frame.thickness) {
            return Err(DeckError::validation(format!(
                "face_frame thickness must be in 0..={MAX_STYLE_EXTENT}, got {}",
                self.face_frame.thickness
            )));
        }
        let sizes = [
            ("pip_size", self.pip_size),
            ("ace_size", self.ace_size),
            ("corner.block_width", self.corner.block_width),
            ("corner.block_height", self.corner.block_height),
            ("corner.suit_size", self.corner.suit_size),
        ];
        if let Some((name, v)) = sizes.into_iter().find(|(_, v)| *v > MAX_STYLE_EXTENT) {
            return Err(DeckError::validation(format!(
                "{name} must be at most {MAX_STYLE_EXTENT}, got {v}"
            )));
        }
        if !self.grid_margin.iter().all(|m| m.is_finite() && *m >= 0.0) {
            return Err(DeckError::validation(format!(
                "grid_margin must be finite and non-negative, got {:?}",
                self.grid_margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
