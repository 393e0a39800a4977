use std::collections::BTreeMap;

use crate::{
    card::model::{CardValue, SpecialTag, Suit},
    foundation::error::{DeckError, DeckResult},
    render::canvas::Canvas,
};

/// Default side of one suit cell in a suit sheet.
pub const SUIT_CELL: u32 = 192;
/// Cell size rank glyphs are normalized to.
pub const RANK_GLYPH_CELL: (u32, u32) = (120, 120);
/// Cell size special-card glyphs are normalized to.
pub const SPECIAL_GLYPH_CELL: (u32, u32) = (140, 150);

#[derive(Clone, Debug, PartialEq)]
/// Corner glyph cell plus the per-glyph nudge applied to its corner anchor.
pub struct Glyph {
    pub image: Canvas,
    pub adjust: [i32; 2],
}

#[derive(Clone, Debug, PartialEq)]
/// Artwork with the size it is drawn at and its offset from the card center.
pub struct SizedArt {
    pub image: Canvas,
    pub size: (u32, u32),
    pub offset: [i32; 2],
}

/// Immutable artwork shared by every card render.
///
/// Loaded once (see [`DeckAssets::load`]) and then only read, so one instance can back renders on
/// many threads.
#[derive(Clone, Debug)]
pub struct DeckAssets {
    suits: [Canvas; 4],
    glyphs: BTreeMap<CardValue, Glyph>,
    specials: BTreeMap<SpecialTag, SizedArt>,
    faces: BTreeMap<(Suit, u8), SizedArt>,
}

impl DeckAssets {
    pub fn new(suits: [Canvas; 4]) -> Self {
        Self {
            suits,
            glyphs: BTreeMap::new(),
            specials: BTreeMap::new(),
            faces: BTreeMap::new(),
        }
    }

    /// Split a horizontal strip of four square `cell`-sized suit icons.
    pub fn from_suit_sheet(sheet: &Canvas, cell: u32) -> DeckResult<Self> {
        let fits = cell
            .checked_mul(u32::from(Suit::COUNT))
            .is_some_and(|w| w <= sheet.width());
        if cell == 0 || !fits || sheet.height() < cell {
            return Err(DeckError::asset(format!(
                "suit sheet {}x{} cannot hold four {cell}px cells",
                sheet.width(),
                sheet.height()
            )));
        }
        let suits = [
            sheet.crop(0, 0, cell, cell)?,
            sheet.crop(cell, 0, cell, cell)?,
            sheet.crop(2 * cell, 0, cell, cell)?,
            sheet.crop(3 * cell, 0, cell, cell)?,
        ];
        Ok(Self::new(suits))
    }

    /// Register the corner glyph for `value`, normalized to its cell size.
    pub fn with_glyph(
        mut self,
        value: CardValue,
        image: &Canvas,
        adjust: [i32; 2],
    ) -> DeckResult<Self> {
        value.validate()?;
        let (w, h) = match value {
            CardValue::Rank(_) => RANK_GLYPH_CELL,
            CardValue::Special(_) => SPECIAL_GLYPH_CELL,
        };
        let image = image.resized(w, h)?;
        self.glyphs.insert(value, Glyph { image, adjust });
        Ok(self)
    }

    pub fn with_special(mut self, tag: SpecialTag, image: Canvas, size: (u32, u32)) -> Self {
        self.specials.insert(
            tag,
            SizedArt {
                image,
                size,
                offset: [0, 0],
            },
        );
        self
    }

    pub fn with_face(
        mut self,
        suit: Suit,
        rank: u8,
        image: Canvas,
        size: (u32, u32),
        offset: [i32; 2],
    ) -> DeckResult<Self> {
        if !(CardValue::JACK..=CardValue::KING).contains(&rank) {
            return Err(DeckError::invalid_card(format!(
                "face art needs rank 11..=13, got {rank}"
            )));
        }
        self.faces.insert(
            (suit, rank),
            SizedArt {
                image,
                size,
                offset,
            },
        );
        Ok(self)
    }

    pub fn suit(&self, suit: Suit) -> &Canvas {
        &self.suits[usize::from(suit.index())]
    }

    pub fn glyph(&self, value: CardValue) -> DeckResult<&Glyph> {
        self.glyphs
            .get(&value)
            .ok_or_else(|| DeckError::asset(format!("no corner glyph for '{value}'")))
    }

    pub fn special(&self, tag: SpecialTag) -> DeckResult<&SizedArt> {
        self.specials.get(&tag).ok_or_else(|| {
            DeckError::asset(format!("no artwork for special card '{}'", tag.name()))
        })
    }

    /// Face artwork is optional: a face card without it renders its frame and corners only.
    pub fn face(&self, suit: Suit, rank: u8) -> Option<&SizedArt> {
        self.faces.get(&(suit, rank))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
