use crate::{
    card::model::{CornerMode, CornerStyle},
    foundation::core::PixelPoint,
    foundation::error::{DeckError, DeckResult},
    render::canvas::Canvas,
};

/// Small transparent composite of a value glyph with an optional suit icon beneath it.
///
/// Built once per card; mirrored corners reuse it through [`Canvas::rotated_180`].
#[derive(Clone, Debug, PartialEq)]
pub struct CornerBlock {
    upright: Canvas,
    rotated: Canvas,
}

impl CornerBlock {
    /// Compose `glyph` at the top of the block and `suit_art` (resized to `suit_size`) below it.
    ///
    /// The glyph cell is copied, not blended; the suit icon is pasted with its own alpha.
    pub fn build(
        glyph: &Canvas,
        suit_art: Option<&Canvas>,
        style: &CornerStyle,
    ) -> DeckResult<Self> {
        let mut block = Canvas::transparent(style.block_width, style.block_height)?;

        let glyph_x = (style.block_width / 2) as i32 - (glyph.width() / 2) as i32;
        block.copy_at(glyph, glyph_x, style.glyph_top);

        if let Some(art) = suit_art {
            let small = art.resized(style.suit_size, style.suit_size)?;
            let suit_x = (style.block_width / 2) as i32 - (style.suit_size / 2) as i32;
            block.paste_at(&small, suit_x, style.suit_top);
        }

        let rotated = block.rotated_180();
        Ok(Self {
            upright: block,
            rotated,
        })
    }

    pub fn upright(&self) -> &Canvas {
        &self.upright
    }

    pub fn rotated(&self) -> &Canvas {
        &self.rotated
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.upright.dimensions()
    }
}

/// Where one copy of the corner block lands (its center) and whether it is the rotated copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CornerPlacement {
    pub center: PixelPoint,
    pub rotated: bool,
}

/// Card and safe-area geometry the corner stamps are measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerFrame {
    pub card_width: u32,
    pub card_height: u32,
    pub safe_width: u32,
    pub safe_height: u32,
}

/// Centers for the corner stamps of a `block_w x block_h` block.
///
/// The top-left stamp sits half a block inside the safe area, nudged by the glyph's `adjust`. The
/// bottom-right stamp is its mirror through the card center and uses the rotated block. Four-corner
/// mode adds the top-right (upright) and bottom-left (rotated) stamps so each label reads upright
/// from its own edge.
pub fn corner_placements(
    frame: CornerFrame,
    block: (u32, u32),
    adjust: [i32; 2],
    mode: CornerMode,
) -> Vec<CornerPlacement> {
    let (w, h) = (f64::from(frame.card_width), f64::from(frame.card_height));
    let inset_x = (w - f64::from(frame.safe_width)) / 2.0;
    let inset_y = (h - f64::from(frame.safe_height)) / 2.0;
    let ox = (inset_x + f64::from(block.0 / 2) + f64::from(adjust[0])) as i32;
    let oy = (inset_y + f64::from(block.1 / 2) + f64::from(adjust[1])) as i32;
    let (cw, ch) = (frame.card_width as i32, frame.card_height as i32);

    let at = |x: i32, y: i32, rotated: bool| CornerPlacement {
        center: PixelPoint::new(x, y),
        rotated,
    };
    let mut out = vec![at(ox, oy, false), at(cw - ox, ch - oy, true)];
    if mode == CornerMode::Four {
        out.push(at(cw - ox, oy, false));
        out.push(at(ox, ch - oy, true));
    }
    out
}

/// Paste the block at every placement.
pub fn stamp_corners(
    canvas: &mut Canvas,
    block: &CornerBlock,
    placements: &[CornerPlacement],
) -> DeckResult<()> {
    if placements.is_empty() {
        return Err(DeckError::render("corner stamping needs at least one placement"));
    }
    for p in placements {
        let img = if p.rotated {
            block.rotated()
        } else {
            block.upright()
        };
        canvas.paste_centered(img, p.center.x, p.center.y);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/corner.rs"]
mod tests;
