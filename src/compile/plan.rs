use crate::{
    assets::store::DeckAssets,
    card::model::{CardFaceConfig, CardValue, CornerStyle, FaceStyle, SpecialTag, Suit},
    foundation::core::{
        CARD_HEIGHT, CARD_WIDTH, CUT_HEIGHT, CUT_WIDTH, PixelBox, PixelPoint, Rgba8, SAFE_HEIGHT,
        SAFE_WIDTH,
    },
    foundation::error::{DeckError, DeckResult},
    layout::grid::GridLayout,
    render::corner::{CornerFrame, CornerPlacement, corner_placements},
    render::rounded_rect::RoundedRectSpec,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which piece of [`DeckAssets`] artwork a paste draws.
pub enum ArtRef {
    Suit(Suit),
    Special(SpecialTag),
    Face { suit: Suit, rank: u8 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One paint step of a [`FacePlan`], executed in order.
pub enum FaceOp {
    /// Rounded print guide.
    Guide(RoundedRectSpec),
    /// Square frame of `thickness` drawn just inside the inclusive box `rect`.
    Frame {
        rect: PixelBox,
        thickness: i32,
        color: Rgba8,
    },
    /// Resize `art` to `width x height`, optionally turn it half way, and paste it centered on each
    /// point.
    Paste {
        art: ArtRef,
        width: u32,
        height: u32,
        rotated: bool,
        centers: Vec<PixelPoint>,
    },
    /// Corner label block for `glyph` (with the suit icon when `suit` is set) stamped at each
    /// placement.
    Corners {
        glyph: CardValue,
        suit: Option<Suit>,
        style: CornerStyle,
        placements: Vec<CornerPlacement>,
    },
    /// Clear everything outside the filled rounded rectangle.
    CutMask { bbox: PixelBox, radius: u32 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Pixel-free description of one card face.
///
/// Produced by [`compile_face`] and turned into pixels by
/// [`execute_plan`](crate::render::execute::execute_plan).
pub struct FacePlan {
    pub width: u32,
    pub height: u32,
    pub background: Rgba8,
    pub ops: Vec<FaceOp>,
}

impl FacePlan {
    /// Every center used by suit pips, in draw order.
    pub fn pip_centers(&self) -> Vec<PixelPoint> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                FaceOp::Paste {
                    art: ArtRef::Suit(_),
                    centers,
                    ..
                } => Some(centers.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

/// Resolve a card config into a [`FacePlan`].
///
/// Draw order: guides, body (pips, face frame and art, or special art), corner labels, cut mask.
/// Required artwork is looked up here so a missing glyph fails before any pixels are produced.
#[tracing::instrument(skip(style, assets), fields(value = %config.value))]
pub fn compile_face(
    config: &CardFaceConfig,
    style: &FaceStyle,
    assets: &DeckAssets,
) -> DeckResult<FacePlan> {
    config.validate()?;
    style.validate()?;

    let (w, h) = (CARD_WIDTH, CARD_HEIGHT);
    let center = PixelPoint::new((w / 2) as i32, (h / 2) as i32);
    let cut_box = PixelBox::centered(w, h, CUT_WIDTH, CUT_HEIGHT);
    let mut ops = Vec::new();

    if config.guides.cut {
        ops.push(FaceOp::Guide(RoundedRectSpec {
            bbox: cut_box,
            radius: style.cut_guide.radius,
            thickness: style.cut_guide.thickness,
            color: style.cut_guide.color,
        }));
    }
    if config.guides.safe {
        ops.push(FaceOp::Guide(RoundedRectSpec {
            bbox: PixelBox::centered(w, h, SAFE_WIDTH, SAFE_HEIGHT),
            radius: style.safe_guide.radius,
            thickness: style.safe_guide.thickness,
            color: style.safe_guide.color,
        }));
    }

    match (config.value, config.suit) {
        (CardValue::Rank(CardValue::ACE), Some(suit)) => ops.push(FaceOp::Paste {
            art: ArtRef::Suit(suit),
            width: style.ace_size,
            height: style.ace_size,
            rotated: false,
            centers: vec![center],
        }),
        (CardValue::Rank(rank), Some(suit)) if !config.value.is_face() => {
            pip_ops(&mut ops, usize::from(rank), suit, config.tilt, style)?;
        }
        (CardValue::Rank(rank), Some(suit)) => {
            let f = style.face_frame;
            ops.push(FaceOp::Frame {
                rect: PixelBox::new(
                    f.inset_x,
                    f.inset_y,
                    w as i32 - f.inset_x,
                    h as i32 - f.inset_y,
                ),
                thickness: f.thickness,
                color: f.color,
            });
            match assets.face(suit, rank) {
                Some(art) => ops.push(FaceOp::Paste {
                    art: ArtRef::Face { suit, rank },
                    width: art.size.0,
                    height: art.size.1,
                    rotated: false,
                    centers: vec![PixelPoint::new(
                        center.x + art.offset[0],
                        center.y + art.offset[1],
                    )],
                }),
                None => tracing::debug!(suit = suit.index(), rank, "no face art, frame only"),
            }
        }
        (CardValue::Special(tag), None) => {
            let art = assets.special(tag)?;
            ops.push(FaceOp::Paste {
                art: ArtRef::Special(tag),
                width: art.size.0,
                height: art.size.1,
                rotated: false,
                centers: vec![center],
            });
        }
        // Ruled out by `validate`.
        (value, suit) => {
            return Err(DeckError::invalid_card(format!(
                "value '{value}' with suit {suit:?}"
            )));
        }
    }

    let glyph = assets.glyph(config.value)?;
    let frame = CornerFrame {
        card_width: w,
        card_height: h,
        safe_width: SAFE_WIDTH,
        safe_height: SAFE_HEIGHT,
    };
    let block = (style.corner.block_width, style.corner.block_height);
    ops.push(FaceOp::Corners {
        glyph: config.value,
        suit: config.suit,
        style: style.corner,
        placements: corner_placements(frame, block, glyph.adjust, config.corners),
    });

    if config.cut_mask {
        ops.push(FaceOp::CutMask {
            bbox: cut_box,
            radius: style.cut_guide.radius,
        });
    }

    Ok(FacePlan {
        width: w,
        height: h,
        background: style.background,
        ops,
    })
}

fn pip_ops(
    ops: &mut Vec<FaceOp>,
    count: usize,
    suit: Suit,
    tilt: Option<f64>,
    style: &FaceStyle,
) -> DeckResult<()> {
    let layout = GridLayout::new(
        CARD_WIDTH,
        CARD_HEIGHT,
        style.grid_margin[0],
        style.grid_margin[1],
    );
    let points = layout
        .positions_tilted(count, tilt)
        .ok_or_else(|| DeckError::invalid_card(format!("no pip layout for {count} pips")))?;

    let paste = |rotated: bool, centers: Vec<PixelPoint>| FaceOp::Paste {
        art: ArtRef::Suit(suit),
        width: style.pip_size,
        height: style.pip_size,
        rotated,
        centers,
    };
    if style.flip_lower_pips {
        let (upper, lower) = layout.split_upper_lower(&points);
        ops.push(paste(false, upper));
        if !lower.is_empty() {
            ops.push(paste(true, lower));
        }
    } else {
        ops.push(paste(false, points));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
