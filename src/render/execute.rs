use crate::{
    assets::store::DeckAssets,
    card::model::{CardFaceConfig, FaceStyle},
    compile::plan::{ArtRef, FaceOp, FacePlan, compile_face},
    foundation::core::PixelBox,
    foundation::error::{DeckError, DeckResult},
    render::canvas::Canvas,
    render::corner::{CornerBlock, stamp_corners},
    render::rounded_rect::{draw_rounded_rect, rounded_rect_coverage},
};

/// Paint a [`FacePlan`] onto a fresh canvas.
pub fn execute_plan(plan: &FacePlan, assets: &DeckAssets) -> DeckResult<Canvas> {
    let mut canvas = Canvas::new(plan.width, plan.height, Some(plan.background))?;

    for op in &plan.ops {
        match op {
            FaceOp::Guide(spec) => draw_rounded_rect(&mut canvas, spec),
            FaceOp::Frame {
                rect,
                thickness,
                color,
            } => {
                let PixelBox { x0, y0, x1, y1 } = *rect;
                let t = *thickness;
                for side in [
                    PixelBox::new(x0, y0, x1, y0 + t),
                    PixelBox::new(x0, y1 - t, x1, y1),
                    PixelBox::new(x0, y0, x0 + t, y1),
                    PixelBox::new(x1 - t, y0, x1, y1),
                ] {
                    canvas.fill_rect(side, *color);
                }
            }
            FaceOp::Paste {
                art,
                width,
                height,
                rotated,
                centers,
            } => {
                let icon = art_for(assets, *art)?.resized(*width, *height)?;
                let icon = if *rotated { icon.rotated_180() } else { icon };
                canvas.paste_many(&icon, centers);
            }
            FaceOp::Corners {
                glyph,
                suit,
                style,
                placements,
            } => {
                let glyph = assets.glyph(*glyph)?;
                let suit_art = suit.map(|s| assets.suit(s));
                let block = CornerBlock::build(&glyph.image, suit_art, style)?;
                stamp_corners(&mut canvas, &block, placements)?;
            }
            FaceOp::CutMask { bbox, radius } => {
                let coverage = rounded_rect_coverage(plan.width, plan.height, *bbox, *radius);
                canvas.apply_coverage(&coverage)?;
            }
        }
    }
    Ok(canvas)
}

/// Compile and execute one card face.
///
/// Failures are confined to this card: nothing shared is mutated.
pub fn render_card_face(
    config: &CardFaceConfig,
    style: &FaceStyle,
    assets: &DeckAssets,
) -> DeckResult<Canvas> {
    let plan = compile_face(config, style, assets)?;
    execute_plan(&plan, assets)
}

fn art_for(assets: &DeckAssets, art: ArtRef) -> DeckResult<&Canvas> {
    match art {
        ArtRef::Suit(suit) => Ok(assets.suit(suit)),
        ArtRef::Special(tag) => Ok(&assets.special(tag)?.image),
        ArtRef::Face { suit, rank } => assets.face(suit, rank).map(|a| &a.image).ok_or_else(|| {
            DeckError::asset(format!("no face art for suit {} rank {rank}", suit.index()))
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/execute.rs"]
mod tests;
