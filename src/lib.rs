//! pipdeck renders playing-card faces as straight-alpha RGBA bitmaps.
//!
//! A card is described by a [`CardFaceConfig`] (value, suit, guide flags, corner mode, tilt),
//! styled by a shared [`FaceStyle`] and drawn from read-only [`DeckAssets`]:
//!
//! - [`compile_face`] resolves the config into a pixel-free [`FacePlan`]
//! - [`execute_plan`] paints the plan onto a fresh [`Canvas`]
//! - [`render_card_face`] does both; [`render_deck`] renders the whole deck, optionally on a rayon
//!   pool, and [`tile_sheet`] lays the result out as a contact sheet
#![forbid(unsafe_code)]

pub mod assets;
pub mod card;
pub mod compile;
pub mod foundation;
pub mod layout;
pub mod render;

pub use crate::assets::manifest::DeckManifest;
pub use crate::assets::store::DeckAssets;
pub use crate::card::model::{
    CardFaceConfig, CardValue, CornerMode, CornerStyle, FaceStyle, FrameStyle, GuideStyle, Guides,
    MAX_STYLE_EXTENT, SpecialTag, Suit,
};
pub use crate::compile::plan::{ArtRef, FaceOp, FacePlan, compile_face};
pub use crate::foundation::core::{
    CARD_HEIGHT, CARD_WIDTH, CUT_HEIGHT, CUT_WIDTH, PixelBox, PixelPoint, Point, Rect, Rgba8,
    SAFE_HEIGHT, SAFE_WIDTH,
};
pub use crate::foundation::error::{DeckError, DeckResult};
pub use crate::layout::grid::{DEFAULT_TILT_SLOPE, GridLayout};
pub use crate::render::canvas::Canvas;
pub use crate::render::deck::{
    DeckCard, DeckEntry, DeckRenderOpts, deck_entries, export_dir, render_cards, render_deck,
    tile_sheet,
};
pub use crate::render::execute::{execute_plan, render_card_face};
pub use crate::render::rounded_rect::{RoundedRectSpec, draw_rounded_rect, rounded_rect_coverage};
