use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    assets::store::DeckAssets,
    card::model::{CardFaceConfig, CardValue, CornerMode, FaceStyle, Guides, SpecialTag, Suit},
    foundation::error::{DeckError, DeckResult},
    render::canvas::Canvas,
    render::execute::render_card_face,
};

/// Columns and rows of the contact sheet.
pub const SHEET_COLUMNS: u32 = 13;
pub const SHEET_ROWS: u32 = 5;

/// One card of the deck before rendering: its file name, sheet cell and face config.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckEntry {
    pub name: String,
    pub column: u32,
    pub row: u32,
    pub config: CardFaceConfig,
}

/// A rendered card and the sheet cell it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckCard {
    pub name: String,
    pub column: u32,
    pub row: u32,
    pub canvas: Canvas,
}

/// Per-deck settings applied to every card.
#[derive(Clone, Debug)]
pub struct DeckRenderOpts {
    pub guides: Guides,
    pub corners: CornerMode,
    pub tilt: Option<f64>,
    pub cut_mask: bool,
    /// Render cards on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for DeckRenderOpts {
    fn default() -> Self {
        Self {
            guides: Guides::NONE,
            corners: CornerMode::Four,
            tilt: None,
            cut_mask: false,
            parallel: false,
            threads: None,
        }
    }
}

/// The full deck in sheet order: specials across the top row, then one row per suit from ace to
/// king.
pub fn deck_entries(opts: &DeckRenderOpts) -> Vec<DeckEntry> {
    let apply = |mut config: CardFaceConfig| {
        config.guides = opts.guides;
        config.corners = opts.corners;
        config.tilt = opts.tilt;
        config.cut_mask = opts.cut_mask;
        config
    };

    let mut out = Vec::with_capacity(SpecialTag::ALL.len() + 4 * 13);
    for (i, tag) in SpecialTag::ALL.into_iter().enumerate() {
        out.push(DeckEntry {
            name: tag.name().to_owned(),
            column: i as u32 + 1,
            row: 0,
            config: apply(CardFaceConfig::special(tag)),
        });
    }
    for suit in Suit::all() {
        for rank in CardValue::ACE..=CardValue::KING {
            out.push(DeckEntry {
                name: card_name(suit, rank),
                column: u32::from(rank) - 1,
                row: u32::from(suit.index()) + 1,
                config: apply(CardFaceConfig::ranked(rank, suit)),
            });
        }
    }
    out
}

/// File stem for a ranked card, e.g. `starA` or `gem12`.
pub fn card_name(suit: Suit, rank: u8) -> String {
    if rank == CardValue::ACE {
        format!("{}A", suit.name())
    } else {
        format!("{}{rank}", suit.name())
    }
}

/// Render every card of the deck.
pub fn render_deck(
    assets: &DeckAssets,
    style: &FaceStyle,
    opts: &DeckRenderOpts,
) -> DeckResult<Vec<DeckCard>> {
    render_cards(&deck_entries(opts), assets, style, opts)
}

/// Render `entries` in order. The first failing card aborts the batch with its error.
#[tracing::instrument(skip_all, fields(cards = entries.len(), parallel = opts.parallel))]
pub fn render_cards(
    entries: &[DeckEntry],
    assets: &DeckAssets,
    style: &FaceStyle,
    opts: &DeckRenderOpts,
) -> DeckResult<Vec<DeckCard>> {
    let render_one = |entry: &DeckEntry| -> DeckResult<DeckCard> {
        tracing::debug!(card = %entry.name, "render card");
        let canvas = render_card_face(&entry.config, style, assets)
            .map_err(|e| annotate(&entry.name, e))?;
        Ok(DeckCard {
            name: entry.name.clone(),
            column: entry.column,
            row: entry.row,
            canvas,
        })
    };

    if !opts.parallel {
        return entries.iter().map(render_one).collect();
    }

    let pool = build_thread_pool(opts.threads)?;
    let rendered = pool.install(|| entries.par_iter().map(render_one).collect::<Vec<_>>());
    rendered.into_iter().collect()
}

/// Lay cards out on a 13x5 sheet.
///
/// Each cell is the card size grown by `spacing` on every side; a negative spacing overlaps the
/// bleed of neighbouring cards. Cards are pasted with their own alpha, in order.
pub fn tile_sheet(cards: &[DeckCard], spacing: i32) -> DeckResult<Canvas> {
    let first = cards
        .first()
        .ok_or_else(|| DeckError::validation("contact sheet needs at least one card"))?;
    let (w, h) = first.canvas.dimensions();
    let cell_w = i64::from(w) + 2 * i64::from(spacing);
    let cell_h = i64::from(h) + 2 * i64::from(spacing);
    if cell_w <= 0 || cell_h <= 0 {
        return Err(DeckError::validation(format!(
            "spacing {spacing} leaves no room for {w}x{h} cards"
        )));
    }
    let sheet_w = u32::try_from(cell_w * i64::from(SHEET_COLUMNS))
        .map_err(|_| DeckError::validation("contact sheet is too wide"))?;
    let sheet_h = u32::try_from(cell_h * i64::from(SHEET_ROWS))
        .map_err(|_| DeckError::validation("contact sheet is too tall"))?;

    let mut sheet = Canvas::transparent(sheet_w, sheet_h)?;
    for card in cards {
        if card.canvas.dimensions() != (w, h) {
            return Err(DeckError::validation(format!(
                "card '{}' is {:?}, expected {w}x{h}",
                card.name,
                card.canvas.dimensions()
            )));
        }
        if card.column >= SHEET_COLUMNS || card.row >= SHEET_ROWS {
            return Err(DeckError::validation(format!(
                "card '{}' cell ({}, {}) is outside the {SHEET_COLUMNS}x{SHEET_ROWS} sheet",
                card.name, card.column, card.row
            )));
        }
        let x = i64::from(card.column) * cell_w + i64::from(spacing);
        let y = i64::from(card.row) * cell_h + i64::from(spacing);
        sheet.paste_at(&card.canvas, x as i32, y as i32);
    }
    Ok(sheet)
}

/// Write `<dir>/<name>.png` for every card and return the written paths.
pub fn export_dir(cards: &[DeckCard], dir: &Path) -> DeckResult<Vec<PathBuf>> {
    let mut out = Vec::with_capacity(cards.len());
    for card in cards {
        let path = dir.join(format!("{}.png", card.name));
        card.canvas.save_png(&path)?;
        out.push(path);
    }
    Ok(out)
}

fn annotate(name: &str, err: DeckError) -> DeckError {
    match err {
        DeckError::InvalidCardSpec(m) => DeckError::InvalidCardSpec(format!("{name}: {m}")),
        DeckError::Validation(m) => DeckError::Validation(format!("{name}: {m}")),
        DeckError::Asset(m) => DeckError::Asset(format!("{name}: {m}")),
        DeckError::Render(m) => DeckError::Render(format!("{name}: {m}")),
        DeckError::Serde(m) => DeckError::Serde(format!("{name}: {m}")),
        DeckError::Other(e) => DeckError::Other(e.context(format!("card '{name}'"))),
    }
}

fn build_thread_pool(threads: Option<usize>) -> DeckResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DeckError::validation(
            "deck threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DeckError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/deck.rs"]
mod tests;
