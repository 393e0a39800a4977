use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{DeckError, DeckResult},
    foundation::math::unpremultiply_u8,
    render::canvas::Canvas,
};

/// Decode encoded raster bytes (PNG, JPEG, ...) into a straight-alpha canvas.
pub fn decode_image(bytes: &[u8]) -> DeckResult<Canvas> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Canvas::from_rgba_image(dyn_img.to_rgba8())
}

/// Parse SVG bytes with fonts from the system and from `<root>/fonts`.
pub fn parse_svg(bytes: &[u8], root: Option<&Path>) -> DeckResult<usvg::Tree> {
    let opts = usvg::Options {
        resources_dir: root.map(Path::to_path_buf),
        fontdb: build_svg_fontdb(root),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize an SVG tree at its intrinsic size, or stretched to `size` when given.
pub fn rasterize_svg(tree: &usvg::Tree, size: Option<(u32, u32)>) -> DeckResult<Canvas> {
    let (width, height) = match size {
        Some(wh) => wh,
        None => {
            let s = tree.size();
            (to_px(s.width())?, to_px(s.height())?)
        }
    };
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DeckError::asset("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut rgba = pixmap.take();
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = unpremultiply_u8(px[0], a);
        px[1] = unpremultiply_u8(px[1], a);
        px[2] = unpremultiply_u8(px[2], a);
    }
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| DeckError::asset("svg pixmap size mismatch"))?;
    Canvas::from_rgba_image(img)
}

/// Load artwork from disk, picking the decoder from the file extension.
pub fn load_art(path: &Path) -> DeckResult<Canvas> {
    let bytes = std::fs::read(path)
        .map_err(|e| DeckError::asset(format!("read '{}': {e}", path.display())))?;
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    let decoded = if is_svg {
        let tree = parse_svg(&bytes, path.parent())?;
        rasterize_svg(&tree, None)
    } else {
        decode_image(&bytes)
    };
    decoded.map_err(|e| DeckError::asset(format!("'{}': {e}", path.display())))
}

fn to_px(v: f32) -> DeckResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(DeckError::asset("svg has invalid width/height"));
    }
    Ok((v.ceil() as u32).max(1))
}

fn build_svg_fontdb(root: Option<&Path>) -> std::sync::Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = root {
        db.load_fonts_dir(dir.join("fonts"));
    }
    std::sync::Arc::new(db)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
