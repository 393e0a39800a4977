use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage, imageops};

use crate::{
    foundation::core::{PixelBox, PixelPoint, Rgba8},
    foundation::error::{DeckError, DeckResult},
    render::composite::{self, StraightRgba8},
};

/// Addressable straight-alpha RGBA8 surface.
///
/// Dimensions are fixed at creation. Every paint operation clips to the surface bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// New canvas filled with `background`, or fully transparent when `None`.
    pub fn new(width: u32, height: u32, background: Option<Rgba8>) -> DeckResult<Self> {
        if width == 0 || height == 0 {
            return Err(DeckError::validation(format!(
                "canvas dimensions must be > 0, got {width}x{height}"
            )));
        }
        let fill = background.unwrap_or(Rgba8::TRANSPARENT);
        Ok(Self {
            img: RgbaImage::from_pixel(width, height, Rgba(fill.to_array())),
        })
    }

    pub fn transparent(width: u32, height: u32) -> DeckResult<Self> {
        Self::new(width, height, None)
    }

    pub fn from_rgba_image(img: RgbaImage) -> DeckResult<Self> {
        if img.width() == 0 || img.height() == 0 {
            return Err(DeckError::validation("canvas image must not be empty"));
        }
        Ok(Self { img })
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        let (x, y) = self.index(x, y)?;
        Some(Rgba8::from_array(self.img.get_pixel(x, y).0))
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some((x, y)) = self.index(x, y) {
            self.img.put_pixel(x, y, Rgba(color.to_array()));
        }
    }

    /// Opaque fill of the inclusive box `b`.
    pub fn fill_rect(&mut self, b: PixelBox, color: Rgba8) {
        let Some((x0, y0, x1, y1)) = self.clip(b.x0, b.y0, b.x1, b.y1) else {
            return;
        };
        let px = Rgba(color.to_array());
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.img.put_pixel(x, y, px);
            }
        }
    }

    /// Composite `icon` with its top-left at `(x, y)`, using the icon's alpha as its own mask.
    pub fn paste_at(&mut self, icon: &Canvas, x: i32, y: i32) {
        self.blit(icon, x, y, composite::over);
    }

    /// Replace pixels with `icon` (including alpha) with its top-left at `(x, y)`.
    pub fn copy_at(&mut self, icon: &Canvas, x: i32, y: i32) {
        self.blit(icon, x, y, |_, src| src);
    }

    /// Composite `icon` centered on `(cx, cy)`.
    ///
    /// The top-left is `(cx - w/2, cy - h/2)` with integer division, so odd-sized icons sit half a
    /// pixel up and left of the true center.
    pub fn paste_centered(&mut self, icon: &Canvas, cx: i32, cy: i32) {
        let (x, y) = centered_origin(icon, cx, cy);
        self.paste_at(icon, x, y);
    }

    pub fn paste_many(&mut self, icon: &Canvas, positions: &[PixelPoint]) {
        for p in positions {
            self.paste_centered(icon, p.x, p.y);
        }
    }

    /// Point reflection of the whole surface: pixel `(x, y)` moves to `(w-1-x, h-1-y)`.
    pub fn rotated_180(&self) -> Canvas {
        Self {
            img: imageops::rotate180(&self.img),
        }
    }

    /// Lanczos3 resample to `width x height`. Same-size requests return an exact copy.
    pub fn resized(&self, width: u32, height: u32) -> DeckResult<Canvas> {
        if width == 0 || height == 0 {
            return Err(DeckError::validation(format!(
                "resize target must be > 0, got {width}x{height}"
            )));
        }
        if self.dimensions() == (width, height) {
            return Ok(self.clone());
        }
        Ok(Self {
            img: imageops::resize(&self.img, width, height, imageops::FilterType::Lanczos3),
        })
    }

    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> DeckResult<Canvas> {
        let fits = x.checked_add(width).is_some_and(|r| r <= self.width())
            && y.checked_add(height).is_some_and(|b| b <= self.height());
        if width == 0 || height == 0 || !fits {
            return Err(DeckError::validation(format!(
                "crop {width}x{height}+{x}+{y} is outside {}x{} canvas",
                self.width(),
                self.height()
            )));
        }
        Ok(Self {
            img: imageops::crop_imm(&self.img, x, y, width, height).to_image(),
        })
    }

    /// Clear every pixel whose coverage entry is `false`. `coverage` is row-major, one per pixel.
    pub fn apply_coverage(&mut self, coverage: &[bool]) -> DeckResult<()> {
        let expected = (self.width() as usize) * (self.height() as usize);
        if coverage.len() != expected {
            return Err(DeckError::render(format!(
                "coverage mask has {} entries, canvas has {expected} pixels",
                coverage.len()
            )));
        }
        composite::clear_uncovered_in_place(&mut self.img, coverage);
        Ok(())
    }

    /// Row-major straight RGBA8 bytes.
    pub fn to_pixel_buffer(&self) -> &[u8] {
        self.img.as_raw()
    }

    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        self.img
    }

    pub fn save_png(&self, path: &Path) -> DeckResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.img
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    fn clip(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(u32, u32, u32, u32)> {
        let max_x = i64::from(self.width()) - 1;
        let max_y = i64::from(self.height()) - 1;
        let x0 = i64::from(x0).max(0);
        let y0 = i64::from(y0).max(0);
        let x1 = i64::from(x1).min(max_x);
        let y1 = i64::from(y1).min(max_y);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn blit(
        &mut self,
        icon: &Canvas,
        x: i32,
        y: i32,
        op: impl Fn(StraightRgba8, StraightRgba8) -> StraightRgba8,
    ) {
        let right = i64::from(x) + i64::from(icon.width()) - 1;
        let bottom = i64::from(y) + i64::from(icon.height()) - 1;
        let (Ok(right), Ok(bottom)) = (i32::try_from(right), i32::try_from(bottom)) else {
            return;
        };
        let Some((x0, y0, x1, y1)) = self.clip(x, y, right, bottom) else {
            return;
        };
        for dy in y0..=y1 {
            for dx in x0..=x1 {
                let sx = (i64::from(dx) - i64::from(x)) as u32;
                let sy = (i64::from(dy) - i64::from(y)) as u32;
                let src = icon.img.get_pixel(sx, sy).0;
                let dst = self.img.get_pixel_mut(dx, dy);
                dst.0 = op(dst.0, src);
            }
        }
    }
}

fn centered_origin(icon: &Canvas, cx: i32, cy: i32) -> (i32, i32) {
    let half_w = (icon.width() / 2) as i32;
    let half_h = (icon.height() / 2) as i32;
    (cx - half_w, cy - half_h)
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
