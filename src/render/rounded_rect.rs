use crate::{
    foundation::core::{PixelBox, PixelPoint, Rgba8},
    foundation::math::lattice_dist,
    render::canvas::Canvas,
};

/// Rounded rectangle outline: inclusive bounding box, corner radius, stroke thickness and color.
///
/// `radius >= thickness / 2` gives a proper ring. Thicker strokes are accepted and turn each corner
/// into a filled quarter disk.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedRectSpec {
    pub bbox: PixelBox,
    pub radius: u32,
    pub thickness: u32,
    pub color: Rgba8,
}

impl RoundedRectSpec {
    /// Straight edge rectangles (top, bottom, left, right), inclusive.
    pub fn edges(&self) -> [PixelBox; 4] {
        let PixelBox { x0, y0, x1, y1 } = self.bbox;
        let (r, t) = (self.radius as i32, self.thickness as i32);
        [
            PixelBox::new(x0 + r, y0, x1 - r, y0 + t),
            PixelBox::new(x0 + r, y1 - t, x1 - r, y1),
            PixelBox::new(x0, y0 + r, x0 + t, y1 - r),
            PixelBox::new(x1 - t, y0 + r, x1, y1 - r),
        ]
    }

    /// Corner squares paired with the arc center each one is measured from.
    ///
    /// Order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [(PixelBox, PixelPoint); 4] {
        let PixelBox { x0, y0, x1, y1 } = self.bbox;
        let r = self.radius as i32;
        [
            (PixelBox::new(x0, y0, x0 + r, y0 + r), PixelPoint::new(x0 + r, y0 + r)),
            (PixelBox::new(x1 - r, y0, x1, y0 + r), PixelPoint::new(x1 - r, y0 + r)),
            (PixelBox::new(x0, y1 - r, x0 + r, y1), PixelPoint::new(x0 + r, y1 - r)),
            (PixelBox::new(x1 - r, y1 - r, x1, y1), PixelPoint::new(x1 - r, y1 - r)),
        ]
    }

    /// Whether a pixel at distance `dist` from an arc center falls inside the stroke band.
    pub fn in_arc_band(&self, dist: f64) -> bool {
        let r = f64::from(self.radius);
        let t = f64::from(self.thickness);
        r - t - 0.5 < dist && dist <= r + 0.5
    }
}

/// Paint the outline described by `spec`.
///
/// Corners use a brute-force distance scan over each corner square rather than a parametric arc,
/// which keeps the stroke width uniform around the curve.
pub fn draw_rounded_rect(canvas: &mut Canvas, spec: &RoundedRectSpec) {
    for edge in spec.edges() {
        canvas.fill_rect(edge, spec.color);
    }
    for (square, center) in spec.corners() {
        for y in square.y0..=square.y1 {
            for x in square.x0..=square.x1 {
                if spec.in_arc_band(lattice_dist(center.x - x, center.y - y)) {
                    canvas.put_pixel(x, y, spec.color);
                }
            }
        }
    }
}

/// Row-major coverage of the filled rounded rectangle `bbox` with corner `radius` on a
/// `width x height` surface.
///
/// A pixel inside a corner square is covered when it lies within `radius + 0.5` of the arc center,
/// the same outer boundary [`draw_rounded_rect`] paints.
pub fn rounded_rect_coverage(width: u32, height: u32, bbox: PixelBox, radius: u32) -> Vec<bool> {
    let r = radius as i32;
    let outer = f64::from(radius) + 0.5;
    let mut out = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if !bbox.contains(PixelPoint::new(x, y)) {
                out.push(false);
                continue;
            }
            let cx = if x < bbox.x0 + r {
                Some(bbox.x0 + r)
            } else if x > bbox.x1 - r {
                Some(bbox.x1 - r)
            } else {
                None
            };
            let cy = if y < bbox.y0 + r {
                Some(bbox.y0 + r)
            } else if y > bbox.y1 - r {
                Some(bbox.y1 - r)
            } else {
                None
            };
            let inside = match (cx, cy) {
                (Some(cx), Some(cy)) => lattice_dist(cx - x, cy - y) <= outer,
                _ => true,
            };
            out.push(inside);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/rounded_rect.rs"]
mod tests;
