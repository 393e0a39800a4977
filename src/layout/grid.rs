use crate::foundation::core::{PixelPoint, Point, Rect};

/// Slope used by [`GridLayout::tilt`] when callers ask for the default shear.
pub const DEFAULT_TILT_SLOPE: f64 = 0.15;

/// Smallest and largest pip counts with a layout entry.
pub const MIN_PIPS: usize = 2;
pub const MAX_PIPS: usize = 10;

#[derive(Clone, Copy, Debug)]
struct LayoutRule {
    rows: usize,
    cols: usize,
    /// Vertical ratios (0 = top margin, 1 = bottom margin) of extra points on the center line.
    central: &'static [f64],
}

/// Canonical pip arrangements for 2..=10, indexed by `n - MIN_PIPS`.
const RULES: [LayoutRule; 9] = [
    LayoutRule {
        rows: 2,
        cols: 1,
        central: &[],
    },
    LayoutRule {
        rows: 3,
        cols: 1,
        central: &[],
    },
    LayoutRule {
        rows: 2,
        cols: 2,
        central: &[],
    },
    LayoutRule {
        rows: 2,
        cols: 2,
        central: &[0.5],
    },
    LayoutRule {
        rows: 3,
        cols: 2,
        central: &[],
    },
    LayoutRule {
        rows: 3,
        cols: 2,
        central: &[0.25],
    },
    LayoutRule {
        rows: 3,
        cols: 2,
        central: &[0.25, 0.75],
    },
    LayoutRule {
        rows: 4,
        cols: 2,
        central: &[0.5],
    },
    LayoutRule {
        rows: 4,
        cols: 2,
        central: &[1.0 / 6.0, 5.0 / 6.0],
    },
];

fn rule_for(n: usize) -> Option<LayoutRule> {
    n.checked_sub(MIN_PIPS).and_then(|i| RULES.get(i)).copied()
}

/// Point sets for 2..=10 pips inside a margin-inset area of a `width x height` surface.
///
/// The table is built once and never changes. Counts outside `2..=10` have no entry; a single pip
/// is drawn by the caller as one large centered icon.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    width: f64,
    height: f64,
    area: Rect,
    table: Vec<Vec<PixelPoint>>,
}

impl GridLayout {
    pub fn new(width: u32, height: u32, margin_w: f64, margin_h: f64) -> Self {
        let (width, height) = (f64::from(width), f64::from(height));
        let area = Rect::new(margin_w, margin_h, width - margin_w, height - margin_h);
        let mut out = Self {
            width,
            height,
            area,
            table: Vec::with_capacity(RULES.len()),
        };
        let table = RULES.iter().map(|rule| out.build(rule)).collect();
        out.table = table;
        out
    }

    /// The drawable sub-rectangle between the margins.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Number of points the table holds for `n`, if `n` is supported.
    pub fn expected_len(n: usize) -> Option<usize> {
        rule_for(n).map(|r| r.rows * r.cols + r.central.len())
    }

    pub fn positions(&self, n: usize) -> Option<&[PixelPoint]> {
        n.checked_sub(MIN_PIPS)
            .and_then(|i| self.table.get(i))
            .map(Vec::as_slice)
    }

    /// Positions for `n`, sheared by `slope` when one is given.
    pub fn positions_tilted(&self, n: usize, slope: Option<f64>) -> Option<Vec<PixelPoint>> {
        let base = self.positions(n)?;
        Some(match slope {
            Some(slope) => self.tilt(base, slope),
            None => base.to_vec(),
        })
    }

    /// Shift each point's `y` by `-(x - center_x) * slope`, truncated toward zero.
    pub fn tilt(&self, points: &[PixelPoint], slope: f64) -> Vec<PixelPoint> {
        let cx = self.width / 2.0;
        points
            .iter()
            .map(|p| PixelPoint::new(p.x, p.y - ((f64::from(p.x) - cx) * slope) as i32))
            .collect()
    }

    /// Split points into the upper half (drawn upright) and the lower half (drawn rotated).
    ///
    /// The dividing line leans by 1% of the horizontal offset and sits one pixel below the midline,
    /// so on a center row the left pip stays upright and the right one flips.
    pub fn split_upper_lower(&self, points: &[PixelPoint]) -> (Vec<PixelPoint>, Vec<PixelPoint>) {
        let center = Point::new(self.width / 2.0, self.height / 2.0);
        points.iter().copied().partition(|p| {
            f64::from(p.y) < center.y - 0.01 * (f64::from(p.x) - center.x) + 1.0
        })
    }

    fn build(&self, rule: &LayoutRule) -> Vec<PixelPoint> {
        let mut points = grid(rule.rows, rule.cols, self.area);
        points.extend(rule.central.iter().map(|&ratio| self.central(ratio)));
        points
    }

    fn central(&self, ratio: f64) -> PixelPoint {
        let x = self.width / 2.0;
        let y = self.area.y0 + self.area.height() * ratio;
        PixelPoint::new(x as i32, y as i32)
    }
}

/// `rows x cols` points spread evenly across `area`, row-major, truncated to integers.
///
/// A single column sits on the horizontal center of the area and a single row on its vertical
/// center.
pub fn grid(rows: usize, cols: usize, area: Rect) -> Vec<PixelPoint> {
    let (w, h) = (area.width(), area.height());
    let mut out = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            let x = if cols > 1 {
                area.x0 + (j as f64) * (w / (cols - 1) as f64)
            } else {
                area.x0 + w / 2.0
            };
            let y = if rows > 1 {
                area.y0 + (i as f64) * (h / (rows - 1) as f64)
            } else {
                area.y0 + h / 2.0
            };
            out.push(PixelPoint::new(x as i32, y as i32));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
