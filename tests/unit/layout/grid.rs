use super::*;
use crate::foundation::core::{CARD_HEIGHT, CARD_WIDTH};

fn card_layout() -> GridLayout {
    GridLayout::new(CARD_WIDTH, CARD_HEIGHT, 280.0, 280.0)
}

fn p(x: i32, y: i32) -> PixelPoint {
    PixelPoint::new(x, y)
}

#[test]
fn every_supported_count_has_documented_length_inside_area() {
    let layout = card_layout();
    let area = layout.area();
    let expected = [2, 3, 4, 5, 6, 7, 8, 9, 10];
    for (n, want) in (MIN_PIPS..=MAX_PIPS).zip(expected) {
        let points = layout.positions(n).unwrap();
        assert_eq!(points.len(), want, "n={n}");
        assert_eq!(GridLayout::expected_len(n), Some(want));
        for pt in points {
            let (x, y) = (f64::from(pt.x), f64::from(pt.y));
            assert!(x >= area.x0 && x <= area.x1, "n={n} {pt:?}");
            assert!(y >= area.y0 && y <= area.y1, "n={n} {pt:?}");
        }
    }
}

#[test]
fn unsupported_counts_have_no_entry() {
    let layout = card_layout();
    for n in [0, 1, 11, 52] {
        assert!(layout.positions(n).is_none());
        assert!(layout.positions_tilted(n, Some(0.15)).is_none());
        assert_eq!(GridLayout::expected_len(n), None);
    }
}

#[test]
fn canonical_table_coordinates() {
    let layout = card_layout();
    assert_eq!(layout.positions(2).unwrap(), &[p(411, 280), p(411, 842)]);
    assert_eq!(
        layout.positions(3).unwrap(),
        &[p(411, 280), p(411, 561), p(411, 842)]
    );
    assert_eq!(
        layout.positions(6).unwrap(),
        &[
            p(280, 280),
            p(542, 280),
            p(280, 561),
            p(542, 561),
            p(280, 842),
            p(542, 842)
        ]
    );
    assert_eq!(layout.positions(7).unwrap()[6], p(411, 420));
    assert_eq!(
        layout.positions(10).unwrap(),
        &[
            p(280, 280),
            p(542, 280),
            p(280, 467),
            p(542, 467),
            p(280, 654),
            p(542, 654),
            p(280, 842),
            p(542, 842),
            p(411, 373),
            p(411, 748)
        ]
    );
}

#[test]
fn central_points_follow_the_grid() {
    let layout = card_layout();
    let five = layout.positions(5).unwrap();
    assert_eq!(&five[..4], layout.positions(4).unwrap());
    assert_eq!(five[4], p(411, 561));
    let eight = layout.positions(8).unwrap();
    assert_eq!(&eight[6..], &[p(411, 420), p(411, 701)]);
}

#[test]
fn tilt_with_zero_slope_is_identity() {
    let layout = card_layout();
    for n in MIN_PIPS..=MAX_PIPS {
        let points = layout.positions(n).unwrap();
        assert_eq!(layout.tilt(points, 0.0), points);
        assert_eq!(layout.positions_tilted(n, None).unwrap(), points);
    }
}

#[test]
fn tilt_truncates_toward_zero() {
    let layout = card_layout();
    let tilted = layout.positions_tilted(6, Some(DEFAULT_TILT_SLOPE)).unwrap();
    assert_eq!(
        tilted,
        vec![
            p(280, 299),
            p(542, 261),
            p(280, 580),
            p(542, 542),
            p(280, 861),
            p(542, 823)
        ]
    );
    // Points on the center line never move.
    assert_eq!(layout.tilt(&[p(411, 500)], 3.0), vec![p(411, 500)]);
}

#[test]
fn split_sends_top_half_upright() {
    let layout = card_layout();
    let (upper, lower) = layout.split_upper_lower(layout.positions(10).unwrap());
    assert_eq!(
        upper,
        vec![p(280, 280), p(542, 280), p(280, 467), p(542, 467), p(411, 373)]
    );
    assert_eq!(lower.len(), 5);

    let (upper, lower) = layout.split_upper_lower(layout.positions(3).unwrap());
    assert_eq!(upper, vec![p(411, 280), p(411, 561)]);
    assert_eq!(lower, vec![p(411, 842)]);
}

#[test]
fn single_row_and_column_use_area_center() {
    let area = Rect::new(10.0, 20.0, 30.0, 60.0);
    assert_eq!(grid(1, 1, area), vec![p(20, 40)]);
    assert_eq!(grid(1, 3, area), vec![p(10, 40), p(20, 40), p(30, 40)]);
}
