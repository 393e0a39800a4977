use super::*;
use crate::card::model::{CornerMode, Guides};
use crate::render::canvas::Canvas;

fn assets() -> DeckAssets {
    let sheet = Canvas::new(16, 4, Some(Rgba8::RED)).unwrap();
    let glyph = Canvas::new(8, 8, Some(Rgba8::BLACK)).unwrap();
    let mut a = DeckAssets::from_suit_sheet(&sheet, 4).unwrap();
    for rank in 1..=13 {
        a = a.with_glyph(CardValue::Rank(rank), &glyph, [0, 0]).unwrap();
    }
    a.with_glyph(CardValue::Rank(7), &glyph, [4, -6])
        .unwrap()
        .with_glyph(CardValue::Special(SpecialTag::Dragon), &glyph, [0, 0])
        .unwrap()
        .with_special(SpecialTag::Dragon, glyph.clone(), (500, 600))
}

fn suit0() -> Suit {
    Suit::new(0).unwrap()
}

fn pastes(plan: &FacePlan) -> Vec<(ArtRef, u32, bool, Vec<PixelPoint>)> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            FaceOp::Paste {
                art,
                width,
                rotated,
                centers,
                ..
            } => Some((*art, *width, *rotated, centers.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn six_splits_into_upright_and_flipped_rows() {
    let plan = compile_face(&CardFaceConfig::ranked(6, suit0()), &FaceStyle::default(), &assets())
        .unwrap();
    let p = pastes(&plan);
    assert_eq!(p.len(), 2);
    assert_eq!(
        p[0],
        (
            ArtRef::Suit(suit0()),
            144,
            false,
            vec![
                PixelPoint::new(280, 280),
                PixelPoint::new(542, 280),
                PixelPoint::new(280, 561),
            ]
        )
    );
    assert_eq!(
        p[1].3,
        vec![
            PixelPoint::new(542, 561),
            PixelPoint::new(280, 842),
            PixelPoint::new(542, 842),
        ]
    );
    assert!(p[1].2);
    assert_eq!(plan.pip_centers().len(), 6);
}

#[test]
fn unflipped_style_keeps_row_major_order() {
    let style = FaceStyle {
        flip_lower_pips: false,
        ..FaceStyle::default()
    };
    let plan = compile_face(&CardFaceConfig::ranked(2, suit0()), &style, &assets()).unwrap();
    assert_eq!(
        plan.pip_centers(),
        vec![PixelPoint::new(411, 280), PixelPoint::new(411, 842)]
    );
}

#[test]
fn tilt_shears_pip_centers() {
    let mut cfg = CardFaceConfig::ranked(6, suit0());
    cfg.tilt = Some(0.15);
    let style = FaceStyle {
        flip_lower_pips: false,
        ..FaceStyle::default()
    };
    let plan = compile_face(&cfg, &style, &assets()).unwrap();
    assert_eq!(plan.pip_centers()[0], PixelPoint::new(280, 299));
    assert_eq!(plan.pip_centers()[1], PixelPoint::new(542, 261));
}

#[test]
fn ace_is_one_large_centered_pip() {
    let plan = compile_face(&CardFaceConfig::ranked(1, suit0()), &FaceStyle::default(), &assets())
        .unwrap();
    assert_eq!(
        pastes(&plan),
        vec![(ArtRef::Suit(suit0()), 336, false, vec![PixelPoint::new(411, 561)])]
    );
}

#[test]
fn guides_come_first_and_cut_mask_last() {
    let mut cfg = CardFaceConfig::ranked(3, suit0());
    cfg.guides = Guides { cut: true, safe: true };
    cfg.cut_mask = true;
    let plan = compile_face(&cfg, &FaceStyle::default(), &assets()).unwrap();

    let FaceOp::Guide(cut) = &plan.ops[0] else {
        panic!("expected cut guide, got {:?}", plan.ops[0]);
    };
    assert_eq!(cut.bbox, PixelBox::new(36, 36, 786, 1086));
    assert_eq!((cut.radius, cut.thickness, cut.color), (50, 5, Rgba8::BLUE));
    let FaceOp::Guide(safe) = &plan.ops[1] else {
        panic!("expected safe guide");
    };
    assert_eq!(safe.bbox, PixelBox::new(72, 72, 750, 1050));
    assert_eq!((safe.radius, safe.thickness, safe.color), (40, 2, Rgba8::RED));
    assert_eq!(
        plan.ops.last(),
        Some(&FaceOp::CutMask {
            bbox: PixelBox::new(36, 36, 786, 1086),
            radius: 50
        })
    );
}

#[test]
fn corners_carry_glyph_adjust_and_mode() {
    let mut cfg = CardFaceConfig::ranked(7, suit0());
    cfg.corners = CornerMode::Two;
    let plan = compile_face(&cfg, &FaceStyle::default(), &assets()).unwrap();
    let corners = plan
        .ops
        .iter()
        .find_map(|op| match op {
            FaceOp::Corners {
                glyph,
                suit,
                placements,
                ..
            } => Some((*glyph, *suit, placements.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(corners.0, CardValue::Rank(7));
    assert_eq!(corners.1, Some(suit0()));
    assert_eq!(corners.2.len(), 2);
    assert_eq!(corners.2[0].center, PixelPoint::new(141, 216));
    assert_eq!(corners.2[1].center, PixelPoint::new(681, 906));
}

#[test]
fn face_card_without_art_is_frame_and_corners() {
    let plan = compile_face(&CardFaceConfig::ranked(12, suit0()), &FaceStyle::default(), &assets())
        .unwrap();
    assert_eq!(
        plan.ops[0],
        FaceOp::Frame {
            rect: PixelBox::new(210, 200, 612, 922),
            thickness: 4,
            color: Rgba8::BLACK
        }
    );
    assert!(pastes(&plan).is_empty());
    assert!(matches!(plan.ops[1], FaceOp::Corners { .. }));
}

#[test]
fn face_card_art_is_offset_from_center() {
    let art = Canvas::new(2, 2, Some(Rgba8::BLUE)).unwrap();
    let a = assets().with_face(suit0(), 11, art, (380, 700), [0, 12]).unwrap();
    let config = CardFaceConfig::ranked(11, suit0());
    let plan = compile_face(&config, &FaceStyle::default(), &a).unwrap();
    assert_eq!(
        pastes(&plan),
        vec![(
            ArtRef::Face {
                suit: suit0(),
                rank: 11
            },
            380,
            false,
            vec![PixelPoint::new(411, 573)]
        )]
    );
}

#[test]
fn special_uses_its_art_and_no_suit() {
    let plan = compile_face(
        &CardFaceConfig::special(SpecialTag::Dragon),
        &FaceStyle::default(),
        &assets(),
    )
    .unwrap();
    assert_eq!(
        pastes(&plan),
        vec![(ArtRef::Special(SpecialTag::Dragon), 500, false, vec![PixelPoint::new(411, 561)])]
    );
    assert!(plan.ops.iter().any(|op| matches!(
        op,
        FaceOp::Corners {
            suit: None,
            glyph: CardValue::Special(SpecialTag::Dragon),
            ..
        }
    )));
}

#[test]
fn missing_art_and_bad_configs_fail() {
    let style = FaceStyle::default();
    let err = compile_face(&CardFaceConfig::special(SpecialTag::Phoenix), &style, &assets())
        .unwrap_err();
    assert!(matches!(err, DeckError::Asset(_)));

    let mut cfg = CardFaceConfig::ranked(5, suit0());
    cfg.suit = None;
    let err = compile_face(&cfg, &style, &assets()).unwrap_err();
    assert!(matches!(err, DeckError::InvalidCardSpec(_)));

    let cfg = CardFaceConfig::ranked(14, suit0());
    assert!(matches!(
        compile_face(&cfg, &style, &assets()).unwrap_err(),
        DeckError::InvalidCardSpec(_)
    ));
}

#[test]
fn oversized_guide_radius_is_rejected_before_planning() {
    let mut style = FaceStyle::default();
    style.cut_guide.radius = u32::MAX;
    let mut config = CardFaceConfig::ranked(6, suit0());
    config.guides = Guides::parse("c").unwrap();
    let err = compile_face(&config, &style, &assets()).unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)), "{err}");
}
