use super::*;

#[test]
fn suit_range_is_enforced() {
    assert_eq!(Suit::new(3).unwrap().name(), "gem");
    assert!(matches!(Suit::new(4), Err(DeckError::InvalidCardSpec(_))));
    assert!(serde_json::from_str::<Suit>("7").is_err());
}

#[test]
fn card_values_parse_from_labels() {
    assert_eq!(CardValue::parse("A").unwrap(), CardValue::Rank(1));
    assert_eq!(CardValue::parse("10").unwrap(), CardValue::Rank(10));
    assert_eq!(CardValue::parse("q").unwrap(), CardValue::Rank(12));
    assert_eq!(
        CardValue::parse("O").unwrap(),
        CardValue::Special(SpecialTag::Dog)
    );
    assert!(matches!(
        CardValue::parse("0"),
        Err(DeckError::InvalidCardSpec(_))
    ));
    assert!(CardValue::parse("14").is_err());
    assert!(CardValue::parse("PP").is_err());
    assert!(CardValue::parse("X").is_err());
}

#[test]
fn card_values_display_as_corner_labels() {
    let labels: Vec<String> = (1..=13).map(|n| CardValue::Rank(n).to_string()).collect();
    assert_eq!(
        labels,
        ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
    );
    assert_eq!(CardValue::Special(SpecialTag::Mahjong).to_string(), "M");
}

#[test]
fn config_json_accepts_numbers_and_special_codes() {
    let c: CardFaceConfig =
        serde_json::from_str(r#"{ "value": 6, "suit": 0, "guides": { "cut": true } }"#).unwrap();
    assert_eq!(c.value, CardValue::Rank(6));
    assert_eq!(c.suit, Some(Suit::new(0).unwrap()));
    assert!(c.guides.cut && !c.guides.safe);
    assert_eq!(c.corners, CornerMode::Four);
    c.validate().unwrap();

    let s: CardFaceConfig =
        serde_json::from_str(r#"{ "value": "P", "corners": "two" }"#).unwrap();
    assert_eq!(s.value, CardValue::Special(SpecialTag::Phoenix));
    assert_eq!(s.corners, CornerMode::Two);
    s.validate().unwrap();
}

#[test]
fn config_validation_fails_fast() {
    let mut c = CardFaceConfig::ranked(14, Suit::new(0).unwrap());
    assert!(matches!(c.validate(), Err(DeckError::InvalidCardSpec(_))));

    c.value = CardValue::Rank(5);
    c.suit = None;
    assert!(matches!(c.validate(), Err(DeckError::InvalidCardSpec(_))));

    let mut s = CardFaceConfig::special(SpecialTag::Dragon);
    s.suit = Some(Suit::new(1).unwrap());
    assert!(matches!(s.validate(), Err(DeckError::InvalidCardSpec(_))));

    let mut t = CardFaceConfig::ranked(5, Suit::new(1).unwrap());
    t.tilt = Some(f64::NAN);
    assert!(matches!(t.validate(), Err(DeckError::Validation(_))));
}

#[test]
fn guide_flags_parse() {
    assert_eq!(
        Guides::parse("CS").unwrap(),
        Guides {
            cut: true,
            safe: true
        }
    );
    assert_eq!(Guides::parse("").unwrap(), Guides::NONE);
    assert!(Guides::parse("CX").is_err());
}

#[test]
fn default_style_matches_the_deck_constants() {
    let style = FaceStyle::default();
    assert_eq!(style.pip_size, 144);
    assert_eq!(style.ace_size, 336);
    assert_eq!(style.corner.block_width, 130);
    assert_eq!(style.corner.block_height, 300);
    assert_eq!(style.cut_guide.radius, 50);
    assert_eq!(style.safe_guide.thickness, 2);

    let partial: FaceStyle = serde_json::from_str(r#"{ "pip_size": 168 }"#).unwrap();
    assert_eq!(partial.pip_size, 168);
    assert_eq!(partial.grid_margin, [280.0, 280.0]);
}

#[test]
fn partial_guides_keep_their_own_defaults() {
    let style: FaceStyle = serde_json::from_str(
        r##"{ "cut_guide": { "radius": 40 }, "safe_guide": { "color": "#00ff00ff" } }"##,
    )
    .unwrap();
    assert_eq!(
        style.cut_guide,
        GuideStyle {
            radius: 40,
            thickness: 5,
            color: Rgba8::BLUE
        }
    );
    assert_eq!(
        style.safe_guide,
        GuideStyle {
            radius: 40,
            thickness: 2,
            color: Rgba8::opaque(0, 255, 0)
        }
    );

    let safe_only: FaceStyle =
        serde_json::from_str(r#"{ "safe_guide": { "thickness": 3 } }"#).unwrap();
    assert_eq!(safe_only.cut_guide, GuideStyle::CUT);
    assert_eq!(safe_only.safe_guide.thickness, 3);
    assert_eq!(safe_only.safe_guide.radius, 40);
}

#[test]
fn style_validation_bounds_guide_geometry() {
    FaceStyle::default().validate().unwrap();

    let mut s = FaceStyle::default();
    s.cut_guide.radius = u32::MAX;
    assert!(matches!(s.validate(), Err(DeckError::Validation(_))));

    let mut s = FaceStyle::default();
    s.safe_guide.thickness = MAX_STYLE_EXTENT + 1;
    assert!(matches!(s.validate(), Err(DeckError::Validation(_))));

    let mut s = FaceStyle::default();
    s.face_frame.thickness = -1;
    assert!(s.validate().is_err());

    let mut s = FaceStyle::default();
    s.grid_margin = [f64::INFINITY, 280.0];
    assert!(s.validate().is_err());

    let mut s = FaceStyle::default();
    s.cut_guide.radius = MAX_STYLE_EXTENT;
    s.validate().unwrap();
}
