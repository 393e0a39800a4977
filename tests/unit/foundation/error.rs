use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DeckError::invalid_card("x")
            .to_string()
            .contains("invalid card spec:")
    );
    assert!(
        DeckError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DeckError::asset("x").to_string().contains("asset error:"));
    assert!(DeckError::render("x").to_string().contains("render error:"));
    assert!(
        DeckError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DeckError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
