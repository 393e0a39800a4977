use pipdeck::{CardFaceConfig, DeckAssets, FaceStyle, Guides, compile_face, deck_entries};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let manifest = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: plan_dump <deck.json>"))?;
    let assets = DeckAssets::load(&manifest)?;
    let style = FaceStyle::default();

    for entry in deck_entries(&Default::default()) {
        match compile_face(&entry.config, &style, &assets) {
            Ok(plan) => println!("{}: {} ops", entry.name, plan.ops.len()),
            Err(e) => println!("{}: {e}", entry.name),
        }
    }

    let mut six = CardFaceConfig::ranked(6, pipdeck::Suit::new(0)?);
    six.guides = Guides::parse("cs")?;
    let plan = compile_face(&six, &style, &assets)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
