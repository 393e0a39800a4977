use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "pipdeck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pip layout for a pip count as JSON.
    Layout(LayoutArgs),
    /// Render a single card face as a PNG.
    Card(CardArgs),
    /// Render the whole deck as a contact sheet or one PNG per card.
    Deck(DeckArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Pip count (2..=10).
    #[arg(long)]
    pips: usize,

    /// Optional face style JSON; its `grid_margin` sets the pip area.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Shear slope; pass without a value for the default slope.
    #[arg(long, num_args = 0..=1, default_missing_value = "0.15")]
    tilt: Option<f64>,
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Deck asset manifest JSON.
    #[arg(long)]
    assets: PathBuf,

    /// Optional face style JSON; missing fields keep their defaults.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Card value: A, 2..10, J, Q, K, 11..13, or a special code (P, D, O, M).
    #[arg(long)]
    value: String,

    /// Suit index (0..=3). Required for ranked cards.
    #[arg(long)]
    suit: Option<u8>,

    /// Guide flags: `c` for the cut line, `s` for the safe line.
    #[arg(long, default_value = "")]
    guides: String,

    #[arg(long, value_enum, default_value_t = CornerChoice::Four)]
    corners: CornerChoice,

    /// Shear slope for the pips; pass without a value for the default slope.
    #[arg(long, num_args = 0..=1, default_missing_value = "0.15")]
    tilt: Option<f64>,

    /// Clear everything outside the cut line.
    #[arg(long)]
    cut_mask: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print the SHA-256 of the RGBA pixel buffer.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct DeckArgs {
    /// Deck asset manifest JSON.
    #[arg(long)]
    assets: PathBuf,

    /// Optional face style JSON; missing fields keep their defaults.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Contact sheet PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory for one PNG per card.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Extra pixels around each card on the contact sheet (negative overlaps the bleed).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    spacing: i32,

    /// Guide flags: `c` for the cut line, `s` for the safe line.
    #[arg(long, default_value = "")]
    guides: String,

    #[arg(long, value_enum, default_value_t = CornerChoice::Four)]
    corners: CornerChoice,

    /// Shear slope for the pips; pass without a value for the default slope.
    #[arg(long, num_args = 0..=1, default_missing_value = "0.15")]
    tilt: Option<f64>,

    /// Clear everything outside the cut line.
    #[arg(long)]
    cut_mask: bool,

    /// Render cards on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (default: rayon's choice).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CornerChoice {
    Two,
    Four,
}

impl From<CornerChoice> for pipdeck::CornerMode {
    fn from(value: CornerChoice) -> Self {
        match value {
            CornerChoice::Two => pipdeck::CornerMode::Two,
            CornerChoice::Four => pipdeck::CornerMode::Four,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Card(args) => cmd_card(args),
        Command::Deck(args) => cmd_deck(args),
    }
}

fn read_style(path: Option<&Path>) -> anyhow::Result<pipdeck::FaceStyle> {
    let Some(path) = path else {
        return Ok(pipdeck::FaceStyle::default());
    };
    let f = File::open(path).with_context(|| format!("open style '{}'", path.display()))?;
    let style: pipdeck::FaceStyle =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse style JSON")?;
    style.validate()?;
    Ok(style)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let style = read_style(args.style.as_deref())?;
    let [margin_w, margin_h] = style.grid_margin;
    let layout =
        pipdeck::GridLayout::new(pipdeck::CARD_WIDTH, pipdeck::CARD_HEIGHT, margin_w, margin_h);
    let points = layout.positions_tilted(args.pips, args.tilt).ok_or_else(|| {
        pipdeck::DeckError::invalid_card(format!("no pip layout for {} pips", args.pips))
    })?;
    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let style = read_style(args.style.as_deref())?;
    let assets = pipdeck::DeckAssets::load(&args.assets)?;

    let config = pipdeck::CardFaceConfig {
        value: pipdeck::CardValue::parse(&args.value)?,
        suit: args.suit.map(pipdeck::Suit::new).transpose()?,
        guides: pipdeck::Guides::parse(&args.guides)?,
        corners: args.corners.into(),
        tilt: args.tilt,
        cut_mask: args.cut_mask,
    };
    let canvas = pipdeck::render_card_face(&config, &style, &assets)?;
    canvas.save_png(&args.out)?;

    if args.digest {
        println!("{}", sha256_hex(canvas.to_pixel_buffer()));
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_deck(args: DeckArgs) -> anyhow::Result<()> {
    if args.out.is_none() && args.dir.is_none() {
        anyhow::bail!("deck needs --out, --dir, or both");
    }
    let style = read_style(args.style.as_deref())?;
    let assets = pipdeck::DeckAssets::load(&args.assets)?;

    let opts = pipdeck::DeckRenderOpts {
        guides: pipdeck::Guides::parse(&args.guides)?,
        corners: args.corners.into(),
        tilt: args.tilt,
        cut_mask: args.cut_mask,
        parallel: args.parallel,
        threads: args.threads,
    };
    let cards = pipdeck::render_deck(&assets, &style, &opts)?;

    if let Some(dir) = &args.dir {
        let written = pipdeck::export_dir(&cards, dir)?;
        eprintln!("wrote {} cards to {}", written.len(), dir.display());
    }
    if let Some(out) = &args.out {
        pipdeck::tile_sheet(&cards, args.spacing)?.save_png(out)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
