use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::{
    assets::decode::load_art,
    assets::store::{DeckAssets, SUIT_CELL},
    card::model::{CardValue, SpecialTag, Suit},
    foundation::error::{DeckError, DeckResult},
};

/// JSON description of a deck's artwork. Paths are relative to the manifest file.
///
/// ```json
/// {
///   "suits": { "sheet": "suits.png" },
///   "glyphs": {
///     "1": { "path": "glyphs/A.png", "adjust": [5, 0] },
///     "P": { "path": "glyphs/P.svg" }
///   },
///   "specials": { "P": { "path": "phoenix.png", "size": [560, 760] } },
///   "faces": [ { "suit": 0, "rank": 11, "path": "faces/star_j.png", "size": [380, 700] } ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckManifest {
    pub suits: SuitSource,
    #[serde(default)]
    pub glyphs: BTreeMap<String, GlyphEntry>,
    #[serde(default)]
    pub specials: BTreeMap<SpecialTag, SpecialEntry>,
    #[serde(default)]
    pub faces: Vec<FaceEntry>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SuitSource {
    /// One strip holding the four suits left to right.
    Sheet {
        sheet: String,
        #[serde(default = "default_cell")]
        cell: u32,
    },
    /// One file per suit, in suit order.
    Files { files: [String; 4] },
}

fn default_cell() -> u32 {
    SUIT_CELL
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlyphEntry {
    pub path: String,
    #[serde(default)]
    pub adjust: [i32; 2],
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialEntry {
    pub path: String,
    pub size: [u32; 2],
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaceEntry {
    pub suit: Suit,
    pub rank: u8,
    pub path: String,
    pub size: [u32; 2],
    #[serde(default)]
    pub offset: [i32; 2],
}

impl DeckManifest {
    pub fn from_reader<R: std::io::Read>(r: R) -> DeckResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DeckError::serde(format!("parse deck manifest JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> DeckResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DeckError::asset(format!("open deck manifest '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl DeckAssets {
    /// Read a manifest and every file it references.
    pub fn load(path: impl AsRef<Path>) -> DeckResult<Self> {
        let path = path.as_ref();
        let manifest = DeckManifest::from_path(path)?;
        let root = path.parent().unwrap_or(Path::new("."));
        Self::from_manifest(&manifest, root)
    }

    /// Build assets from an already parsed manifest, resolving paths against `root`.
    #[tracing::instrument(skip_all, fields(root = %root.display()))]
    pub fn from_manifest(manifest: &DeckManifest, root: &Path) -> DeckResult<Self> {
        let resolve = |rel: &str| -> PathBuf { root.join(rel) };

        let mut assets = match &manifest.suits {
            SuitSource::Sheet { sheet, cell } => {
                let sheet = load_art(&resolve(sheet))?;
                DeckAssets::from_suit_sheet(&sheet, *cell)?
            }
            SuitSource::Files { files } => {
                let [a, b, c, d] = files;
                DeckAssets::new([
                    load_art(&resolve(a))?,
                    load_art(&resolve(b))?,
                    load_art(&resolve(c))?,
                    load_art(&resolve(d))?,
                ])
            }
        };

        for (key, entry) in &manifest.glyphs {
            let value = CardValue::parse(key)?;
            let image = load_art(&resolve(&entry.path))?;
            assets = assets.with_glyph(value, &image, entry.adjust)?;
        }
        for (tag, entry) in &manifest.specials {
            let image = load_art(&resolve(&entry.path))?;
            assets = assets.with_special(*tag, image, (entry.size[0], entry.size[1]));
        }
        for entry in &manifest.faces {
            let image = load_art(&resolve(&entry.path))?;
            assets = assets.with_face(
                entry.suit,
                entry.rank,
                image,
                (entry.size[0], entry.size[1]),
                entry.offset,
            )?;
        }

        tracing::debug!(
            glyphs = manifest.glyphs.len(),
            specials = manifest.specials.len(),
            faces = manifest.faces.len(),
            "loaded deck assets"
        );
        Ok(assets)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/manifest.rs"]
mod tests;
