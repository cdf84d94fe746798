use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use snafu::{ResultExt, Snafu};

use crate::font::GlyphSize;

#[derive(Debug, Snafu)]
pub enum ManifestError {
    #[snafu(display("Failed to read manifest {}: {source}", path.display()))]
    Unreadable {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Failed to parse manifest {}: {source}", path.display()))]
    Unparseable {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[snafu(display("Expected version of {} to be 1.0, got {version}", path.display()))]
    UnsupportedVersion { version: String, path: PathBuf },
}

pub fn parse(path: &Path) -> Result<Manifest, ManifestError> {
    let manifest_toml = fs::read_to_string(path).context(UnreadableSnafu { path })?;

    parse_str(&manifest_toml, path)
}

fn parse_str(manifest_toml: &str, path: &Path) -> Result<Manifest, ManifestError> {
    let manifest: Manifest =
        toml::from_str(manifest_toml).context(UnparseableSnafu { path })?;

    if manifest.version != "1.0" {
        return UnsupportedVersionSnafu {
            version: manifest.version,
            path,
        }
        .fail();
    }

    Ok(manifest)
}

/// A batch description so one tool run regenerates every asset the renderer
/// embeds. Relative paths resolve against the manifest's own directory.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    version: String,

    #[serde(default)]
    font: HashMap<String, FontEntry>,
    #[serde(default)]
    swatch: HashMap<String, SwatchEntry>,
    #[serde(default)]
    charmap: HashMap<String, CharmapEntry>,
}

impl Manifest {
    pub fn fonts(&self) -> &HashMap<String, FontEntry> {
        &self.font
    }

    pub fn swatches(&self) -> &HashMap<String, SwatchEntry> {
        &self.swatch
    }

    pub fn charmaps(&self) -> &HashMap<String, CharmapEntry> {
        &self.charmap
    }
}

#[derive(Debug, Deserialize)]
pub struct FontEntry {
    pub filename: PathBuf,
    pub glyph_size: GlyphSize,
    pub output: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct SwatchEntry {
    pub filename: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct CharmapEntry {
    pub output: PathBuf,
}
