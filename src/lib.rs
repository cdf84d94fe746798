//! Converts pixel-art source images into the packed binary assets a
//! cell-based renderer embeds with `include_bytes!`.
//!
//! Three asset kinds come out of this crate:
//!
//! - glyph bitmaps: a sheet of 8x8 cells is binarized to one bit per pixel
//!   and packed LSB-first, glyph by glyph ([`font::encode_font`]);
//! - swatches: a 256-pixel palette image flattened to 768 bytes of RGB
//!   triplets ([`swatch::encode_swatch`]);
//! - the codepage 437 character table as UTF-8 ([`charmap::encode_charmap`]).
//!
//! None of the formats carry a header or version tag; the byte layouts here
//! are the contract with the renderer build that reads them. The encoders
//! are pure functions over in-memory images, so everything is testable
//! without touching the filesystem; the `convert_*` wrappers in this module
//! own the file I/O.

pub mod bit_pack;
pub mod charmap;
pub mod colour;
pub mod config;
pub mod font;
pub mod image_loader;
pub mod swatch;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use snafu::{ResultExt, Snafu};

pub use colour::Colour;
pub use font::GlyphSize;
pub use image_loader::Image;

#[derive(Debug, Snafu)]
pub enum ConvertError {
    #[snafu(context(false), display("{source}"))]
    Decode { source: image_loader::DecodeError },

    #[snafu(context(false), display("{source}"))]
    Font { source: font::InvalidSheetGeometry },

    #[snafu(context(false), display("{source}"))]
    Swatch { source: swatch::InvalidSwatchSize },

    #[snafu(context(false), display("{source}"))]
    Manifest { source: config::ManifestError },

    #[snafu(display("Failed to write {}: {source}", path.display()))]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Binarizes the glyph sheet at `input` and writes the packed bitmap to
/// `output`.
pub fn convert_font(input: &Path, output: &Path, glyph_size: GlyphSize) -> Result<(), ConvertError> {
    let image = Image::load_from_file(input)?;
    let packed = font::encode_font(&image, glyph_size)?;

    info!(
        "{}: {}x{} sheet of {glyph_size} glyphs -> {} bytes",
        input.display(),
        image.width,
        image.height,
        packed.len(),
    );

    write_asset(output, &packed)
}

/// Flattens the palette image at `input` and writes the 768-byte colour
/// table to `output`.
pub fn convert_swatch(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let image = Image::load_from_file(input)?;
    let table = swatch::encode_swatch(&image)?;

    info!("{}: swatch -> {} bytes", input.display(), table.len());

    write_asset(output, &table)
}

/// Writes the codepage 437 character table to `output`.
pub fn convert_charmap(output: &Path) -> Result<(), ConvertError> {
    let table = charmap::encode_charmap();

    info!("charmap -> {} bytes", table.len());

    write_asset(output, &table)
}

/// Runs every conversion a manifest describes. The first failure aborts the
/// run; there is no partial-success mode.
pub fn run_manifest(manifest_path: &Path) -> Result<(), ConvertError> {
    let manifest = config::parse(manifest_path)?;
    let base = manifest_path.parent().unwrap_or(Path::new("."));

    for (name, entry) in manifest.fonts() {
        info!("font \"{name}\"");
        convert_font(
            &base.join(&entry.filename),
            &base.join(&entry.output),
            entry.glyph_size,
        )?;
    }

    for (name, entry) in manifest.swatches() {
        info!("swatch \"{name}\"");
        convert_swatch(&base.join(&entry.filename), &base.join(&entry.output))?;
    }

    for (name, entry) in manifest.charmaps() {
        info!("charmap \"{name}\"");
        convert_charmap(&base.join(&entry.output))?;
    }

    Ok(())
}

// encoding happens fully in memory first, so a failed conversion never
// leaves a truncated asset behind
fn write_asset(path: &Path, data: &[u8]) -> Result<(), ConvertError> {
    let mut output = BufWriter::new(File::create(path).context(WriteSnafu { path })?);

    output.write_all(data).context(WriteSnafu { path })?;
    output.flush().context(WriteSnafu { path })?;

    Ok(())
}
