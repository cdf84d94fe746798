use std::{fmt, str::FromStr};

use log::debug;
use serde::Deserialize;
use snafu::{ensure, Snafu};

use crate::{bit_pack::pack_bits, image_loader::Image};

/// Width and height of one cell in pixels.
pub const CELL_SIZE: usize = 8;

/// How many cells one glyph spans in each direction. The sheets in use are
/// `1x1` (small), `1x2` (tall) and `2x2` (fat), but any positive pair
/// parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct GlyphSize {
    width_cells: usize,
    height_cells: usize,
}

impl GlyphSize {
    pub fn new(width_cells: usize, height_cells: usize) -> Self {
        assert!(
            width_cells > 0 && height_cells > 0,
            "a glyph must span at least one cell in each direction"
        );

        GlyphSize {
            width_cells,
            height_cells,
        }
    }

    pub fn width_cells(self) -> usize {
        self.width_cells
    }

    pub fn height_cells(self) -> usize {
        self.height_cells
    }

    /// Width of one glyph block in pixels.
    pub fn width_pixels(self) -> usize {
        self.width_cells * CELL_SIZE
    }

    /// Height of one glyph block in pixels.
    pub fn height_pixels(self) -> usize {
        self.height_cells * CELL_SIZE
    }
}

impl fmt::Display for GlyphSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width_cells, self.height_cells)
    }
}

#[derive(Debug, Snafu)]
#[snafu(display(
    "Glyph sizes are written as cells WIDTHxHEIGHT (e.g. 1x2), got \"{input}\""
))]
pub struct ParseGlyphSizeError {
    input: String,
}

impl FromStr for GlyphSize {
    type Err = ParseGlyphSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .split_once('x')
            .and_then(|(w, h)| Some((w.parse().ok()?, h.parse().ok()?)));

        match cells {
            Some((width_cells, height_cells)) if width_cells > 0 && height_cells > 0 => {
                Ok(GlyphSize {
                    width_cells,
                    height_cells,
                })
            }
            _ => ParseGlyphSizeSnafu { input: s }.fail(),
        }
    }
}

impl TryFrom<String> for GlyphSize {
    type Error = ParseGlyphSizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Snafu)]
#[snafu(display(
    "The sheet ({width}x{height}) is not a whole number of {glyph_size} glyph blocks"
))]
pub struct InvalidSheetGeometry {
    width: usize,
    height: usize,
    glyph_size: GlyphSize,
}

/// Binarizes a glyph sheet into a packed 1bpp bitmap, one bit per pixel.
///
/// Glyph blocks are visited in row-major order across the sheet; within a
/// block, cells are visited in row-major order and each cell's 8x8 pixels
/// row by row. A tall glyph's bottom cell therefore lands directly after its
/// top cell in the output, ahead of the next glyph on the sheet, which is
/// how the renderer indexes its tiles.
pub fn encode_font(image: &Image, glyph_size: GlyphSize) -> Result<Vec<u8>, InvalidSheetGeometry> {
    let block_width = glyph_size.width_pixels();
    let block_height = glyph_size.height_pixels();

    ensure!(
        image.width % block_width == 0 && image.height % block_height == 0,
        InvalidSheetGeometrySnafu {
            width: image.width,
            height: image.height,
            glyph_size,
        }
    );

    debug!(
        "binarizing {}x{} sheet as {} glyphs of {glyph_size} cells",
        image.width,
        image.height,
        (image.width / block_width) * (image.height / block_height),
    );

    let mut bits = Vec::with_capacity(image.width * image.height);

    for block_y in (0..image.height).step_by(block_height) {
        for block_x in (0..image.width).step_by(block_width) {
            for cell_y in 0..glyph_size.height_cells {
                for cell_x in 0..glyph_size.width_cells {
                    for y in 0..CELL_SIZE {
                        for x in 0..CELL_SIZE {
                            let colour = image.colour(
                                block_x + cell_x * CELL_SIZE + x,
                                block_y + cell_y * CELL_SIZE + y,
                            );

                            bits.push(colour.is_lit());
                        }
                    }
                }
            }
        }
    }

    Ok(pack_bits(bits))
}
