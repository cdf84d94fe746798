use std::path::{Path, PathBuf};

use image::GenericImageView;
use snafu::{ResultExt, Snafu};

use crate::colour::Colour;

#[derive(Debug, Snafu)]
#[snafu(display("Failed to decode {}: {source}", path.display()))]
pub struct DecodeError {
    source: image::ImageError,
    path: PathBuf,
}

/// A decoded source image as a row-major grid of RGBA samples. Sources
/// without an alpha channel come out fully opaque, so every consumer sees
/// one sample shape.
pub struct Image {
    pub width: usize,
    pub height: usize,
    colour_data: Vec<Colour>,
}

impl Image {
    pub fn load_from_file(image_path: &Path) -> Result<Self, DecodeError> {
        let img = image::open(image_path).context(DecodeSnafu { path: image_path })?;

        Ok(Self::load_from_dyn_image(img))
    }

    pub fn load_from_dyn_image(img: image::DynamicImage) -> Self {
        let (width, height) = img.dimensions();

        let width = width as usize;
        let height = height as usize;

        let mut colour_data = Vec::with_capacity(width * height);

        for (_, _, pixel) in img.pixels() {
            colour_data.push(Colour::from_rgb(pixel[0], pixel[1], pixel[2], pixel[3]));
        }

        Image {
            width,
            height,
            colour_data,
        }
    }

    /// Builds an image directly from samples, `width` pixels per row.
    pub fn from_colour_data(width: usize, colour_data: Vec<Colour>) -> Self {
        assert!(
            width > 0 && colour_data.len() % width == 0,
            "colour data must be a whole number of {width}-pixel rows"
        );

        Image {
            width,
            height: colour_data.len() / width,
            colour_data,
        }
    }

    pub fn colour(&self, x: usize, y: usize) -> Colour {
        self.colour_data[x + y * self.width]
    }
}
