use log::debug;
use snafu::{ensure, Snafu};

use crate::image_loader::Image;

/// Number of palette entries in a swatch.
pub const SWATCH_ENTRIES: usize = 256;

#[derive(Debug, Snafu)]
#[snafu(display(
    "A swatch must have exactly {SWATCH_ENTRIES} pixels, got {width}x{height}"
))]
pub struct InvalidSwatchSize {
    width: usize,
    height: usize,
}

/// Flattens a 256-pixel palette image into 256 RGB triplets, one per palette
/// index in row-major pixel order. Alpha is dropped; the palette is always
/// opaque on the renderer side.
pub fn encode_swatch(image: &Image) -> Result<Vec<u8>, InvalidSwatchSize> {
    ensure!(
        image.width * image.height == SWATCH_ENTRIES,
        InvalidSwatchSizeSnafu {
            width: image.width,
            height: image.height,
        }
    );

    debug!("flattening {}x{} swatch", image.width, image.height);

    let mut table = Vec::with_capacity(SWATCH_ENTRIES * 3);

    for y in 0..image.height {
        for x in 0..image.width {
            let colour = image.colour(x, y);
            table.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::colour::Colour;

    fn gradient_swatch(width: usize, height: usize) -> Image {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(Colour::from_rgb(x as u8, y as u8, 0xab, 255));
            }
        }

        Image::from_colour_data(width, data)
    }

    #[test]
    fn a_16x16_swatch_flattens_to_768_row_major_bytes() {
        let table = encode_swatch(&gradient_swatch(16, 16)).unwrap();

        assert_eq!(table.len(), 768);
        assert_eq!(&table[0..3], &[0, 0, 0xab]);
        assert_eq!(&table[765..768], &[15, 15, 0xab]);

        // palette index 19 is pixel (3, 1)
        assert_eq!(&table[19 * 3..19 * 3 + 3], &[3, 1, 0xab]);
    }

    #[test]
    fn alpha_does_not_affect_the_table() {
        let mut data = vec![Colour::from_rgb(1, 2, 3, 255); 256];
        data[0] = Colour::from_rgb(10, 20, 30, 0);

        let table = encode_swatch(&Image::from_colour_data(16, data)).unwrap();

        assert_eq!(&table[0..3], &[10, 20, 30]);
    }

    #[test]
    fn any_shape_with_256_pixels_is_accepted() {
        assert!(encode_swatch(&gradient_swatch(64, 4)).is_ok());
        assert!(encode_swatch(&gradient_swatch(256, 1)).is_ok());
    }

    #[test]
    fn other_pixel_counts_are_rejected() {
        assert!(encode_swatch(&gradient_swatch(16, 15)).is_err());
        assert!(encode_swatch(&gradient_swatch(8, 8)).is_err());
        assert!(encode_swatch(&gradient_swatch(16, 17)).is_err());
    }
}
