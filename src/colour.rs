use std::fmt;

/// Alpha values below this count as transparent when binarizing.
pub const ALPHA_CUTOFF: u8 = 128;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;

        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }

        Ok(())
    }
}

impl Colour {
    pub const fn from_rgb(r: u8, g: u8, b: u8, a: u8) -> Self {
        Colour { r, g, b, a }
    }

    /// Whether this pixel binarizes to a set bit: average RGB at least 50%
    /// and alpha at least [`ALPHA_CUTOFF`]. Everything else, including bright
    /// but transparent pixels, binarizes to a cleared bit.
    pub fn is_lit(self) -> bool {
        if self.a < ALPHA_CUTOFF {
            return false;
        }

        let brightness = self.r as u32 + self.g as u32 + self.b as u32;
        brightness * 2 >= 255 * 3
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Colour {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self::from_rgb(
            quickcheck::Arbitrary::arbitrary(g),
            quickcheck::Arbitrary::arbitrary(g),
            quickcheck::Arbitrary::arbitrary(g),
            quickcheck::Arbitrary::arbitrary(g),
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            vec![
                Colour::from_rgb(0, 0, 0, 255),
                Colour::from_rgb(self.r, self.g, self.b, 255),
                *self,
            ]
            .into_iter(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn white_is_lit_and_black_is_not() {
        assert!(Colour::from_rgb(255, 255, 255, 255).is_lit());
        assert!(!Colour::from_rgb(0, 0, 0, 255).is_lit());
    }

    #[test]
    fn brightness_threshold_is_half_the_channel_sum() {
        // 127 + 127 + 128 falls just below half of 765, one more is enough
        assert!(!Colour::from_rgb(127, 127, 128, 255).is_lit());
        assert!(Colour::from_rgb(127, 128, 128, 255).is_lit());
    }

    #[test]
    fn transparency_overrides_brightness() {
        assert!(!Colour::from_rgb(255, 255, 255, 0).is_lit());
        assert!(!Colour::from_rgb(255, 255, 255, ALPHA_CUTOFF - 1).is_lit());
        assert!(Colour::from_rgb(255, 255, 255, ALPHA_CUTOFF).is_lit());
    }
}
