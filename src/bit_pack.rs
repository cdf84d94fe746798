/// Packs an ordered bit stream into bytes, 8 bits per byte, with the first
/// bit of each group in the least-significant position. A final group of
/// fewer than 8 bits is padded with zeroes in the high bits; both encoders
/// in this crate produce exact multiples of 8, so the padding never shows up
/// in an asset.
///
/// The byte order here is part of the binary format: the renderer reads bit
/// `i` of a byte as pixel `i` of the run, so switching to MSB-first would
/// produce assets it misreads.
pub fn pack_bits(bits: impl IntoIterator<Item = bool>) -> Vec<u8> {
    let mut packed = Vec::new();

    let mut byte = 0u8;
    let mut bit = 0;

    for set in bits {
        if set {
            byte |= 1 << bit;
        }

        bit += 1;
        if bit == 8 {
            packed.push(byte);
            byte = 0;
            bit = 0;
        }
    }

    if bit != 0 {
        packed.push(byte);
    }

    packed
}
