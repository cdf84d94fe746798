//! The renderer's character table: codepage 437 in code order, re-encoded
//! as UTF-8 so the renderer can build its `char -> glyph index` map without
//! carrying a codec.

/// Unicode equivalents of codepage 437's high half (codes 0x80..=0xFF).
#[rustfmt::skip]
const HIGH_HALF: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// The character for one codepage 437 code. Codes below 0x80 map to the
/// identical Unicode scalar, control characters included, matching the table
/// the renderer ships.
pub fn decode_char(code: u8) -> char {
    if code < 0x80 {
        code as char
    } else {
        HIGH_HALF[usize::from(code) - 0x80]
    }
}

/// Encodes the full 256-entry table as contiguous UTF-8.
pub fn encode_charmap() -> Vec<u8> {
    let mut table = String::new();

    for code in 0..=255u8 {
        table.push(decode_char(code));
    }

    table.into_bytes()
}
