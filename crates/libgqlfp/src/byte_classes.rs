//! Byte classification for the document walker.
//!
//! Classification is ASCII-only and byte-at-a-time. The letter, digit, and
//! hex tables are 256-entry lookup tables so the hot scanning loops never
//! branch on ranges.

const fn letter_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = b'a';
    while b <= b'z' {
        table[b as usize] = true;
        b += 1;
    }
    let mut b = b'A';
    while b <= b'Z' {
        table[b as usize] = true;
        b += 1;
    }
    table
}

const fn digit_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = b'0';
    while b <= b'9' {
        table[b as usize] = true;
        b += 1;
    }
    table
}

const fn hex_digit_table() -> [bool; 256] {
    let mut table = digit_table();
    let mut b = b'a';
    while b <= b'f' {
        table[b as usize] = true;
        b += 1;
    }
    let mut b = b'A';
    while b <= b'F' {
        table[b as usize] = true;
        b += 1;
    }
    table
}

static LETTER: [bool; 256] = letter_table();
static DIGIT: [bool; 256] = digit_table();
static HEX_DIGIT: [bool; 256] = hex_digit_table();

#[inline]
pub(crate) fn is_letter(byte: u8) -> bool {
    LETTER[byte as usize]
}

#[inline]
pub(crate) fn is_digit(byte: u8) -> bool {
    DIGIT[byte as usize]
}

#[inline]
pub(crate) fn is_hex_digit(byte: u8) -> bool {
    HEX_DIGIT[byte as usize]
}

#[inline]
pub(crate) fn is_name_start(byte: u8) -> bool {
    is_letter(byte) || byte == b'_'
}

#[inline]
pub(crate) fn is_name_continue(byte: u8) -> bool {
    is_letter(byte) || is_digit(byte) || byte == b'_'
}

/// Whitespace in the block-string sense: space and horizontal tab only.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Bytes that carry no structural meaning between tokens. Commas are
/// insignificant everywhere in this grammar.
#[inline]
pub(crate) fn is_insignificant(byte: u8) -> bool {
    matches!(byte, b' ' | b',' | b'\t' | b'\n' | b'\r')
}
