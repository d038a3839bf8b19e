//! Width metrics for the standard PDF fonts and WinAnsi text encoding.
//!
//! Widths are taken from the Adobe AFM files and cover the printable ASCII
//! range (0x20..=0x7E). Other bytes use an average width, which is close
//! enough for centering Latin-1 text on a cover page.

use crate::font::StandardFont;

const FIRST: u8 = 0x20;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

fn table(font: StandardFont) -> &'static [u16; 95] {
    match font {
        StandardFont::Helvetica => &HELVETICA,
        StandardFont::TimesRoman => &TIMES_ROMAN,
    }
}

fn average_width(font: StandardFont) -> u16 {
    match font {
        StandardFont::Helvetica => 556,
        StandardFont::TimesRoman => 500,
    }
}

/// Width of a single WinAnsi byte in 1/1000 em.
pub fn byte_width(font: StandardFont, byte: u8) -> u16 {
    match byte.checked_sub(FIRST) {
        Some(i) if usize::from(i) < 95 => table(font)[usize::from(i)],
        _ => average_width(font),
    }
}

/// Width of `c` as it will be drawn, i.e. after WinAnsi encoding.
pub fn standard_char_width(font: StandardFont, c: char) -> u16 {
    byte_width(font, encode_char(c))
}

fn encode_char(c: char) -> u8 {
    u8::try_from(u32::from(c)).unwrap_or(b'?')
}

/// Encodes `text` for a simple font with WinAnsi encoding.
///
/// Latin-1 characters map to their own byte; everything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

/// Width of `text` in points when drawn with `font` at `size`.
pub fn text_width(font: StandardFont, text: &str, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| u32::from(standard_char_width(font, c)))
        .sum();
    units as f32 * size / 1000.0
}
