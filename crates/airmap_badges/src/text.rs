//! Bitmap-Text für Badge-Beschriftungen.
//!
//! Eingebetteter 5×7 Font mit Ziffern, Großbuchstaben und den wenigen
//! Sonderzeichen, die in Badges vorkommen (`-`, `+`, `.`, `?`, `°`).
//! Kleinbuchstaben werden auf Großbuchstaben abgebildet.

use image::RgbaImage;

use crate::palette::Rgba;
use crate::shapes;

const CHAR_WIDTH: u32 = 5;
const CHAR_HEIGHT: u32 = 7;

/// Berechnet die Pixelbreite eines Texts (1 Pixel Abstand pro Scale).
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * CHAR_WIDTH * scale + (chars - 1) * scale
}

/// Berechnet die Pixelhöhe eines Texts.
pub fn text_height(scale: u32) -> u32 {
    CHAR_HEIGHT * scale
}

/// Ermittelt die größte Scale, bei der `text` in die Box passt.
///
/// Beginnt bei der größten Scale, die die Box-Höhe zulässt, und verkleinert
/// schrittweise. Unterhalb von `min_scale` wird nicht weiter verkleinert,
/// auch wenn der Text dann übersteht.
pub fn fit_scale(text: &str, box_width: f32, box_height: f32, min_scale: u32) -> u32 {
    let min_scale = min_scale.max(1);
    let mut scale = ((box_height / CHAR_HEIGHT as f32).floor() as u32).max(min_scale);
    while scale > min_scale
        && (text_width(text, scale) as f32 > box_width
            || text_height(scale) as f32 > box_height)
    {
        scale -= 1;
    }
    scale
}

/// Zeichnet Text mit der oberen linken Ecke bei (`x`, `y`).
pub fn draw_text(image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba, scale: u32) {
    let advance = ((CHAR_WIDTH + 1) * scale) as i32;
    let mut cursor_x = x;
    for ch in text.chars() {
        match glyph_for(ch) {
            Some(glyph) => draw_glyph(image, cursor_x, y, &glyph, color, scale),
            None => log::debug!("Kein Glyph für Zeichen {:?}", ch),
        }
        cursor_x += advance;
    }
}

/// Zeichnet Text zentriert um (`cx`, `cy`).
pub fn draw_text_centered(
    image: &mut RgbaImage,
    cx: f32,
    cy: f32,
    text: &str,
    color: Rgba,
    scale: u32,
) {
    let x = (cx - text_width(text, scale) as f32 / 2.0).round() as i32;
    let y = (cy - text_height(scale) as f32 / 2.0).round() as i32;
    draw_text(image, x, y, text, color, scale);
}

fn draw_glyph(image: &mut RgbaImage, x: i32, y: i32, glyph: &[u8; 7], color: Rgba, scale: u32) {
    let s = scale as i32;
    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..CHAR_WIDTH as i32 {
            if bits & (1 << (CHAR_WIDTH as i32 - 1 - col)) == 0 {
                continue;
            }
            for sy in 0..s {
                for sx in 0..s {
                    shapes::blend_pixel(image, x + col * s + sx, y + row as i32 * s + sy, color, 1.0);
                }
            }
        }
    }
}

/// Glyph-Zeilen für ein Zeichen; Bits 4–0 sind die 5 Spalten.
#[rustfmt::skip]
fn glyph_for(ch: char) -> Option<[u8; 7]> {
    Some(match ch.to_ascii_uppercase() {
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000],
        '?' => [0b01110, 0b10001, 0b00010, 0b00100, 0b00000, 0b00100, 0b00000],
        '°' => [0b01100, 0b10010, 0b10010, 0b01100, 0b00000, 0b00000, 0b00000],
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_counts_chars_not_bytes() {
        assert_eq!(text_width("AB", 1), 11); // 5+1+5
        assert_eq!(text_width("", 3), 0);
        // '°' ist zwei Bytes, aber ein Zeichen
        assert_eq!(text_width("5°", 1), 11);
    }

    #[test]
    fn test_fit_scale_shrinks_for_long_text() {
        // Box 40×30: Höhe erlaubt Scale 4, drei Ziffern brauchen 3*5*4+2*4 = 68 px
        let scale = fit_scale("188", 40.0, 30.0, 1);
        assert!(text_width("188", scale) as f32 <= 40.0);
        assert!(scale < 4);
        assert!(fit_scale("7", 40.0, 30.0, 1) > scale);
    }

    #[test]
    fn test_fit_scale_respects_floor() {
        assert_eq!(fit_scale("VERY LONG LABEL", 10.0, 10.0, 1), 1);
        assert_eq!(fit_scale("VERY LONG LABEL", 10.0, 10.0, 2), 2);
    }

    #[test]
    fn test_lowercase_maps_to_uppercase_glyph() {
        assert_eq!(glyph_for('e'), glyph_for('E'));
        assert!(glyph_for('~').is_none());
    }

    #[test]
    fn test_draw_text_out_of_bounds_no_panic() {
        let mut img = RgbaImage::new(10, 10);
        draw_text(&mut img, -5, -5, "X", [255, 0, 0, 255], 2);
        draw_text_centered(&mut img, 5.0, 5.0, "123", [255, 0, 0, 255], 1);
    }
}
