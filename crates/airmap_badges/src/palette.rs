//! Farbhilfen für Badge-Rendering.
//!
//! Alle Farben sind RGBA mit 8 Bit pro Kanal, nicht vormultipliziert.

/// RGBA-Farbwert
pub type Rgba = [u8; 4];

/// Reines Weiß
pub const WHITE: Rgba = [255, 255, 255, 255];
/// Fast-Schwarz für Beschriftungen auf hellen Flächen
pub const INK: Rgba = [33, 33, 33, 255];
/// Vollständig transparent
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Macht aus einer RGB-Farbe eine deckende RGBA-Farbe.
pub fn opaque(rgb: [u8; 3]) -> Rgba {
    [rgb[0], rgb[1], rgb[2], 255]
}

/// Setzt den Alpha-Kanal einer Farbe.
pub fn with_alpha(color: Rgba, alpha: u8) -> Rgba {
    [color[0], color[1], color[2], alpha]
}

/// Lineare Interpolation zwischen zwei Farben (`t` wird auf 0..1 begrenzt).
pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    [
        mix(a[0], b[0]),
        mix(a[1], b[1]),
        mix(a[2], b[2]),
        mix(a[3], b[3]),
    ]
}

/// Hellt eine Farbe Richtung Weiß auf.
pub fn lighten(color: Rgba, amount: f32) -> Rgba {
    with_alpha(lerp(color, WHITE, amount), color[3])
}

/// Dunkelt eine Farbe Richtung Schwarz ab.
pub fn darken(color: Rgba, amount: f32) -> Rgba {
    with_alpha(lerp(color, [0, 0, 0, 255], amount), color[3])
}

/// Relative Luminanz nach sRGB-Gewichtung (0.0 = schwarz, 1.0 = weiß).
pub fn luminance(color: Rgba) -> f32 {
    (0.2126 * color[0] as f32 + 0.7152 * color[1] as f32 + 0.0722 * color[2] as f32) / 255.0
}

/// Wählt Weiß oder Fast-Schwarz als lesbare Schriftfarbe auf `background`.
pub fn contrast_text_color(background: Rgba) -> Rgba {
    if luminance(background) > 0.6 { INK } else { WHITE }
}

/// Source-over-Compositing von `src` auf `dst`.
pub fn blend_over(dst: Rgba, src: Rgba) -> Rgba {
    let sa = src[3] as f32 / 255.0;
    if sa <= 0.0 {
        return dst;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return TRANSPARENT;
    }
    let channel = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}
