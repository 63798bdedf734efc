//! Runde Marker-Badges: Verlaufsfüllung, Ring, Inhalt und optionaler Chip.

use image::RgbaImage;

use crate::palette::{self, Rgba};
use crate::pictogram::{self, Pictogram};
use crate::shapes;
use crate::text;

/// Anteil der Badge-Breite, den ein Label maximal einnehmen darf.
pub const LABEL_WIDTH_RATIO: f32 = 0.70;
/// Anteil der Badge-Höhe, den ein Label maximal einnehmen darf.
pub const LABEL_HEIGHT_RATIO: f32 = 0.55;
/// Kleinste Font-Scale für Labels.
pub const MIN_LABEL_SCALE: u32 = 1;
/// Höhe des Chips relativ zur Badge-Größe.
const CHIP_HEIGHT_RATIO: f32 = 0.36;

/// Aussehen eines Badges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeStyle {
    /// Durchmesser in Pixeln
    pub size: u32,
    /// Grundfarbe der Füllung (Verlauf wird daraus abgeleitet)
    pub fill: Rgba,
    /// Ringfarbe
    pub stroke: Rgba,
    /// Ringbreite in Pixeln
    pub stroke_width: f32,
}

impl BadgeStyle {
    /// Standard-Stil: weißer Ring, Breite proportional zur Größe.
    pub fn new(size: u32, fill: Rgba) -> Self {
        Self {
            size,
            fill,
            stroke: palette::WHITE,
            stroke_width: (size as f32 / 16.0).max(1.5),
        }
    }

    /// Oberste Farbe des Verlaufs.
    pub fn gradient_top(&self) -> Rgba {
        palette::lighten(self.fill, 0.25)
    }

    /// Unterste Farbe des Verlaufs.
    pub fn gradient_bottom(&self) -> Rgba {
        palette::darken(self.fill, 0.15)
    }
}

/// Inhalt in der Badge-Mitte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeContent<'a> {
    /// Kurzer Text (Zahl oder Kürzel), wird in die Badge eingepasst
    Label(&'a str),
    /// Vektor-Piktogramm
    Pictogram(Pictogram),
}

/// Kleines Textfeld unterhalb der Badge (z.B. Temperatur).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chip<'a> {
    pub text: &'a str,
    pub fill: Rgba,
}

/// Rendert ein Badge in ein neues, transparentes RGBA-Bild.
///
/// Ohne Chip ist das Bild quadratisch (`size`×`size`). Mit Chip wächst es
/// nach unten um die halbe Chip-Höhe; der Chip überlappt den unteren Rand.
pub fn render_badge(style: &BadgeStyle, content: BadgeContent<'_>, chip: Option<Chip<'_>>) -> RgbaImage {
    let size = style.size.max(8);
    let chip_height = (size as f32 * CHIP_HEIGHT_RATIO).round();
    let canvas_height = match chip {
        Some(_) => size + (chip_height / 2.0).ceil() as u32,
        None => size,
    };
    let mut image = RgbaImage::new(size, canvas_height);

    let center = size as f32 / 2.0;
    let radius = center - style.stroke_width / 2.0 - 0.5;
    shapes::fill_circle_gradient(
        &mut image,
        center,
        center,
        radius,
        style.gradient_top(),
        style.gradient_bottom(),
    );
    shapes::stroke_ring(&mut image, center, center, radius, style.stroke_width, style.stroke);

    match content {
        BadgeContent::Label(label) => {
            let scale = text::fit_scale(
                label,
                size as f32 * LABEL_WIDTH_RATIO,
                size as f32 * LABEL_HEIGHT_RATIO,
                MIN_LABEL_SCALE,
            );
            let color = palette::contrast_text_color(style.fill);
            text::draw_text_centered(&mut image, center, center, label, color, scale);
        }
        BadgeContent::Pictogram(p) => {
            pictogram::draw_pictogram(&mut image, p, center, center, size as f32 * 0.62);
        }
    }

    if let Some(chip) = chip {
        draw_chip(&mut image, &chip, size, chip_height);
    }

    image
}

fn draw_chip(image: &mut RgbaImage, chip: &Chip<'_>, size: u32, chip_height: f32) {
    let max_width = size as f32 * 0.95;
    let scale = text::fit_scale(chip.text, max_width - 4.0, chip_height * 0.75, 1);
    let width = (text::text_width(chip.text, scale) as f32 + 2.0 * scale as f32 + 4.0).min(max_width);
    let x = (size as f32 - width) / 2.0;
    let y = size as f32 - chip_height / 2.0;
    shapes::fill_rounded_rect(image, x, y, width, chip_height, chip_height / 2.0, chip.fill);
    let color = palette::contrast_text_color(chip.fill);
    text::draw_text_centered(
        image,
        size as f32 / 2.0,
        y + chip_height / 2.0,
        chip.text,
        color,
        scale,
    );
}
