//! Vektor-Piktogramme für Wetter-Badges.
//!
//! Alle Formen werden relativ zu einer quadratischen Box der Kantenlänge
//! `size` um (`cx`, `cy`) gezeichnet.

use image::RgbaImage;

use crate::palette::{self, Rgba};
use crate::shapes;

/// Verfügbare Wetter-Piktogramme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pictogram {
    Sun,
    Cloud,
    DarkCloud,
    Rain,
    Storm,
    Fog,
    Snow,
    Unknown,
}

const SUN_YELLOW: Rgba = [255, 213, 79, 255];
const CLOUD_WHITE: Rgba = [250, 250, 250, 255];
const CLOUD_GREY: Rgba = [176, 190, 197, 255];
const RAIN_BLUE: Rgba = [144, 202, 249, 255];
const BOLT_YELLOW: Rgba = [255, 235, 59, 255];

/// Zeichnet ein Piktogramm in die Box um (`cx`, `cy`).
pub fn draw_pictogram(image: &mut RgbaImage, pictogram: Pictogram, cx: f32, cy: f32, size: f32) {
    let u = size / 10.0;
    match pictogram {
        Pictogram::Sun => draw_sun(image, cx, cy, u),
        Pictogram::Cloud => draw_cloud(image, cx, cy, u, CLOUD_WHITE),
        Pictogram::DarkCloud => draw_cloud(image, cx, cy, u, CLOUD_GREY),
        Pictogram::Rain => {
            draw_cloud(image, cx, cy - u, u, CLOUD_WHITE);
            for i in -1..=1 {
                let x = cx + i as f32 * 2.2 * u;
                shapes::draw_line(
                    image,
                    (x + 0.5 * u, cy + 1.8 * u),
                    (x - 0.3 * u, cy + 3.6 * u),
                    0.7 * u,
                    RAIN_BLUE,
                );
            }
        }
        Pictogram::Storm => {
            draw_cloud(image, cx, cy - u, u, CLOUD_GREY);
            let bolt = [
                (cx + 0.6 * u, cy + 0.6 * u),
                (cx - 1.2 * u, cy + 2.8 * u),
                (cx + 0.0 * u, cy + 2.8 * u),
                (cx - 0.8 * u, cy + 4.6 * u),
                (cx + 1.6 * u, cy + 1.8 * u),
                (cx + 0.3 * u, cy + 1.8 * u),
                (cx + 1.2 * u, cy + 0.6 * u),
            ];
            shapes::fill_polygon(image, &bolt, BOLT_YELLOW);
        }
        Pictogram::Fog => {
            for (i, half_width) in [3.2, 3.8, 3.0].into_iter().enumerate() {
                let y = cy - 1.8 * u + i as f32 * 1.8 * u;
                shapes::draw_line(
                    image,
                    (cx - half_width * u, y),
                    (cx + half_width * u, y),
                    0.8 * u,
                    palette::with_alpha(CLOUD_WHITE, 230),
                );
            }
        }
        Pictogram::Snow => {
            for i in 0..3 {
                let angle = i as f32 * std::f32::consts::PI / 3.0;
                let (dx, dy) = (angle.cos() * 3.4 * u, angle.sin() * 3.4 * u);
                shapes::draw_line(image, (cx - dx, cy - dy), (cx + dx, cy + dy), 0.7 * u, CLOUD_WHITE);
            }
            shapes::fill_circle(image, cx, cy, 0.8 * u, CLOUD_WHITE);
        }
        Pictogram::Unknown => {
            shapes::stroke_ring(image, cx, cy - 0.9 * u, 1.8 * u, 0.8 * u, CLOUD_WHITE);
            shapes::draw_line(image, (cx, cy + 0.9 * u), (cx, cy + 1.8 * u), 0.8 * u, CLOUD_WHITE);
            shapes::fill_circle(image, cx, cy + 3.0 * u, 0.5 * u, CLOUD_WHITE);
        }
    }
}

fn draw_sun(image: &mut RgbaImage, cx: f32, cy: f32, u: f32) {
    for i in 0..8 {
        let angle = i as f32 * std::f32::consts::FRAC_PI_4;
        let (c, s) = (angle.cos(), angle.sin());
        shapes::draw_line(
            image,
            (cx + c * 2.6 * u, cy + s * 2.6 * u),
            (cx + c * 3.8 * u, cy + s * 3.8 * u),
            0.6 * u,
            SUN_YELLOW,
        );
    }
    shapes::fill_circle(image, cx, cy, 2.0 * u, SUN_YELLOW);
}

fn draw_cloud(image: &mut RgbaImage, cx: f32, cy: f32, u: f32, color: Rgba) {
    shapes::fill_circle(image, cx - 1.6 * u, cy + 0.3 * u, 1.5 * u, color);
    shapes::fill_circle(image, cx + 0.4 * u, cy - 0.7 * u, 2.1 * u, color);
    shapes::fill_circle(image, cx + 2.0 * u, cy + 0.5 * u, 1.3 * u, color);
    shapes::fill_rounded_rect(image, cx - 3.1 * u, cy + 0.2 * u, 6.4 * u, 1.6 * u, 0.8 * u, color);
}
