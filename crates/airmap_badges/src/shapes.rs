//! Geometrische Primitive mit einfacher Kantenglättung.
//!
//! Jede Funktion blendet per Source-over in das Zielbild und ignoriert
//! Pixel außerhalb der Bildgrenzen.

use image::{Rgba as Pixel, RgbaImage};

use crate::palette::{self, Rgba};

/// Blendet eine Farbe mit Deckung `coverage` (0..1) auf einen Pixel.
pub fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba, coverage: f32) {
    if x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let src = palette::with_alpha(color, (color[3] as f32 * coverage).round() as u8);
    let dst = image.get_pixel(x as u32, y as u32).0;
    image.put_pixel(x as u32, y as u32, Pixel(palette::blend_over(dst, src)));
}

/// Deckung eines Pixels aus seinem vorzeichenbehafteten Kantenabstand.
/// Negativ = innen, positiv = außen; ein halber Pixel Übergang.
fn edge_coverage(signed_distance: f32) -> f32 {
    (0.5 - signed_distance).clamp(0.0, 1.0)
}

/// Pixel-Rechteck um einen Kreis, auf das Bild begrenzt.
fn bounds(image: &RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32) -> (i32, i32, i32, i32) {
    let x0 = ((cx - rx - 1.0).floor() as i32).max(0);
    let y0 = ((cy - ry - 1.0).floor() as i32).max(0);
    let x1 = ((cx + rx + 1.0).ceil() as i32).min(image.width() as i32 - 1);
    let y1 = ((cy + ry + 1.0).ceil() as i32).min(image.height() as i32 - 1);
    (x0, y0, x1, y1)
}

/// Zeichnet einen gefüllten Kreis.
pub fn fill_circle(image: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba) {
    fill_circle_gradient(image, cx, cy, radius, color, color);
}

/// Zeichnet einen gefüllten Kreis mit vertikalem Farbverlauf (oben → unten).
pub fn fill_circle_gradient(
    image: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    top: Rgba,
    bottom: Rgba,
) {
    if radius <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = bounds(image, cx, cy, radius, radius);
    for y in y0..=y1 {
        let py = y as f32 + 0.5;
        let t = (py - (cy - radius)) / (2.0 * radius);
        let color = palette::lerp(top, bottom, t);
        for x in x0..=x1 {
            let px = x as f32 + 0.5;
            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt() - radius;
            blend_pixel(image, x, y, color, edge_coverage(d));
        }
    }
}

/// Zeichnet einen Ring (Kreislinie) mit der Linienmitte auf `radius`.
pub fn stroke_ring(image: &mut RgbaImage, cx: f32, cy: f32, radius: f32, width: f32, color: Rgba) {
    if width <= 0.0 {
        return;
    }
    let half = width / 2.0;
    let outer = radius + half;
    let (x0, y0, x1, y1) = bounds(image, cx, cy, outer, outer);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let d = (((px - cx).powi(2) + (py - cy).powi(2)).sqrt() - radius).abs() - half;
            blend_pixel(image, x, y, color, edge_coverage(d));
        }
    }
}

/// Zeichnet eine gefüllte, achsparallele Ellipse.
pub fn fill_ellipse(image: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = bounds(image, cx, cy, rx, ry);
    let scale = rx.min(ry);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let nx = (x as f32 + 0.5 - cx) / rx;
            let ny = (y as f32 + 0.5 - cy) / ry;
            // Näherung des Kantenabstands über den normierten Radius
            let d = ((nx * nx + ny * ny).sqrt() - 1.0) * scale;
            blend_pixel(image, x, y, color, edge_coverage(d));
        }
    }
}

/// Zeichnet eine Linie mit runden Enden.
pub fn draw_line(
    image: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    thickness: f32,
    color: Rgba,
) {
    let half = thickness / 2.0;
    let min_x = from.0.min(to.0);
    let max_x = from.0.max(to.0);
    let min_y = from.1.min(to.1);
    let max_y = from.1.max(to.1);
    let (x0, y0, x1, y1) = bounds(
        image,
        (min_x + max_x) / 2.0,
        (min_y + max_y) / 2.0,
        (max_x - min_x) / 2.0 + half,
        (max_y - min_y) / 2.0 + half,
    );
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = (x as f32 + 0.5, y as f32 + 0.5);
            let d = distance_to_segment(p, from, to) - half;
            blend_pixel(image, x, y, color, edge_coverage(d));
        }
    }
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (qx, qy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - qx).powi(2) + (p.1 - qy).powi(2)).sqrt()
}

/// Zeichnet ein gefülltes Rechteck mit abgerundeten Ecken.
pub fn fill_rounded_rect(
    image: &mut RgbaImage,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    color: Rgba,
) {
    let radius = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    let (x0, y0, x1, y1) = bounds(image, x + w / 2.0, y + h / 2.0, w / 2.0, h / 2.0);
    for py in y0..=y1 {
        for px in x0..=x1 {
            let sx = px as f32 + 0.5;
            let sy = py as f32 + 0.5;
            // Abstand zum inneren Rechteck minus Eckradius
            let qx = (sx - (x + w / 2.0)).abs() - (w / 2.0 - radius);
            let qy = (sy - (y + h / 2.0)).abs() - (h / 2.0 - radius);
            let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
            let inside = qx.max(qy).min(0.0);
            let d = outside + inside - radius;
            blend_pixel(image, px, py, color, edge_coverage(d));
        }
    }
}

/// Zeichnet ein gefülltes Polygon (Even-Odd-Regel, ohne Kantenglättung).
pub fn fill_polygon(image: &mut RgbaImage, points: &[(f32, f32)], color: Rgba) {
    if points.len() < 3 {
        return;
    }
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for &(px, py) in points {
        min_x = min_x.min(px);
        min_y = min_y.min(py);
        max_x = max_x.max(px);
        max_y = max_y.max(py);
    }
    let (x0, y0, x1, y1) = bounds(
        image,
        (min_x + max_x) / 2.0,
        (min_y + max_y) / 2.0,
        (max_x - min_x) / 2.0,
        (max_y - min_y) / 2.0,
    );
    for y in y0..=y1 {
        for x in x0..=x1 {
            if point_in_polygon((x as f32 + 0.5, y as f32 + 0.5), points) {
                blend_pixel(image, x, y, color, 1.0);
            }
        }
    }
}

fn point_in_polygon(p: (f32, f32), points: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > p.1) != (yj > p.1) && p.0 < (xj - xi) * (p.1 - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];

    #[test]
    fn test_fill_circle_center_and_corner() {
        let mut img = RgbaImage::new(20, 20);
        fill_circle(&mut img, 10.0, 10.0, 8.0, RED);
        assert_eq!(img.get_pixel(10, 10).0, RED);
        // Ecke liegt außerhalb des Kreises
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_gradient_differs_top_to_bottom() {
        let mut img = RgbaImage::new(20, 20);
        fill_circle_gradient(&mut img, 10.0, 10.0, 9.0, [255, 255, 255, 255], [0, 0, 0, 255]);
        let top = img.get_pixel(10, 3).0;
        let bottom = img.get_pixel(10, 16).0;
        assert!(top[0] > bottom[0]);
    }

    #[test]
    fn test_ring_leaves_center_empty() {
        let mut img = RgbaImage::new(30, 30);
        stroke_ring(&mut img, 15.0, 15.0, 10.0, 2.0, RED);
        assert_eq!(img.get_pixel(15, 15).0[3], 0);
        assert_eq!(img.get_pixel(24, 14).0, RED);
    }

    #[test]
    fn test_line_and_polygon_out_of_bounds_no_panic() {
        let mut img = RgbaImage::new(8, 8);
        draw_line(&mut img, (-10.0, -10.0), (30.0, 30.0), 2.0, RED);
        fill_polygon(&mut img, &[(-5.0, -5.0), (20.0, 0.0), (0.0, 20.0)], RED);
        fill_rounded_rect(&mut img, -3.0, 2.0, 20.0, 4.0, 2.0, RED);
        assert_eq!(img.get_pixel(4, 4).0, RED);
    }

    #[test]
    fn test_polygon_triangle_membership() {
        let mut img = RgbaImage::new(10, 10);
        fill_polygon(&mut img, &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)], RED);
        assert_eq!(img.get_pixel(1, 1).0, RED);
        assert_eq!(img.get_pixel(9, 9).0[3], 0);
    }
}
