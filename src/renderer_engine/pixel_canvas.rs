use image::{Rgba, RgbaImage};
use itertools::Itertools;

use crate::physic_engine::{Color, Vec2};
use crate::renderer_engine::r#trait::Canvas;

/// Surface de confettis rasterisée sur CPU.
///
/// Les pixels sont en RGBA 8 bits, alpha non prémultiplié. Le GPU ne sert
/// qu'à afficher l'image finale (voir `CanvasRenderer`).
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    image: RgbaImage,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Vrai si aucun pixel n'a d'opacité.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p.0[3] == 0)
    }

    pub fn count_painted(&self) -> usize {
        self.image.pixels().filter(|p| p.0[3] > 0).count()
    }

    #[inline]
    fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        *dst = blend_over(*dst, color);
    }

    fn fill_span(&mut self, y: i64, x_start: i64, x_end: i64, color: Color) {
        let width = self.image.width() as i64;
        for x in x_start.max(0)..x_end.min(width) {
            self.blend(x, y, color);
        }
    }
}

/// Composition « source-over » en alpha non prémultiplié.
#[inline]
fn blend_over(dst: Rgba<u8>, src: Color) -> Rgba<u8> {
    let sa = src.w.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let channel = |s: f32, d: u8| -> u8 {
        let d = d as f32 / 255.0;
        let c = (s.clamp(0.0, 1.0) * sa + d * da * (1.0 - sa)) / out_a;
        (c * 255.0).round() as u8
    };

    Rgba([
        channel(src.x, dst.0[0]),
        channel(src.y, dst.0[1]),
        channel(src.z, dst.0[2]),
        (out_a * 255.0).round() as u8,
    ])
}

impl Canvas for PixelCanvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
    }

    fn clear(&mut self) {
        self.image.pixels_mut().for_each(|p| *p = Rgba([0, 0, 0, 0]));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let y0 = (center.y - radius).floor() as i64;
        let y1 = (center.y + radius).ceil() as i64;

        // Échantillonnage au centre des pixels
        for y in y0..=y1 {
            let dy = y as f32 + 0.5 - center.y;
            let rest = r2 - dy * dy;
            if rest < 0.0 {
                continue;
            }
            let half = rest.sqrt();
            let x_start = (center.x - half - 0.5).ceil() as i64;
            let x_end = (center.x + half - 0.5).floor() as i64 + 1;
            self.fill_span(y, x_start, x_end, color);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .map(|p| p.y)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap_or((0.0, 0.0));

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

        // Scanline pair-impair, échantillonnée au centre des pixels
        for y in (min_y.floor() as i64)..=(max_y.ceil() as i64) {
            let sy = y as f32 + 0.5;
            crossings.clear();

            for (a, b) in points.iter().circular_tuple_windows() {
                if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                    let t = (sy - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for (x_a, x_b) in crossings.iter().tuples() {
                let x_start = (x_a - 0.5).ceil() as i64;
                let x_end = (x_b - 0.5).floor() as i64 + 1;
                self.fill_span(y, x_start, x_end, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

    #[test]
    fn test_blend_over_opaque_and_transparent() {
        let dst = Rgba([0, 0, 255, 255]);
        assert_eq!(blend_over(dst, RED), Rgba([255, 0, 0, 255]));
        assert_eq!(blend_over(dst, Color::new(1.0, 0.0, 0.0, 0.0)), dst);
    }

    #[test]
    fn test_blend_over_half_alpha_on_empty() {
        let out = blend_over(Rgba([0, 0, 0, 0]), Color::new(1.0, 0.0, 0.0, 0.5));
        // Alpha non prémultiplié : la couleur reste pleine, seul l'alpha baisse
        assert_eq!(out.0[0], 255);
        assert_eq!(out.0[3], 128);
    }

    #[test]
    fn test_fill_circle_area() {
        let mut canvas = PixelCanvas::new(64, 64);
        canvas.fill_circle(Vec2::new(32.0, 32.0), 5.0, RED);
        let painted = canvas.count_painted() as f32;
        let expected = std::f32::consts::PI * 25.0;
        assert!((painted - expected).abs() < 12.0, "painted = {}", painted);
        assert_eq!(canvas.pixel(32, 32), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(40, 32), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut canvas = PixelCanvas::new(20, 20);
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(12.0, 2.0),
            Vec2::new(12.0, 12.0),
            Vec2::new(2.0, 12.0),
        ];
        canvas.fill_polygon(&square, RED);
        assert_eq!(canvas.count_painted(), 100);
        assert_eq!(canvas.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(12, 12), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_shapes_are_clipped_to_surface() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_circle(Vec2::new(-3.0, 5.0), 5.0, RED);
        canvas.fill_polygon(
            &[
                Vec2::new(8.0, 8.0),
                Vec2::new(30.0, 8.0),
                Vec2::new(30.0, 30.0),
            ],
            RED,
        );
        assert!(canvas.count_painted() > 0);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_circle(Vec2::new(5.0, 5.0), 3.0, RED);
        assert!(!canvas.is_blank());
        canvas.clear();
        assert!(canvas.is_blank());

        canvas.resize(30, 7);
        assert_eq!(canvas.size(), (30, 7));
        assert!(canvas.is_blank());
    }
}
