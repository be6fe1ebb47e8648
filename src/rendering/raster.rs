//! Canvas allocation, rasterization of paint commands, and PNG encoding

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use tiny_skia::{Color, FillRule, Paint, Path as SkPath, PathBuilder, Pixmap, Rect, Transform};

use crate::error::{Error, Result};
use crate::rendering::paint::{PaintCommand, Rgb};

// Cubic Bezier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Whether a canvas keeps its alpha channel when encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    /// Starts fully transparent, encoded as RGBA
    Transparent,
    /// Starts filled with a solid color, encoded as RGB
    Opaque,
}

/// A raster target for one output file.
pub struct Canvas {
    pixmap: Pixmap,
    alpha: AlphaMode,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn transparent(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::InvalidCanvas { width, height })?;
        Ok(Self {
            pixmap,
            alpha: AlphaMode::Transparent,
        })
    }

    /// A canvas pre-filled with `background` and encoded without alpha.
    pub fn opaque(width: u32, height: u32, background: Rgb) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(Error::InvalidCanvas { width, height })?;
        pixmap.fill(to_color(background));
        Ok(Self {
            pixmap,
            alpha: AlphaMode::Opaque,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn alpha_mode(&self) -> AlphaMode {
        self.alpha
    }

    /// Flood the whole canvas with `color`, discarding what was there.
    pub fn fill(&mut self, color: Rgb) {
        self.pixmap.fill(to_color(color));
    }

    /// Demultiplied RGBA at (`x`, `y`), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // the pixmap only checks the flat index, so (width, y) would wrap
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn paint(&mut self, cmd: &PaintCommand) -> Result<()> {
        let mut paint = Paint::default();
        let c = cmd.color();
        paint.set_color_rgba8(c.r, c.g, c.b, 255);
        // Backgrounds keep hard edges so pixels outside the corner radius
        // stay fully transparent; glyph edges are smoothed.
        paint.anti_alias = !matches!(cmd, PaintCommand::RoundedRect { .. });

        match cmd {
            PaintCommand::Rect {
                left,
                top,
                right,
                bottom,
                ..
            } => {
                // fill_rect trips tiny-skia's hairline path on ~1px rects
                let path = PathBuilder::from_rect(rect(*left, *top, *right, *bottom)?);
                self.fill_path(&path, &paint);
            }
            PaintCommand::Polygon { points, .. } => {
                let path = polygon_path(points)?;
                self.fill_path(&path, &paint);
            }
            PaintCommand::Ellipse { cx, cy, rx, ry, .. } => {
                let bounds = rect(cx - rx, cy - ry, cx + rx, cy + ry)?;
                let path = PathBuilder::from_oval(bounds)
                    .ok_or_else(|| Error::Geometry(format!("ellipse {bounds:?}")))?;
                self.fill_path(&path, &paint);
            }
            PaintCommand::RoundedRect {
                left,
                top,
                right,
                bottom,
                radius,
                ..
            } => {
                let path = rounded_rect_path(rect(*left, *top, *right, *bottom)?, *radius)?;
                self.fill_path(&path, &paint);
            }
        }
        Ok(())
    }

    pub fn paint_all(&mut self, cmds: &[PaintCommand]) -> Result<()> {
        cmds.iter().try_for_each(|cmd| self.paint(cmd))
    }

    fn fill_path(&mut self, path: &SkPath, paint: &Paint) {
        self.pixmap
            .fill_path(path, paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Convert to an `image` buffer, dropping alpha for opaque canvases.
    pub fn to_image(&self) -> Result<DynamicImage> {
        let (width, height) = (self.width(), self.height());
        let pixels = self.pixmap.pixels().iter().map(|p| p.demultiply());
        let image = match self.alpha {
            AlphaMode::Transparent => {
                let raw = pixels
                    .flat_map(|c| [c.red(), c.green(), c.blue(), c.alpha()])
                    .collect();
                RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8)
            }
            AlphaMode::Opaque => {
                let raw = pixels.flat_map(|c| [c.red(), c.green(), c.blue()]).collect();
                RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8)
            }
        };
        image.ok_or(Error::InvalidCanvas { width, height })
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.to_image()?.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let data = self.encode_png()?;
        std::fs::write(path, data).map_err(|e| Error::io(path, e))
    }
}

fn to_color(c: Rgb) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn rect(left: f32, top: f32, right: f32, bottom: f32) -> Result<Rect> {
    let degenerate = || Error::Geometry(format!("rect ({left}, {top}, {right}, {bottom})"));
    // NaN fails both comparisons
    if !(right > left && bottom > top) {
        return Err(degenerate());
    }
    Rect::from_ltrb(left, top, right, bottom).ok_or_else(degenerate)
}

fn polygon_path(points: &[(f32, f32)]) -> Result<SkPath> {
    let mut pb = PathBuilder::new();
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        pb.move_to(x, y);
    }
    for &(x, y) in iter {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
        .ok_or_else(|| Error::Geometry(format!("polygon {points:?}")))
}

/// Rectangle with circular corners; the radius is clamped to half the
/// shorter side.
fn rounded_rect_path(r: Rect, radius: f32) -> Result<SkPath> {
    let radius = radius.min(r.width() / 2.0).min(r.height() / 2.0);
    if radius <= 0.0 {
        return Ok(PathBuilder::from_rect(r));
    }
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    let k = radius * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + radius, t);
    pb.line_to(rt - radius, t);
    pb.cubic_to(rt - radius + k, t, rt, t + radius - k, rt, t + radius);
    pb.line_to(rt, b - radius);
    pb.cubic_to(rt, b - radius + k, rt - radius + k, b, rt - radius, b);
    pb.line_to(l + radius, b);
    pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
    pb.line_to(l, t + radius);
    pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
    pb.close();
    pb.finish()
        .ok_or_else(|| Error::Geometry(format!("rounded rect {r:?} radius {radius}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::{PRIMARY, WHITE};

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::transparent(0, 16),
            Err(Error::InvalidCanvas { width: 0, height: 16 })
        ));
    }

    #[test]
    fn transparent_canvas_starts_clear() {
        let c = Canvas::transparent(8, 4).unwrap();
        assert_eq!(c.width(), 8);
        assert_eq!(c.height(), 4);
        assert_eq!(c.pixel(3, 3).unwrap()[3], 0);
        assert!(c.pixel(8, 0).is_none());
        assert!(c.pixel(0, 4).is_none());
        assert!(c.pixel(7, 3).is_some());
    }

    #[test]
    fn rect_fills_interior() {
        let mut c = Canvas::transparent(20, 20).unwrap();
        c.paint(&PaintCommand::Rect {
            left: 5.0,
            top: 5.0,
            right: 15.0,
            bottom: 15.0,
            color: PRIMARY,
        })
        .unwrap();
        assert_eq!(c.pixel(10, 10), Some([79, 70, 229, 255]));
        assert_eq!(c.pixel(1, 1).unwrap()[3], 0);
    }

    #[test]
    fn rounded_rect_leaves_corners_clear() {
        let mut c = Canvas::transparent(100, 100).unwrap();
        c.paint(&PaintCommand::RoundedRect {
            left: 0.0,
            top: 0.0,
            right: 100.0,
            bottom: 100.0,
            radius: 20.0,
            color: WHITE,
        })
        .unwrap();
        assert_eq!(c.pixel(0, 0).unwrap()[3], 0);
        assert_eq!(c.pixel(99, 99).unwrap()[3], 0);
        assert_eq!(c.pixel(50, 0), Some([255, 255, 255, 255]));
        assert_eq!(c.pixel(50, 50), Some([255, 255, 255, 255]));
    }

    #[test]
    fn pixel_wide_rect_fills() {
        let mut c = Canvas::transparent(16, 16).unwrap();
        c.paint(&PaintCommand::Rect {
            left: 7.3,
            top: 4.0,
            right: 8.34,
            bottom: 6.2,
            color: PRIMARY,
        })
        .unwrap();
        assert!(c.pixel(7, 5).unwrap()[3] > 0);
        assert_eq!(c.pixel(2, 5).unwrap()[3], 0);
    }

    #[test]
    fn small_rounded_rect_has_hard_corners() {
        // radius 3 would leave a faint corner pixel if anti-aliased
        let mut c = Canvas::transparent(16, 16).unwrap();
        c.paint(&PaintCommand::RoundedRect {
            left: 0.0,
            top: 0.0,
            right: 16.0,
            bottom: 16.0,
            radius: 3.0,
            color: PRIMARY,
        })
        .unwrap();
        assert_eq!(c.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(c.pixel(15, 15), Some([0, 0, 0, 0]));
        assert_eq!(c.pixel(8, 0), Some([79, 70, 229, 255]));
    }

    #[test]
    fn degenerate_ellipse_is_an_error() {
        let mut c = Canvas::transparent(10, 10).unwrap();
        let err = c
            .paint(&PaintCommand::Ellipse {
                cx: 5.0,
                cy: 5.0,
                rx: 0.0,
                ry: 3.0,
                color: WHITE,
            })
            .unwrap_err();
        assert!(matches!(err, Error::Geometry(_)));
    }

    #[test]
    fn opaque_canvas_encodes_without_alpha() {
        let c = Canvas::opaque(6, 3, PRIMARY).unwrap();
        let png = c.encode_png().unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8().get_pixel(5, 2).0, [79, 70, 229]);
    }

    #[test]
    fn transparent_canvas_encodes_with_alpha() {
        let c = Canvas::transparent(4, 4).unwrap();
        let decoded = image::load_from_memory(&c.encode_png().unwrap()).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
    }
}
