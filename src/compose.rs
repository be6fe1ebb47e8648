//! Canvas composition for icons and splash screens
//!
//! Glyph design constants are authored against a 100-unit canvas, so the base
//! scale of any canvas is its reference dimension divided by 100.

use log::debug;

use crate::error::Result;
use crate::rendering::glyph::{self, Glyph, House};
use crate::rendering::{Canvas, PaintCommand, Palette};

/// Glyph scale for maskable icons; keeps the mark inside the central safe zone.
pub const MASKABLE_GLYPH_SCALE: f32 = 0.55;
/// Glyph scale for icons and splash containers with no safe-zone constraint.
pub const ICON_GLYPH_SCALE: f32 = 0.65;
/// Corner radius of rounded backgrounds, relative to their side.
pub const CORNER_RADIUS_RATIO: f32 = 0.2;
/// Splash icon container side, relative to the shorter canvas dimension.
pub const SPLASH_CONTAINER_RATIO: f32 = 0.25;
/// How far above vertical center the splash container sits, relative to height.
pub const SPLASH_LIFT_RATIO: f32 = 0.05;

fn corner_radius(side: f32) -> f32 {
    (side * CORNER_RADIUS_RATIO).floor()
}

/// Compose a square icon.
///
/// Maskable icons are a full-bleed primary fill with no transparent pixels.
/// Other icons sit on a rounded primary square with transparent corners.
/// The glyph is drawn in the palette's light color either way.
pub fn compose_icon(
    size: u32,
    maskable: bool,
    glyph: &dyn Glyph,
    palette: &Palette,
) -> Result<Canvas> {
    debug!("composing {size}x{size} {} icon (maskable: {maskable})", glyph.name());
    let mut canvas = Canvas::transparent(size, size)?;

    let side = size as f32;
    let center = side / 2.0;
    let base = side / 100.0;

    let glyph_scale = if maskable {
        canvas.fill(palette.primary);
        base * MASKABLE_GLYPH_SCALE
    } else {
        canvas.paint(&PaintCommand::RoundedRect {
            left: 0.0,
            top: 0.0,
            right: side,
            bottom: side,
            radius: corner_radius(side),
            color: palette.primary,
        })?;
        base * ICON_GLYPH_SCALE
    };

    let mark = palette.light;
    glyph::render(
        &mut canvas,
        glyph,
        center,
        center,
        glyph_scale,
        mark,
        palette.cutout_for(mark),
    )?;
    Ok(canvas)
}

/// Compose an opaque launch image with the house in a rounded container.
///
/// Cutouts take the splash background color so they read as holes through
/// the container rather than white shapes.
pub fn compose_splash(width: u32, height: u32, palette: &Palette) -> Result<Canvas> {
    debug!("composing {width}x{height} splash");
    let mut canvas = Canvas::opaque(width, height, palette.background)?;

    let (w, h) = (width as f32, height as f32);
    let cx = w / 2.0;
    let cy = h / 2.0 - h * SPLASH_LIFT_RATIO;

    let side = w.min(h) * SPLASH_CONTAINER_RATIO;
    let half = side / 2.0;
    canvas.paint(&PaintCommand::RoundedRect {
        left: cx - half,
        top: cy - half,
        right: cx + half,
        bottom: cy + half,
        radius: corner_radius(side),
        color: palette.primary,
    })?;

    let scale = side / 100.0 * ICON_GLYPH_SCALE;
    glyph::render(
        &mut canvas,
        &House,
        cx,
        cy,
        scale,
        palette.light,
        palette.background,
    )?;
    Ok(canvas)
}
