//! Rendering: paint commands, glyph tables, and the tiny-skia rasterizer

pub mod glyph;
pub mod paint;
pub mod raster;

pub use glyph::{Glyph, GlyphKind, House, PawPrint};
pub use paint::{PaintCommand, Palette, Rgb, PRIMARY, SPLASH_BACKGROUND, WHITE};
pub use raster::{AlphaMode, Canvas};
