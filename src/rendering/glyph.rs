//! Glyph tables and their layout onto a canvas
//!
//! Each glyph is a static list of primitives authored against a 100-unit
//! canvas, with coordinates relative to the glyph center. Laying a glyph out
//! multiplies every coordinate by `scale` and offsets it by the center, so all
//! rendered sizes are self-similar.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rendering::paint::{PaintCommand, Rgb};
use crate::rendering::raster::Canvas;

/// Which color a primitive is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Mark,
    Cutout,
}

/// A primitive in glyph units, relative to the glyph center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Polygon(&'static [(f32, f32)]),
    Rect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub fill: Fill,
}

const fn mark(shape: Shape) -> Primitive {
    Primitive {
        shape,
        fill: Fill::Mark,
    }
}

const fn cutout(shape: Shape) -> Primitive {
    Primitive {
        shape,
        fill: Fill::Cutout,
    }
}

const ROOF: &[(f32, f32)] = &[(0.0, -17.5), (-30.0, 0.0), (30.0, 0.0)];

const HOUSE_PRIMITIVES: &[Primitive] = &[
    mark(Shape::Polygon(ROOF)),
    // body overlaps the roof base by 2 units
    mark(Shape::Rect {
        left: -25.0,
        top: -2.0,
        right: 25.0,
        bottom: 22.5,
    }),
    // door
    cutout(Shape::Rect {
        left: -6.0,
        top: 4.5,
        right: 6.0,
        bottom: 22.5,
    }),
    // window
    cutout(Shape::Rect {
        left: -17.0,
        top: 8.0,
        right: -7.0,
        bottom: 18.0,
    }),
];

// Toes sit on a 24-unit arc around the pad center (0, 8) at -150, -110,
// -70 and -30 degrees.
const PAW_PRIMITIVES: &[Primitive] = &[
    mark(Shape::Ellipse {
        cx: 0.0,
        cy: 8.0,
        rx: 14.0,
        ry: 12.0,
    }),
    mark(Shape::Ellipse {
        cx: -20.78,
        cy: -4.0,
        rx: 6.0,
        ry: 7.5,
    }),
    mark(Shape::Ellipse {
        cx: -8.21,
        cy: -14.55,
        rx: 6.5,
        ry: 8.0,
    }),
    mark(Shape::Ellipse {
        cx: 8.21,
        cy: -14.55,
        rx: 6.5,
        ry: 8.0,
    }),
    mark(Shape::Ellipse {
        cx: 20.78,
        cy: -4.0,
        rx: 6.0,
        ry: 7.5,
    }),
];

/// A symbolic mark that can be drawn at any center and scale.
pub trait Glyph: Send + Sync {
    fn name(&self) -> &'static str;

    fn primitives(&self) -> &'static [Primitive];

    /// Lay the glyph out in canvas coordinates.
    fn layout(&self, cx: f32, cy: f32, scale: f32, color: Rgb, cutout: Rgb) -> Vec<PaintCommand> {
        self.primitives()
            .iter()
            .map(|p| {
                let color = match p.fill {
                    Fill::Mark => color,
                    Fill::Cutout => cutout,
                };
                place(p.shape, cx, cy, scale, color)
            })
            .collect()
    }
}

/// Roof, body, and a door and window cut into the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct House;

impl Glyph for House {
    fn name(&self) -> &'static str {
        "house"
    }

    fn primitives(&self) -> &'static [Primitive] {
        HOUSE_PRIMITIVES
    }
}

/// A main pad and four toes, all in the mark color.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawPrint;

impl Glyph for PawPrint {
    fn name(&self) -> &'static str {
        "paw"
    }

    fn primitives(&self) -> &'static [Primitive] {
        PAW_PRIMITIVES
    }
}

/// Glyph selection for icon sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    #[default]
    House,
    Paw,
}

impl GlyphKind {
    pub fn glyph(self) -> &'static dyn Glyph {
        match self {
            GlyphKind::House => &House,
            GlyphKind::Paw => &PawPrint,
        }
    }
}

fn place(shape: Shape, cx: f32, cy: f32, scale: f32, color: Rgb) -> PaintCommand {
    match shape {
        Shape::Polygon(points) => PaintCommand::Polygon {
            points: points
                .iter()
                .map(|&(x, y)| (cx + x * scale, cy + y * scale))
                .collect(),
            color,
        },
        Shape::Rect {
            left,
            top,
            right,
            bottom,
        } => PaintCommand::Rect {
            left: cx + left * scale,
            top: cy + top * scale,
            right: cx + right * scale,
            bottom: cy + bottom * scale,
            color,
        },
        Shape::Ellipse {
            cx: ex,
            cy: ey,
            rx,
            ry,
        } => PaintCommand::Ellipse {
            cx: cx + ex * scale,
            cy: cy + ey * scale,
            rx: rx * scale,
            ry: ry * scale,
            color,
        },
    }
}

/// Draw `glyph` centered at (`cx`, `cy`) onto `canvas`.
pub fn render(
    canvas: &mut Canvas,
    glyph: &dyn Glyph,
    cx: f32,
    cy: f32,
    scale: f32,
    color: Rgb,
    cutout: Rgb,
) -> Result<()> {
    let commands = glyph.layout(cx, cy, scale, color, cutout);
    log::debug!(
        "drawing {} glyph at ({cx}, {cy}) scale {scale}: {} primitives",
        glyph.name(),
        commands.len()
    );
    canvas.paint_all(&commands)
}
