//! Paint command set shared by glyph layout and the rasterizer

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Indigo-600, the brand accent
pub const PRIMARY: Rgb = Rgb::new(79, 70, 229);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
/// Slate-50, behind every splash screen
pub const SPLASH_BACKGROUND: Rgb = Rgb::new(248, 250, 252);

/// The fixed color set every asset is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub light: Rgb,
    pub background: Rgb,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            primary: PRIMARY,
            light: WHITE,
            background: SPLASH_BACKGROUND,
        }
    }

    /// Color for door/window cutouts so they read against `mark`:
    /// a light mark gets primary cutouts, anything else gets light ones.
    pub fn cutout_for(&self, mark: Rgb) -> Rgb {
        if mark == self.light {
            self.primary
        } else {
            self.light
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// A filled shape in absolute canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Polygon {
        points: Vec<(f32, f32)>,
        color: Rgb,
    },
    Rect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        color: Rgb,
    },
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        color: Rgb,
    },
    RoundedRect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        radius: f32,
        color: Rgb,
    },
}

impl PaintCommand {
    pub fn color(&self) -> Rgb {
        match self {
            PaintCommand::Polygon { color, .. }
            | PaintCommand::Rect { color, .. }
            | PaintCommand::Ellipse { color, .. }
            | PaintCommand::RoundedRect { color, .. } => *color,
        }
    }

    /// Axis-aligned bounds as `(left, top, right, bottom)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        match self {
            PaintCommand::Polygon { points, .. } => points.iter().fold(
                (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
                |(l, t, r, b), &(x, y)| (l.min(x), t.min(y), r.max(x), b.max(y)),
            ),
            PaintCommand::Rect {
                left,
                top,
                right,
                bottom,
                ..
            }
            | PaintCommand::RoundedRect {
                left,
                top,
                right,
                bottom,
                ..
            } => (*left, *top, *right, *bottom),
            PaintCommand::Ellipse { cx, cy, rx, ry, .. } => (cx - rx, cy - ry, cx + rx, cy + ry),
        }
    }
}
