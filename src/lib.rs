//! PWA Glyphs
//!
//! Procedurally draws a fixed brand glyph (a house or a paw print) onto raster
//! canvases and writes the PNG icon set and iOS launch images a progressive
//! web app links to.
//!
//! # Outputs
//!
//! - **Icons** (`public/icons`): favicons, standard icons on a rounded square,
//!   full-bleed maskable icons, and the `apple-touch-icon.png` duplicate
//! - **Splash screens** (`public/splash`): one opaque launch image per iOS
//!   device class
//! - **Fragments** (optional): the web manifest `icons` array and the HTML
//!   `<head>` links for the files above
//!
//! # Example
//!
//! ```no_run
//! use pwa_glyphs::{GeneratorConfig, GlyphKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig {
//!     out_dir: "site".into(),
//!     glyph: GlyphKind::Paw,
//!     ..Default::default()
//! };
//!
//! let written = pwa_glyphs::generate_all(&config)?;
//! println!("wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub mod error;
pub use error::{Error, Result};

pub mod compose;
pub mod generate;
pub mod platform;
pub mod rendering;

pub use compose::{compose_icon, compose_splash};
pub use generate::{
    generate_all, generate_icons, generate_splash, write_fragments, GeneratedAsset,
};
pub use rendering::{Canvas, Glyph, GlyphKind, Palette};

/// Configuration for a generator run
///
/// Defaults reproduce the stock asset set relative to the current directory:
/// the house glyph, icons under `public/icons`, splash screens under
/// `public/splash`, and no manifest or head fragments.
///
/// # Examples
///
/// ```
/// let cfg = pwa_glyphs::GeneratorConfig::default();
/// assert!(cfg.icons_dir().ends_with("public/icons"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory that `public/` is created under
    pub out_dir: PathBuf,
    /// Glyph drawn on icons; splash screens always use the house
    pub glyph: GlyphKind,
    /// Where to write the manifest `icons` JSON array, if anywhere
    pub manifest_path: Option<PathBuf>,
    /// Where to write the `<head>` link snippet, if anywhere
    pub head_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            glyph: GlyphKind::House,
            manifest_path: None,
            head_path: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a (possibly partial) JSON config; missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::ConfigError(format!("{}: {e}", path.display())))
    }

    pub fn public_dir(&self) -> PathBuf {
        self.out_dir.join("public")
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.public_dir().join(platform::manifest::ICONS_SUBDIR)
    }

    pub fn splash_dir(&self) -> PathBuf {
        self.public_dir().join(platform::manifest::SPLASH_SUBDIR)
    }
}
