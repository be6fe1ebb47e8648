//! Output driver: compose every required size and write it to disk
//!
//! Runs strictly in order and stops at the first failure. Each canvas is
//! composed once and written under every file name its target lists.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::compose::{compose_icon, compose_splash};
use crate::error::{Error, Result};
use crate::platform::{
    head_links, icon_targets, manifest_json, Role, SizeDescriptor, SPLASH_DEVICES,
};
use crate::rendering::{Canvas, Palette};
use crate::GeneratorConfig;

/// A file written by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub role: Role,
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

fn write_canvas(
    canvas: &Canvas,
    dir: &Path,
    descriptor: &SizeDescriptor,
) -> Result<GeneratedAsset> {
    let file_name = descriptor.file_name();
    let path = dir.join(&file_name);
    canvas.save_png(&path)?;
    info!("Generated {file_name}");
    Ok(GeneratedAsset {
        path,
        width: descriptor.width,
        height: descriptor.height,
        role: descriptor.role,
    })
}

/// Write the full icon set into `config.icons_dir()`.
pub fn generate_icons(config: &GeneratorConfig) -> Result<Vec<GeneratedAsset>> {
    let dir = config.icons_dir();
    ensure_dir(&dir)?;

    let palette = Palette::default();
    let glyph = config.glyph.glyph();
    let mut written = Vec::new();
    for target in icon_targets() {
        let canvas = compose_icon(target.size, target.maskable, glyph, &palette)?;
        for descriptor in &target.outputs {
            written.push(write_canvas(&canvas, &dir, descriptor)?);
        }
    }

    info!("All icons saved to {}", dir.display());
    Ok(written)
}

/// Write one launch image per device class into `config.splash_dir()`.
pub fn generate_splash(config: &GeneratorConfig) -> Result<Vec<GeneratedAsset>> {
    let dir = config.splash_dir();
    ensure_dir(&dir)?;

    let palette = Palette::default();
    let mut written = Vec::with_capacity(SPLASH_DEVICES.len());
    for device in &SPLASH_DEVICES {
        let canvas = compose_splash(device.width, device.height, &palette)?;
        written.push(write_canvas(&canvas, &dir, &device.descriptor())?);
    }

    info!("All splash screens saved to {}", dir.display());
    Ok(written)
}

/// Write the manifest `icons` fragment and the head snippet, if configured.
pub fn write_fragments(config: &GeneratorConfig) -> Result<()> {
    if let Some(path) = &config.manifest_path {
        write_text(path, &manifest_json(&icon_targets())?)?;
        info!("Wrote manifest icons to {}", path.display());
    }
    if let Some(path) = &config.head_path {
        write_text(path, &head_links(&SPLASH_DEVICES, Palette::default().primary))?;
        info!("Wrote head links to {}", path.display());
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Icons, then splash screens, then the optional fragments.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<GeneratedAsset>> {
    let mut written = generate_icons(config)?;
    written.extend(generate_splash(config)?);
    write_fragments(config)?;
    Ok(written)
}
