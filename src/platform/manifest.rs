//! Web manifest and HTML head fragments that reference the generated files
//!
//! Paths are relative to the `public/` directory the assets are written under,
//! which is the web root the app is served from.

use serde::Serialize;

use crate::error::Result;
use crate::platform::device::DeviceMetrics;
use crate::platform::icons::{
    IconTarget, Role, SizeDescriptor, APPLE_ONLY_SIZES, APPLE_TOUCH_SIZE,
};
use crate::rendering::Rgb;

pub const ICONS_SUBDIR: &str = "icons";
pub const SPLASH_SUBDIR: &str = "splash";

/// One entry of a web manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: &'static str,
    pub purpose: &'static str,
}

/// Manifest entries for every non-Apple standard icon (purpose `any`) and
/// every maskable icon (purpose `maskable`). Favicons are left out.
pub fn manifest_icons(targets: &[IconTarget]) -> Vec<ManifestIcon> {
    targets
        .iter()
        .flat_map(|t| t.outputs.iter())
        .filter_map(|d| {
            let purpose = match d.role {
                Role::StandardIcon if !APPLE_ONLY_SIZES.contains(&d.width) => "any",
                Role::MaskableIcon => "maskable",
                _ => return None,
            };
            Some(ManifestIcon {
                src: format!("{ICONS_SUBDIR}/{}", d.file_name()),
                sizes: format!("{}x{}", d.width, d.height),
                mime: "image/png",
                purpose,
            })
        })
        .collect()
}

pub fn manifest_json(targets: &[IconTarget]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&manifest_icons(targets))?)
}

/// `<head>` tags for the theme color, the touch icon, and one launch image per
/// device class, each preceded by a comment naming the models it covers.
pub fn head_links(devices: &[DeviceMetrics], theme: Rgb) -> String {
    let touch = SizeDescriptor::square(APPLE_TOUCH_SIZE, Role::AppleTouchIcon);
    let mut out = String::new();
    out.push_str(&format!(
        "<meta name=\"theme-color\" content=\"{}\">\n",
        theme.to_hex()
    ));
    out.push_str(&format!(
        "<link rel=\"apple-touch-icon\" href=\"/{ICONS_SUBDIR}/{}\">\n",
        touch.file_name()
    ));
    for d in devices {
        out.push_str(&format!("<!-- {} -->\n", d.models));
        out.push_str(&format!(
            "<link rel=\"apple-touch-startup-image\" media=\"{}\" href=\"/{SPLASH_SUBDIR}/{}\">\n",
            d.media_query(),
            d.descriptor().file_name()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::device::SPLASH_DEVICES;
    use crate::platform::icons::icon_targets;
    use crate::rendering::PRIMARY;

    #[test]
    fn manifest_lists_web_sizes_and_maskables() {
        let icons = manifest_icons(&icon_targets());
        let srcs: Vec<&str> = icons.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(
            srcs,
            vec![
                "icons/icon-72x72.png",
                "icons/icon-96x96.png",
                "icons/icon-128x128.png",
                "icons/icon-144x144.png",
                "icons/icon-152x152.png",
                "icons/icon-192x192.png",
                "icons/icon-384x384.png",
                "icons/icon-512x512.png",
                "icons/icon-maskable-192x192.png",
                "icons/icon-maskable-512x512.png",
            ]
        );
        assert!(icons[..8].iter().all(|i| i.purpose == "any"));
        assert!(icons[8..].iter().all(|i| i.purpose == "maskable"));
    }

    #[test]
    fn manifest_json_uses_type_key() {
        let json = manifest_json(&icon_targets()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["type"], "image/png");
        assert_eq!(v[0]["sizes"], "72x72");
    }

    #[test]
    fn head_has_one_startup_image_per_device() {
        let head = head_links(&SPLASH_DEVICES, PRIMARY);
        assert_eq!(head.matches("apple-touch-startup-image").count(), 8);
        assert!(head.contains("href=\"/icons/apple-touch-icon.png\""));
        assert!(head.contains("href=\"/splash/apple-splash-750-1334.png\""));
        assert!(head.contains("content=\"#4f46e5\""));
        assert!(head.contains("<!-- iPhone SE, 8, 7, 6s, 6 -->"));
    }
}
