//! Platform conventions: icon size tables, iOS device classes, and the
//! manifest/head fragments that link to the generated files.

pub mod device;
pub mod icons;
pub mod manifest;

pub use device::{DeviceMetrics, SPLASH_DEVICES};
pub use icons::{icon_targets, IconTarget, Role, SizeDescriptor};
pub use manifest::{head_links, manifest_icons, manifest_json, ManifestIcon};
