//! iOS device classes that need a dedicated launch image

use crate::platform::icons::{Role, SizeDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceMetrics {
    /// Physical pixels in portrait orientation
    pub width: u32,
    pub height: u32,
    /// CSS points, as seen by media queries
    pub css_width: u32,
    pub css_height: u32,
    pub dpr: u32,
    pub models: &'static str,
}

impl DeviceMetrics {
    const fn new(css_width: u32, css_height: u32, dpr: u32, models: &'static str) -> Self {
        Self {
            width: css_width * dpr,
            height: css_height * dpr,
            css_width,
            css_height,
            dpr,
            models,
        }
    }

    pub fn descriptor(&self) -> SizeDescriptor {
        SizeDescriptor {
            width: self.width,
            height: self.height,
            role: Role::Splash,
        }
    }

    /// Media query that selects this device's launch image.
    pub fn media_query(&self) -> String {
        format!(
            concat!(
                "(device-width: {}px) and (device-height: {}px) and ",
                "(-webkit-device-pixel-ratio: {}) and (orientation: portrait)",
            ),
            self.css_width, self.css_height, self.dpr
        )
    }
}

pub const SPLASH_DEVICES: [DeviceMetrics; 8] = [
    DeviceMetrics::new(375, 667, 2, "iPhone SE, 8, 7, 6s, 6"),
    DeviceMetrics::new(414, 736, 3, "iPhone 8 Plus, 7 Plus, 6s Plus, 6 Plus"),
    DeviceMetrics::new(375, 812, 3, "iPhone X, Xs, 11 Pro, 12 mini, 13 mini"),
    DeviceMetrics::new(414, 896, 2, "iPhone Xr, 11"),
    DeviceMetrics::new(414, 896, 3, "iPhone Xs Max, 11 Pro Max"),
    DeviceMetrics::new(428, 926, 3, "iPhone 12 Pro Max, 13 Pro Max, 14 Plus"),
    DeviceMetrics::new(393, 852, 3, "iPhone 14 Pro, 15, 15 Pro"),
    DeviceMetrics::new(430, 932, 3, "iPhone 14 Pro Max, 15 Plus, 15 Pro Max"),
];
