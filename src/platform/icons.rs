//! Icon size table and the file names web manifests and HTML heads link to

/// What an emitted file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Favicon,
    StandardIcon,
    MaskableIcon,
    AppleTouchIcon,
    Splash,
}

/// Dimensions plus role; together they determine the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeDescriptor {
    pub width: u32,
    pub height: u32,
    pub role: Role,
}

impl SizeDescriptor {
    pub fn square(size: u32, role: Role) -> Self {
        Self {
            width: size,
            height: size,
            role,
        }
    }

    /// File name consumers link to. Renaming breaks those links.
    pub fn file_name(&self) -> String {
        let (w, h) = (self.width, self.height);
        match self.role {
            Role::Favicon => format!("favicon-{w}x{h}.png"),
            Role::StandardIcon => format!("icon-{w}x{h}.png"),
            Role::MaskableIcon => format!("icon-maskable-{w}x{h}.png"),
            Role::AppleTouchIcon => "apple-touch-icon.png".to_string(),
            Role::Splash => format!("apple-splash-{w}-{h}.png"),
        }
    }
}

pub const STANDARD_SIZES: [u32; 12] = [16, 32, 72, 96, 128, 144, 152, 167, 180, 192, 384, 512];
pub const FAVICON_SIZES: [u32; 2] = [16, 32];
pub const MASKABLE_SIZES: [u32; 2] = [192, 512];
pub const APPLE_TOUCH_SIZE: u32 = 180;
/// Sizes only iOS asks for; the web manifest leaves them out.
pub const APPLE_ONLY_SIZES: [u32; 2] = [167, APPLE_TOUCH_SIZE];

/// One composed canvas and every file written from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub maskable: bool,
    pub outputs: Vec<SizeDescriptor>,
}

/// Standard sizes in ascending order, then the maskable variants.
pub fn icon_targets() -> Vec<IconTarget> {
    let standard = STANDARD_SIZES.iter().map(|&size| {
        let mut outputs = Vec::with_capacity(2);
        if FAVICON_SIZES.contains(&size) {
            outputs.push(SizeDescriptor::square(size, Role::Favicon));
        } else {
            outputs.push(SizeDescriptor::square(size, Role::StandardIcon));
        }
        if size == APPLE_TOUCH_SIZE {
            outputs.push(SizeDescriptor::square(size, Role::AppleTouchIcon));
        }
        IconTarget {
            size,
            maskable: false,
            outputs,
        }
    });
    let maskable = MASKABLE_SIZES.iter().map(|&size| IconTarget {
        size,
        maskable: true,
        outputs: vec![SizeDescriptor::square(size, Role::MaskableIcon)],
    });
    standard.chain(maskable).collect()
}
