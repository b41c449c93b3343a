use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
    /// Returns true if `r` is fully inside `self` (inclusive edges).
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
}

/// Nine-patch stretch insets decoded from an asset's 1px marker border.
///
/// Measured in pixels of the stripped interior: `left` columns and `top`
/// rows before the stretchable band, `right`/`bottom` after it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// A placed region within the atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Asset id derived from the filename, nine-patch suffix stripped.
    pub key: String,
    /// Placed rectangle; width/height are the post-strip dimensions.
    pub frame: Rect,
    /// Present only when the asset carried non-zero stretch markers.
    pub nine_patch: Option<Insets>,
}

/// Atlas-level metadata carried into manifests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub app: String,
    pub version: String,
    pub format: String,
    /// Side length the canvas started from before any doubling.
    pub seed_size: u32,
}

/// Final atlas: canvas dimensions plus the ordered region catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atlas {
    pub width: u32,
    pub height: u32,
    pub regions: Vec<Region>,
    pub meta: Meta,
}

impl Atlas {
    /// Sum of region areas, in pixels.
    pub fn used_area(&self) -> u64 {
        self.regions
            .iter()
            .map(|r| (r.frame.w as u64) * (r.frame.h as u64))
            .sum()
    }

    /// Canvas area, in pixels.
    pub fn total_area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }

    /// Occupancy ratio: used_area / total_area (0.0 to 1.0).
    pub fn occupancy(&self) -> f64 {
        let total = self.total_area();
        if total > 0 {
            self.used_area() as f64 / total as f64
        } else {
            0.0
        }
    }
}
