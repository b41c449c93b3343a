//! Nine-patch marker decoding and border stripping.
//!
//! A nine-patch candidate (asset key ending in [`NINE_PATCH_SUFFIX`]) carries
//! a 1px frame whose top row and left column encode the stretchable band as a
//! run of black, mostly-opaque pixels. The frame is always stripped; the
//! decoded insets are attached only when at least one of them is non-zero.

use crate::error::{AtlasError, Result};
use crate::model::Insets;
use image::{Rgba, RgbaImage};

/// Filename-stem suffix that flags an asset as a nine-patch candidate.
pub const NINE_PATCH_SUFFIX: &str = ".9";

/// Marker predicate for border pixels: black and more than half opaque.
/// The alpha threshold is a strict `> 128`; 128 itself does not qualify.
#[inline]
pub fn is_marker(px: &Rgba<u8>) -> bool {
    px[0] == 0 && px[3] > 128
}

/// Scans one border axis of length `len` and returns `(lead, trail)` insets.
///
/// The first marker at index `i0` with a contiguous run of `run` pixels
/// yields `lead = i0 - 1` and `trail = len - 2 - lead - run`; scanning stops
/// at the first gap after the run begins. An axis without any marker
/// contributes `(0, 0)`.
fn scan_axis(len: u32, pixel_at: impl Fn(u32) -> Rgba<u8>) -> (i32, i32) {
    let mut first: Option<u32> = None;
    let mut run: u32 = 0;
    for i in 0..len {
        if is_marker(&pixel_at(i)) {
            if first.is_none() {
                first = Some(i);
            }
            run += 1;
        } else if first.is_some() {
            break;
        }
    }
    match first {
        Some(i0) => {
            let lead = i0 as i32 - 1;
            let trail = len as i32 - 2 - lead - run as i32;
            (lead, trail)
        }
        None => (0, 0),
    }
}

/// Decodes stretch insets from `image`'s 1px border and strips the border.
///
/// Returns the `(w-2) x (h-2)` interior buffer and the insets, or `None`
/// insets when all four came out zero (the asset is then treated as a plain
/// image). The input buffer is left untouched; `key` is only used for error
/// reporting.
pub fn extract(key: &str, image: &RgbaImage) -> Result<(RgbaImage, Option<Insets>)> {
    let (w, h) = image.dimensions();
    if w < 2 || h < 2 {
        return Err(AtlasError::MalformedNinePatch {
            key: key.to_string(),
            width: w,
            height: h,
        });
    }

    let (left, right) = scan_axis(w, |i| *image.get_pixel(i, 0));
    let (top, bottom) = scan_axis(h, |i| *image.get_pixel(0, i));
    let insets = Insets {
        left,
        top,
        right,
        bottom,
    };

    let mut interior = RgbaImage::new(w - 2, h - 2);
    for y in 0..h - 2 {
        for x in 0..w - 2 {
            interior.put_pixel(x, y, *image.get_pixel(x + 1, y + 1));
        }
    }

    // All-zero insets reclassify the asset as a plain image, but the border
    // has already been consumed either way.
    let insets = if insets.is_zero() { None } else { Some(insets) };
    Ok((interior, insets))
}
