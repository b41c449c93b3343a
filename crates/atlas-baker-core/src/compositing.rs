use crate::error::{AtlasError, Result};
use crate::model::Region;
use image::RgbaImage;

/// Blit `src` into `canvas` with its top-left at (dx, dy).
///
/// All four channels are copied verbatim; no blending or color conversion.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if dx + xx < cw && dy + yy < ch {
                canvas.put_pixel(dx + xx, dy + yy, *src.get_pixel(xx, yy));
            }
        }
    }
}

/// Allocates the final canvas and blits every region's buffer at its
/// assigned offset. Pixels not covered by any region stay transparent black.
///
/// The packer guarantees regions are disjoint and in bounds; debug builds
/// re-check the bounds and fail with `RegionOutOfBounds` on a violation.
pub fn compose(width: u32, height: u32, items: &[(&Region, &RgbaImage)]) -> Result<RgbaImage> {
    let mut canvas = RgbaImage::new(width, height);
    for (region, src) in items {
        if cfg!(debug_assertions) {
            let r = &region.frame;
            if (r.x as u64 + r.w as u64) > width as u64 || (r.y as u64 + r.h as u64) > height as u64
            {
                return Err(AtlasError::RegionOutOfBounds {
                    key: region.key.clone(),
                });
            }
        }
        blit_rgba(src, &mut canvas, region.frame.x, region.frame.y);
    }
    Ok(canvas)
}
