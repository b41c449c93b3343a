use atlas_baker_core::compositing::{blit_rgba, compose};
use atlas_baker_core::error::AtlasError;
use atlas_baker_core::model::{Rect, Region};
use image::{Rgba, RgbaImage};

fn solid(w: u32, h: u32, px: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    for p in img.pixels_mut() {
        *p = px;
    }
    img
}

fn region(key: &str, x: u32, y: u32, w: u32, h: u32) -> Region {
    Region {
        key: key.into(),
        frame: Rect::new(x, y, w, h),
        nine_patch: None,
    }
}

#[test]
fn blit_copies_all_channels_verbatim() {
    let mut src = RgbaImage::new(3, 2);
    let mut v = 0u8;
    for p in src.pixels_mut() {
        *p = Rgba([v, v.wrapping_add(1), v.wrapping_add(2), v.wrapping_add(3)]);
        v = v.wrapping_add(16);
    }
    let mut canvas = RgbaImage::new(8, 8);
    blit_rgba(&src, &mut canvas, 4, 5);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(canvas.get_pixel(4 + x, 5 + y), src.get_pixel(x, y));
        }
    }
    // Untouched pixels stay transparent black.
    assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(*canvas.get_pixel(7, 7), Rgba([0, 0, 0, 0]));
}

#[test]
fn compose_places_every_region_at_its_offset() {
    let a = solid(4, 4, Rgba([255, 0, 0, 255]));
    let b = solid(2, 6, Rgba([0, 255, 0, 128]));
    let ra = region("a", 0, 0, 4, 4);
    let rb = region("b", 4, 0, 2, 6);
    let canvas = compose(16, 16, &[(&ra, &a), (&rb, &b)]).expect("compose");

    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(*canvas.get_pixel(x, y), Rgba([255, 0, 0, 255]));
        }
    }
    for y in 0..6 {
        for x in 4..6 {
            assert_eq!(*canvas.get_pixel(x, y), Rgba([0, 255, 0, 128]));
        }
    }
    assert_eq!(*canvas.get_pixel(10, 10), Rgba([0, 0, 0, 0]));
}

#[cfg(debug_assertions)]
#[test]
fn out_of_bounds_region_is_caught_in_debug_builds() {
    let src = solid(10, 10, Rgba([1, 2, 3, 4]));
    let r = region("escapee", 250, 250, 10, 10);
    match compose(256, 256, &[(&r, &src)]) {
        Err(AtlasError::RegionOutOfBounds { key }) => assert_eq!(key, "escapee"),
        _ => panic!("expected RegionOutOfBounds"),
    }
}
