use crate::builder::AtlasBuilder;
use crate::compositing;
use crate::config::AtlasConfig;
use crate::error::{AtlasError, Result};
use crate::model::{Atlas, Insets, Meta, Rect, Region};
use crate::ninepatch::{self, NINE_PATCH_SUFFIX};
use image::{DynamicImage, RgbaImage};
use tracing::{debug, info, instrument};

/// In-memory image to pack. `key` is the filename stem; a `.9` suffix flags
/// the image as a nine-patch candidate and is stripped from the region id.
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: the region catalog and the composed RGBA page.
pub struct AtlasOutput {
    pub atlas: Atlas,
    pub rgba: RgbaImage,
}

struct Prep {
    id: String,
    rgba: RgbaImage,
    nine_patch: Option<Insets>,
}

/// Packs `inputs` into a single atlas page and returns metadata plus pixels.
///
/// Inputs are processed strictly in the given order; the order is observable
/// because it drives the packing layout. The run is atomic: the first error
/// (malformed nine-patch, unbounded growth) aborts with no partial output.
#[instrument(skip_all)]
pub fn pack_images(inputs: Vec<InputImage>, cfg: AtlasConfig) -> Result<AtlasOutput> {
    cfg.validate()?;

    if inputs.is_empty() {
        return Err(AtlasError::Empty);
    }

    // Nine-patch extraction first, so the packer sees post-strip sizes.
    let mut prepared: Vec<Prep> = Vec::with_capacity(inputs.len());
    for inp in &inputs {
        let rgba = inp.image.to_rgba8();
        let (id, rgba, nine_patch) = match inp.key.strip_suffix(NINE_PATCH_SUFFIX) {
            Some(stem) => {
                let (interior, insets) = ninepatch::extract(&inp.key, &rgba)?;
                (stem.to_string(), interior, insets)
            }
            None => (inp.key.clone(), rgba, None),
        };
        let (w, h) = rgba.dimensions();
        debug!(key = %id, w, h, nine_patch = nine_patch.is_some(), "prepared input");
        prepared.push(Prep {
            id,
            rgba,
            nine_patch,
        });
    }

    let mut builder = AtlasBuilder::new(cfg.seed_size);
    for p in &prepared {
        let (w, h) = p.rgba.dimensions();
        builder.place(w, h)?;
    }

    let size = builder.canvas_size();
    let regions: Vec<Region> = prepared
        .iter()
        .zip(builder.positions())
        .map(|(p, &(x, y))| {
            let (w, h) = p.rgba.dimensions();
            Region {
                key: p.id.clone(),
                frame: Rect::new(x, y, w, h),
                nine_patch: p.nine_patch,
            }
        })
        .collect();

    let items: Vec<(&Region, &RgbaImage)> = regions
        .iter()
        .zip(prepared.iter().map(|p| &p.rgba))
        .collect();
    let rgba = compositing::compose(size, size, &items)?;

    let atlas = Atlas {
        width: size,
        height: size,
        regions,
        meta: Meta {
            app: "atlas-baker".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            format: "RGBA8888".into(),
            seed_size: cfg.seed_size,
        },
    };
    info!(
        size,
        regions = atlas.regions.len(),
        occupancy = format!("{:.2}%", atlas.occupancy() * 100.0),
        "atlas baked"
    );
    Ok(AtlasOutput { atlas, rgba })
}
