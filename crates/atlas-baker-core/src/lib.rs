//! Core library for baking a folder of images into a single texture atlas.
//!
//! - Packing: deterministic leftmost-first skyline on a square canvas that
//!   doubles from a seed size whenever a rectangle fails to fit
//! - Nine-patch: assets keyed `name.9` get their 1px marker border decoded
//!   into stretch insets and stripped before packing
//! - Pipeline: `pack_images` takes in-memory images and returns the placed
//!   region catalog plus the composed RGBA page
//! - Manifests: XML (`.xmat` dialect) and JSON exporters
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use atlas_baker_core::{AtlasConfig, InputImage, pack_images};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("button.9.png")?.decode()?;
//! let img2 = ImageReader::open("icon.png")?.decode()?;
//! let inputs = vec![
//!     InputImage { key: "button.9".into(), image: img1 },
//!     InputImage { key: "icon".into(), image: img2 },
//! ];
//! let out = pack_images(inputs, AtlasConfig::default())?;
//! println!("atlas: {}x{}", out.atlas.width, out.atlas.height);
//! # Ok(()) }
//! ```

pub mod builder;
pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod ninepatch;
pub mod packer;
pub mod pipeline;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `atlas_baker_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::builder::AtlasBuilder;
    pub use crate::config::{AtlasConfig, AtlasConfigBuilder};
    pub use crate::model::{Atlas, Insets, Meta, Rect, Region};
    pub use crate::packer::SkylinePacker;
    pub use crate::{pack_images, AtlasOutput, InputImage};
}
