use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Nothing to pack")]
    Empty,
    #[error("Nine-patch image `{key}` is {width}x{height}; a 1px marker border needs at least 2x2")]
    MalformedNinePatch { key: String, width: u32, height: u32 },
    #[error("Canvas growth would exceed representable dimensions (currently {width}x{height})")]
    CanvasUnbounded { width: u32, height: u32 },
    #[error("Region `{key}` lies outside the canvas bounds")]
    RegionOutOfBounds { key: String },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
