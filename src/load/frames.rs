use std::path::Path;

use anyhow::Context as _;
use image::RgbImage;

use crate::foundation::error::MaskVisResult;
use crate::load::listing::{NumberedFile, list_numbered};

/// Extensions accepted as source frames. Anything else in the frame directory is ignored.
pub const FRAME_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "webp", "tif", "tiff", "tga", "qoi", "pnm", "ppm", "gif",
];

/// List source frames in `dir`, ordered by integer filename stem.
pub fn list_frames(dir: &Path) -> MaskVisResult<Vec<NumberedFile>> {
    list_numbered(dir, FRAME_EXTENSIONS)
}

/// Decode a frame from disk as 8-bit RGB. Alpha is dropped; grayscale is replicated.
pub fn load_frame(path: &Path) -> MaskVisResult<RgbImage> {
    let img = image::open(path).with_context(|| format!("decode frame '{}'", path.display()))?;
    Ok(img.to_rgb8())
}

#[cfg(test)]
#[path = "../../tests/unit/load/frames.rs"]
mod tests;
