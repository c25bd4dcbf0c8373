//! Pixel compositing for both visualization modes.

pub(crate) mod color;
pub(crate) mod full;
pub(crate) mod separate;
