//! Reading source frames and per-frame mask tensors from disk.

pub(crate) mod dataset;
pub(crate) mod frames;
pub(crate) mod listing;
pub(crate) mod masks;
