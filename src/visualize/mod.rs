//! End-to-end runs: load inputs, composite, write PNGs, encode videos.

pub(crate) mod layout;
pub(crate) mod opts;
pub(crate) mod pipeline;
