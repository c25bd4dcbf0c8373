//! Turning ordered image sequences into video files.
//!
//! Frames flow through a [`sink::FrameSink`]; the production sink pipes raw RGB into the system
//! `ffmpeg` binary.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
/// Directory/sequence level encoding helpers.
pub mod video;
