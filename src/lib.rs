//! maskvis overlays per-object segmentation masks onto video frames for visual inspection.
//!
//! A run reads an ordered directory of source frames plus one `.npy` mask tensor per frame
//! (`[objects, 1, H, W]`), then produces one or both of:
//!
//! - **Full mode**: every object's mask painted in a per-run random color, colors summed where
//!   objects overlap, blended `0.7 * frame + 0.3 * colors`, written as PNGs and one MP4.
//! - **Separate mode**: per object, the frame darkened except inside the mask, stacked above a
//!   binary mask view; plus a side-by-side image of all objects per frame and one MP4 per object.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `frames dir + masks dir -> Inputs` (count, order, and size checks up front)
//! 2. **Composite**: `frame + MaskTensor -> RgbImage` (pure, no IO)
//! 3. **Write**: PNGs under `output_dir/<level>/visualization`
//! 4. **Encode** (optional): stream PNG sequences to the system `ffmpeg` binary
#![forbid(unsafe_code)]

mod composite;
mod encode;
mod foundation;
mod load;
mod visualize;

pub use composite::color::ColorTable;
pub use composite::full::{DEFAULT_MASK_ALPHA, accumulate_colors, blend, composite_full};
pub use composite::separate::{
    DEFAULT_BRIGHTNESS, ObjectPanel, SeparateFrame, composite_separate, darken, highlight,
    mask_visual, stack_vertical,
};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use encode::video::{
    DEFAULT_FPS, EncodeOutcome, VideoOpts, encode_images, images_to_video, list_png_sequence,
    paths_to_video,
};
pub use foundation::core::{FrameIndex, Level, ObjectId, Rgb8, VisMode};
pub use foundation::error::{MaskVisError, MaskVisResult};
pub use load::dataset::{Inputs, load_inputs};
pub use load::frames::{FRAME_EXTENSIONS, list_frames, load_frame};
pub use load::listing::{NumberedFile, list_numbered, trailing_index};
pub use load::masks::{MaskTensor, ObjectMask, list_mask_files, read_mask_tensor};
pub use visualize::layout::OutputLayout;
pub use visualize::opts::{RunReport, VisualizeOpts};
pub use visualize::pipeline::{run, run_full, run_separate, run_with_inputs};
