use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::MaskVisResult;
use crate::load::frames::load_frame;
use crate::load::listing::list_numbered;

pub const DEFAULT_FPS: u32 = 30;

/// Settings shared by every video written in a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoOpts {
    pub fps: u32,
    /// Size ceiling; `None` keeps the source resolution.
    pub max_size: Option<(u32, u32)>,
    pub overwrite: bool,
}

impl Default for VideoOpts {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            max_size: None,
            overwrite: true,
        }
    }
}

/// Result of asking for a video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeOutcome {
    Written { path: PathBuf, frames: usize },
    /// There were no input images, so no file was produced.
    Skipped,
}

/// PNG files in `dir` ordered by integer filename stem.
pub fn list_png_sequence(dir: &Path) -> MaskVisResult<Vec<PathBuf>> {
    Ok(list_numbered(dir, &["png"])?
        .into_iter()
        .map(|f| f.path)
        .collect())
}

/// Decode `paths` in order and push them into `sink`. Returns the number of frames written.
///
/// The first image fixes the video size. An empty list never touches the sink.
pub fn encode_images(
    paths: &[PathBuf],
    fps: u32,
    sink: &mut dyn FrameSink,
) -> MaskVisResult<usize> {
    let Some((first_path, rest)) = paths.split_first() else {
        return Ok(0);
    };

    let first = load_frame(first_path)?;
    sink.begin(SinkConfig {
        width: first.width(),
        height: first.height(),
        fps,
    })?;
    sink.push_frame(FrameIndex(0), &first)?;
    drop(first);

    for (i, path) in rest.iter().enumerate() {
        let frame = load_frame(path)?;
        sink.push_frame(FrameIndex(i + 1), &frame)?;
    }
    sink.end()?;
    Ok(paths.len())
}

/// Encode an explicit, already ordered list of images into `out`.
pub fn paths_to_video(
    paths: &[PathBuf],
    out: &Path,
    opts: &VideoOpts,
) -> MaskVisResult<EncodeOutcome> {
    if paths.is_empty() {
        info!(out = %out.display(), "no images to encode, skipping video");
        return Ok(EncodeOutcome::Skipped);
    }

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out.to_path_buf(),
        overwrite: opts.overwrite,
        max_size: opts.max_size,
    });
    let frames = encode_images(paths, opts.fps, &mut sink)?;
    debug!(frames, out = %out.display(), "video written");
    Ok(EncodeOutcome::Written {
        path: out.to_path_buf(),
        frames,
    })
}

/// Encode every numbered PNG in `dir`, in numeric order, into `out`.
///
/// A directory without PNGs is a no-op.
pub fn images_to_video(
    dir: &Path,
    out: &Path,
    opts: &VideoOpts,
) -> MaskVisResult<EncodeOutcome> {
    let paths = list_png_sequence(dir)?;
    if paths.is_empty() {
        info!(dir = %dir.display(), "no images found in the folder");
        return Ok(EncodeOutcome::Skipped);
    }
    paths_to_video(&paths, out, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/video.rs"]
mod tests;
