use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::composite::full::DEFAULT_MASK_ALPHA;
use crate::composite::separate::DEFAULT_BRIGHTNESS;
use crate::encode::video::{EncodeOutcome, VideoOpts};
use crate::foundation::core::{Level, Rgb8, VisMode};
use crate::foundation::error::{MaskVisError, MaskVisResult};

/// Everything a visualization run needs.
#[derive(Clone, Debug)]
pub struct VisualizeOpts {
    /// Directory of source frames named by integer.
    pub video_path: PathBuf,
    /// Base directory holding `<level>/final-output` and receiving `<level>/visualization`.
    pub output_dir: PathBuf,
    pub level: Level,
    pub mode: VisMode,
    /// Seed for object colors; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Background brightness in separate mode.
    pub brightness: f32,
    /// Overlay weight in full mode.
    pub mask_alpha: f32,
    /// When `false`, PNGs are written but no videos are encoded.
    pub encode_videos: bool,
    pub video: VideoOpts,
}

impl Default for VisualizeOpts {
    fn default() -> Self {
        Self {
            video_path: PathBuf::new(),
            output_dir: PathBuf::new(),
            level: Level::default(),
            mode: VisMode::default(),
            seed: None,
            brightness: DEFAULT_BRIGHTNESS,
            mask_alpha: DEFAULT_MASK_ALPHA,
            encode_videos: true,
            video: VideoOpts::default(),
        }
    }
}

impl VisualizeOpts {
    pub fn validate(&self) -> MaskVisResult<()> {
        if self.video.fps == 0 {
            return Err(MaskVisError::validation("fps must be non-zero"));
        }
        if !self.brightness.is_finite() || self.brightness < 0.0 {
            return Err(MaskVisError::validation(
                "brightness must be a finite, non-negative factor",
            ));
        }
        if !(0.0..=1.0).contains(&self.mask_alpha) {
            return Err(MaskVisError::validation(
                "mask alpha must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Summary of what a run produced.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RunReport {
    pub level: Level,
    pub mode: VisMode,
    pub frames: usize,
    pub max_objects: usize,
    /// Colors used in full mode, in object-id order.
    pub colors: Option<Vec<Rgb8>>,
    /// Per-object and combined PNGs from separate mode.
    pub separate_images: usize,
    pub full_images: usize,
    pub videos_written: Vec<PathBuf>,
    /// Videos that had no input images.
    pub videos_skipped: Vec<PathBuf>,
}

impl RunReport {
    pub(crate) fn record_video(&mut self, requested: &Path, outcome: EncodeOutcome) {
        match outcome {
            EncodeOutcome::Written { path, .. } => self.videos_written.push(path),
            EncodeOutcome::Skipped => self.videos_skipped.push(requested.to_path_buf()),
        }
    }

    /// Write the report as pretty JSON.
    pub fn write_json(&self, path: &Path) -> MaskVisResult<()> {
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        let json = serde_json::to_string_pretty(self).context("serialize run report")?;
        std::fs::write(path, json)
            .with_context(|| format!("write run report '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visualize/opts.rs"]
mod tests;
