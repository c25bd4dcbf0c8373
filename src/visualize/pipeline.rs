use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;
use tracing::{debug, info};

use crate::composite::color::ColorTable;
use crate::composite::full::composite_full;
use crate::composite::separate::composite_separate;
use crate::encode::video::paths_to_video;
use crate::foundation::core::ObjectId;
use crate::foundation::error::MaskVisResult;
use crate::load::dataset::{Inputs, load_inputs};
use crate::visualize::layout::OutputLayout;
use crate::visualize::opts::{RunReport, VisualizeOpts};

/// Load frames and masks, then run the compositor(s) selected by `opts.mode`.
#[tracing::instrument(skip_all, fields(level = %opts.level, mode = ?opts.mode))]
pub fn run(opts: &VisualizeOpts) -> MaskVisResult<RunReport> {
    opts.validate()?;
    let layout = OutputLayout::new(&opts.output_dir, opts.level);
    let inputs = load_inputs(&opts.video_path, &layout.mask_dir())?;
    run_with_inputs(&inputs, &layout, opts)
}

/// Same as [`run`] with inputs already in memory.
pub fn run_with_inputs(
    inputs: &Inputs,
    layout: &OutputLayout,
    opts: &VisualizeOpts,
) -> MaskVisResult<RunReport> {
    opts.validate()?;
    let mut report = RunReport {
        level: opts.level,
        mode: opts.mode,
        frames: inputs.len(),
        max_objects: inputs.max_objects(),
        ..RunReport::default()
    };

    if opts.mode.runs_separate() {
        run_separate(inputs, layout, opts, &mut report)?;
    }
    if opts.mode.runs_full() {
        let colors = ColorTable::generate(inputs.max_objects(), opts.seed);
        run_full(inputs, layout, opts, &colors, &mut report)?;
    }
    Ok(report)
}

/// Per-object highlight stacks, combined side-by-side frames, and one video per object.
#[tracing::instrument(skip_all)]
pub fn run_separate(
    inputs: &Inputs,
    layout: &OutputLayout,
    opts: &VisualizeOpts,
    report: &mut RunReport,
) -> MaskVisResult<()> {
    info!(frames = inputs.len(), "generating separate visualization");
    let written = write_separate_frames(inputs, layout, opts, report)?;

    if !opts.encode_videos {
        return Ok(());
    }
    create_dir(&layout.videos_dir())?;
    for (id, paths) in written.iter().enumerate() {
        let id = ObjectId(id);
        let out = layout.uid_video(id);
        let outcome = paths_to_video(paths, &out, &opts.video)?;
        report.record_video(&out, outcome);
    }
    Ok(())
}

/// Write the separate-mode PNGs and return, per object id, the panel paths in frame order.
///
/// Only files written by this run are returned, so leftovers in `uid_<n>/` never reach a video.
fn write_separate_frames(
    inputs: &Inputs,
    layout: &OutputLayout,
    opts: &VisualizeOpts,
    report: &mut RunReport,
) -> MaskVisResult<Vec<Vec<PathBuf>>> {
    let slots = inputs.max_objects();
    create_dir(&layout.separate_dir())?;
    for id in 0..slots {
        create_dir(&layout.uid_dir(ObjectId(id)))?;
    }

    let mut written: Vec<Vec<PathBuf>> = vec![Vec::new(); slots];
    for (idx, frame, masks) in inputs.iter() {
        let out = composite_separate(frame, masks, slots, opts.brightness)?;
        for panel in &out.panels {
            let path = layout.uid_frame(panel.id, idx);
            save_png(&panel.stacked(), &path)?;
            written[panel.id.0].push(path);
            report.separate_images += 1;
        }
        if let Some(combined) = &out.combined {
            save_png(combined, &layout.separate_frame(idx))?;
            report.separate_images += 1;
        }
        debug!(frame = idx.0, objects = out.panels.len(), "separate frame");
        log_progress("separate", idx.0 + 1, inputs.len());
    }
    Ok(written)
}

/// Blend every frame with its color-summed masks and encode the result.
#[tracing::instrument(skip_all)]
pub fn run_full(
    inputs: &Inputs,
    layout: &OutputLayout,
    opts: &VisualizeOpts,
    colors: &ColorTable,
    report: &mut RunReport,
) -> MaskVisResult<()> {
    info!(
        frames = inputs.len(),
        colors = colors.len(),
        "generating full mask visualization"
    );
    debug!(colors = ?colors.colors(), "object colors");
    report.colors = Some(colors.colors().to_vec());
    create_dir(&layout.full_dir())?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(inputs.len());
    for (idx, frame, masks) in inputs.iter() {
        let blended = composite_full(frame, masks, colors, opts.mask_alpha)?;
        let path = layout.full_frame(idx);
        save_png(&blended, &path)?;
        written.push(path);
        report.full_images += 1;
        debug!(frame = idx.0, "full frame");
        log_progress("full", idx.0 + 1, inputs.len());
    }

    if !opts.encode_videos {
        return Ok(());
    }
    let out = layout.full_video();
    let outcome = paths_to_video(&written, &out, &opts.video)?;
    report.record_video(&out, outcome);
    info!(video = %out.display(), "full mask visualization finished");
    Ok(())
}

/// Roughly ten progress lines per stage, plus the last frame.
fn is_progress_tick(done: usize, total: usize) -> bool {
    let step = (total / 10).max(1);
    done == total || done % step == 0
}

fn log_progress(stage: &str, done: usize, total: usize) {
    if is_progress_tick(done, total) {
        info!(stage, done, total, "frames written");
    }
}

fn create_dir(dir: &Path) -> MaskVisResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

fn save_png(img: &RgbImage, path: &Path) -> MaskVisResult<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/visualize/pipeline.rs"]
mod tests;
