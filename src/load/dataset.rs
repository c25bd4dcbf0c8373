use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{debug, info};

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MaskVisError, MaskVisResult};
use crate::load::frames::{list_frames, load_frame};
use crate::load::listing::{file_stem, trailing_index};
use crate::load::masks::{MaskTensor, list_mask_files, read_mask_tensor};

/// Every frame and its mask tensor, fully loaded and paired by position.
#[derive(Clone, Debug)]
pub struct Inputs {
    frames: Vec<RgbImage>,
    masks: Vec<MaskTensor>,
}

impl Inputs {
    /// Pair frames with masks.
    ///
    /// Counts must match, all frames must share one size, and each mask tensor must cover its
    /// frame exactly.
    pub fn new(frames: Vec<RgbImage>, masks: Vec<MaskTensor>) -> MaskVisResult<Self> {
        if frames.len() != masks.len() {
            return Err(MaskVisError::validation(format!(
                "frame count ({}) does not match mask count ({})",
                frames.len(),
                masks.len()
            )));
        }

        if let Some(first) = frames.first() {
            let size = first.dimensions();
            for (i, (frame, mask)) in frames.iter().zip(&masks).enumerate() {
                if frame.dimensions() != size {
                    return Err(MaskVisError::validation(format!(
                        "frame {i} is {}x{}, expected {}x{} like frame 0",
                        frame.width(),
                        frame.height(),
                        size.0,
                        size.1
                    )));
                }
                if (mask.width(), mask.height()) != size {
                    return Err(MaskVisError::validation(format!(
                        "mask {i} is {}x{}, frame is {}x{}",
                        mask.width(),
                        mask.height(),
                        size.0,
                        size.1
                    )));
                }
            }
        }

        Ok(Self { frames, masks })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// `(width, height)` shared by every frame, or `None` for an empty run.
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| f.dimensions())
    }

    /// Largest object count over all mask tensors.
    pub fn max_objects(&self) -> usize {
        self.masks
            .iter()
            .map(MaskTensor::object_count)
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameIndex, &RgbImage, &MaskTensor)> + '_ {
        self.frames
            .iter()
            .zip(&self.masks)
            .enumerate()
            .map(|(i, (f, m))| (FrameIndex(i), f, m))
    }
}

/// Load every frame from `frames_dir` and every mask tensor from `masks_dir`.
pub fn load_inputs(frames_dir: &Path, masks_dir: &Path) -> MaskVisResult<Inputs> {
    let frame_files = list_frames(frames_dir)?;
    let mask_files = list_mask_files(masks_dir)?;
    debug!(
        masks = ?mask_files
            .iter()
            .filter_map(|p| p.file_name())
            .collect::<Vec<_>>(),
        "mask files"
    );

    if frame_files.len() != mask_files.len() {
        return Err(MaskVisError::validation(format!(
            "found {} frames in '{}' but {} mask files in '{}'",
            frame_files.len(),
            frames_dir.display(),
            mask_files.len(),
            masks_dir.display()
        )));
    }

    let frame_numbers: Vec<u64> = frame_files.iter().map(|f| f.number).collect();
    check_correspondence(&frame_numbers, &mask_files)?;

    let masks = mask_files
        .iter()
        .map(|p| read_mask_tensor(p))
        .collect::<MaskVisResult<Vec<_>>>()?;
    let frames = frame_files
        .iter()
        .map(|f| load_frame(&f.path))
        .collect::<MaskVisResult<Vec<_>>>()?;

    let inputs = Inputs::new(frames, masks)?;
    info!(
        frames = inputs.len(),
        max_objects = inputs.max_objects(),
        "loaded inputs"
    );
    Ok(inputs)
}

/// Verify that name-sorted mask files line up with numerically sorted frames.
///
/// Only enforced when every mask filename ends in a number: those numbers must be strictly
/// increasing and differ by one constant offset from either the frame numbers or the frame
/// positions (`0..n`), the latter covering strided frame names.
pub(crate) fn check_correspondence(
    frame_numbers: &[u64],
    mask_files: &[PathBuf],
) -> MaskVisResult<()> {
    let mask_numbers: Option<Vec<u64>> = mask_files
        .iter()
        .map(|p| file_stem(p).and_then(trailing_index))
        .collect();
    let Some(mask_numbers) = mask_numbers else {
        debug!("mask filenames are not numbered; relying on sort order alone");
        return Ok(());
    };

    for (pair, files) in mask_numbers.windows(2).zip(mask_files.windows(2)) {
        if pair[1] <= pair[0] {
            return Err(MaskVisError::validation(format!(
                "mask '{}' sorts before '{}' by name but not by number; zero-pad mask filenames",
                files[0].display(),
                files[1].display()
            )));
        }
    }

    let Some(mismatch) = offset_break(&mask_numbers, frame_numbers) else {
        return Ok(());
    };
    // Strided frames (0, 5, 10, ...) with masks numbered by position.
    let positions: Vec<u64> = (0..mask_numbers.len() as u64).collect();
    if offset_break(&mask_numbers, &positions).is_none() {
        debug!("mask numbers follow frame positions, not frame numbers");
        return Ok(());
    }

    let f = frame_numbers[mismatch];
    let offset = i128::from(mask_numbers[0]) - i128::from(frame_numbers[0]);
    Err(MaskVisError::validation(format!(
        "mask '{}' does not correspond to frame {f} (expected mask number {})",
        mask_files[mismatch].display(),
        i128::from(f) + offset
    )))
}

/// Index of the first mask number whose difference from its key differs from the first pair's.
fn offset_break(mask_numbers: &[u64], keys: &[u64]) -> Option<usize> {
    let diff = |(&m, &k): (&u64, &u64)| i128::from(m) - i128::from(k);
    let mut pairs = mask_numbers.iter().zip(keys).map(diff);
    let offset = pairs.next()?;
    pairs.position(|d| d != offset).map(|i| i + 1)
}
