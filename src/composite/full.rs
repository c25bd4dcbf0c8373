use image::RgbImage;

use crate::composite::color::ColorTable;
use crate::composite::separate::check_mask_size;
use crate::foundation::error::{MaskVisError, MaskVisResult};
use crate::foundation::math::weighted_sum_u8;
use crate::load::masks::MaskTensor;

/// Weight of the colored mask layer in the full-scene blend. The frame gets `1 - alpha`.
pub const DEFAULT_MASK_ALPHA: f32 = 0.3;

/// Sum the color of every object covering each pixel, clipped to 255 per channel.
///
/// Overlapping objects add up rather than occlude each other.
pub fn accumulate_colors(
    width: u32,
    height: u32,
    masks: &MaskTensor,
    colors: &ColorTable,
) -> MaskVisResult<RgbImage> {
    let mut sums = vec![[0u16; 3]; width as usize * height as usize];
    for (id, mask) in masks.objects() {
        if (mask.width(), mask.height()) != (width, height) {
            return Err(MaskVisError::validation(format!(
                "mask is {}x{}, accumulator is {width}x{height}",
                mask.width(),
                mask.height()
            )));
        }
        let color = colors.color_for(id).ok_or_else(|| {
            MaskVisError::validation(format!("no color assigned for object {}", id.0))
        })?;
        for (sum, on) in sums.iter_mut().zip(mask.bits()) {
            if *on {
                for c in 0..3 {
                    sum[c] = sum[c].saturating_add(u16::from(color[c]));
                }
            }
        }
    }

    let raw = sums
        .iter()
        .flat_map(|s| s.map(|v| v.min(255) as u8))
        .collect();
    RgbImage::from_raw(width, height, raw)
        .ok_or_else(|| MaskVisError::validation("color accumulator size mismatch"))
}

/// `(1 - alpha) * frame + alpha * overlay` per channel, rounded and clipped.
pub fn blend(frame: &RgbImage, overlay: &RgbImage, alpha: f32) -> MaskVisResult<RgbImage> {
    if frame.dimensions() != overlay.dimensions() {
        return Err(MaskVisError::validation(format!(
            "overlay is {}x{}, frame is {}x{}",
            overlay.width(),
            overlay.height(),
            frame.width(),
            frame.height()
        )));
    }
    let alpha = alpha.clamp(0.0, 1.0);
    let mut out = frame.clone();
    for (dst, src) in out.iter_mut().zip(overlay.iter()) {
        *dst = weighted_sum_u8(*dst, 1.0 - alpha, *src, alpha);
    }
    Ok(out)
}

/// Color every object, then blend the union over the frame.
pub fn composite_full(
    frame: &RgbImage,
    masks: &MaskTensor,
    colors: &ColorTable,
    alpha: f32,
) -> MaskVisResult<RgbImage> {
    for (_, mask) in masks.objects() {
        check_mask_size(frame, mask)?;
    }
    let overlay = accumulate_colors(frame.width(), frame.height(), masks, colors)?;
    blend(frame, &overlay, alpha)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/full.rs"]
mod tests;
