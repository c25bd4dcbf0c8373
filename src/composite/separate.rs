use image::{Rgb, RgbImage, imageops};

use crate::foundation::core::ObjectId;
use crate::foundation::error::{MaskVisError, MaskVisResult};
use crate::foundation::math::scale_round_u8;
use crate::load::masks::{MaskTensor, ObjectMask};

/// Brightness multiplier applied to the background in per-object views.
pub const DEFAULT_BRIGHTNESS: f32 = 0.3;

/// One object's views for one frame.
#[derive(Clone, Debug)]
pub struct ObjectPanel {
    pub id: ObjectId,
    /// Original pixels inside the mask, darkened pixels elsewhere.
    pub highlighted: RgbImage,
    /// Mask rendered as 0/255 gray.
    pub mask: RgbImage,
}

impl ObjectPanel {
    /// Highlighted view above the mask view.
    pub fn stacked(&self) -> RgbImage {
        stack_vertical(&self.highlighted, &self.mask)
    }
}

/// Output of the per-object compositor for one frame.
#[derive(Clone, Debug)]
pub struct SeparateFrame {
    /// Panels for the objects present in this frame, in id order.
    pub panels: Vec<ObjectPanel>,
    /// All slots side by side (highlights on top, masks below). `None` when there are no slots.
    pub combined: Option<RgbImage>,
}

/// Scale every channel by `brightness`, rounding to nearest.
pub fn darken(frame: &RgbImage, brightness: f32) -> RgbImage {
    let mut out = frame.clone();
    for px in out.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = scale_round_u8(*c, brightness);
        }
    }
    out
}

/// Take `frame` where the mask is set and `dark` everywhere else.
pub fn highlight(
    frame: &RgbImage,
    dark: &RgbImage,
    mask: ObjectMask<'_>,
) -> MaskVisResult<RgbImage> {
    check_mask_size(frame, mask)?;
    if dark.dimensions() != frame.dimensions() {
        return Err(MaskVisError::validation(
            "darkened background must match the frame size",
        ));
    }

    let mut out = dark.clone();
    for ((dst, src), on) in out
        .pixels_mut()
        .zip(frame.pixels())
        .zip(mask.bits().iter())
    {
        if *on {
            *dst = *src;
        }
    }
    Ok(out)
}

/// Binary mask as grayscale-in-RGB: 255 inside, 0 outside.
pub fn mask_visual(mask: ObjectMask<'_>) -> RgbImage {
    let mut out = RgbImage::new(mask.width(), mask.height());
    for (dst, on) in out.pixels_mut().zip(mask.bits().iter()) {
        if *on {
            *dst = Rgb([255, 255, 255]);
        }
    }
    out
}

pub fn stack_vertical(top: &RgbImage, bottom: &RgbImage) -> RgbImage {
    let width = top.width().max(bottom.width());
    let mut out = RgbImage::new(width, top.height() + bottom.height());
    imageops::replace(&mut out, top, 0, 0);
    imageops::replace(&mut out, bottom, 0, i64::from(top.height()));
    out
}

/// Build per-object panels for every object in `masks`, and the combined image over `slots`
/// columns.
///
/// Ids in `0..slots` that this frame lacks are drawn as the darkened frame over an empty mask, so
/// the combined width is `slots * frame width` on every frame.
pub fn composite_separate(
    frame: &RgbImage,
    masks: &MaskTensor,
    slots: usize,
    brightness: f32,
) -> MaskVisResult<SeparateFrame> {
    let dark = darken(frame, brightness);

    let mut panels = Vec::with_capacity(masks.object_count());
    for (id, mask) in masks.objects() {
        panels.push(ObjectPanel {
            id,
            highlighted: highlight(frame, &dark, mask)?,
            mask: mask_visual(mask),
        });
    }

    let slots = slots.max(masks.object_count());
    let combined = if slots == 0 {
        None
    } else {
        Some(combine_panels(frame, &dark, &panels, slots)?)
    };

    Ok(SeparateFrame { panels, combined })
}

fn combine_panels(
    frame: &RgbImage,
    dark: &RgbImage,
    panels: &[ObjectPanel],
    slots: usize,
) -> MaskVisResult<RgbImage> {
    let (w, h) = frame.dimensions();
    let total_width = u32::try_from(slots)
        .ok()
        .and_then(|n| n.checked_mul(w))
        .ok_or_else(|| MaskVisError::validation("combined image width overflows u32"))?;

    let mut out = RgbImage::new(total_width, h * 2);
    for slot in 0..slots {
        let x = i64::from(w) * slot as i64;
        match panels.iter().find(|p| p.id.0 == slot) {
            Some(panel) => {
                imageops::replace(&mut out, &panel.highlighted, x, 0);
                imageops::replace(&mut out, &panel.mask, x, i64::from(h));
            }
            // The bottom tile stays black.
            None => imageops::replace(&mut out, dark, x, 0),
        }
    }
    Ok(out)
}

pub(crate) fn check_mask_size(frame: &RgbImage, mask: ObjectMask<'_>) -> MaskVisResult<()> {
    if frame.dimensions() != (mask.width(), mask.height()) {
        return Err(MaskVisError::validation(format!(
            "mask is {}x{}, frame is {}x{}",
            mask.width(),
            mask.height(),
            frame.width(),
            frame.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composite/separate.rs"]
mod tests;
