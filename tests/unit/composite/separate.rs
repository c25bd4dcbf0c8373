use super::*;

fn frame_2x1() -> RgbImage {
    RgbImage::from_raw(2, 1, vec![100, 200, 10, 255, 0, 50]).unwrap()
}

#[test]
fn darken_rounds_each_channel() {
    let dark = darken(&frame_2x1(), DEFAULT_BRIGHTNESS);
    assert_eq!(dark.as_raw(), &vec![30, 60, 3, 77, 0, 15]);
}

#[test]
fn highlight_keeps_masked_pixels_and_darkens_the_rest() {
    let frame = frame_2x1();
    let dark = darken(&frame, DEFAULT_BRIGHTNESS);
    let masks = MaskTensor::new(1, 2, 1, vec![true, false]).unwrap();

    let out = highlight(&frame, &dark, masks.object(ObjectId(0)).unwrap()).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [100, 200, 10]);
    assert_eq!(out.get_pixel(1, 0).0, [77, 0, 15]);
}

#[test]
fn mask_visual_is_binary_and_gray() {
    let masks = MaskTensor::new(1, 3, 1, vec![true, false, true]).unwrap();
    let vis = mask_visual(masks.object(ObjectId(0)).unwrap());
    assert_eq!(vis.as_raw(), &vec![255, 255, 255, 0, 0, 0, 255, 255, 255]);
}

#[test]
fn stacked_panel_is_twice_as_tall() {
    let frame = frame_2x1();
    let masks = MaskTensor::new(1, 2, 1, vec![false, true]).unwrap();
    let out = composite_separate(&frame, &masks, 1, DEFAULT_BRIGHTNESS).unwrap();

    let stacked = out.panels[0].stacked();
    assert_eq!(stacked.dimensions(), (2, 2));
    assert_eq!(stacked.get_pixel(0, 0).0, [30, 60, 3]);
    assert_eq!(stacked.get_pixel(1, 0).0, [255, 0, 50]);
    assert_eq!(stacked.get_pixel(0, 1).0, [0, 0, 0]);
    assert_eq!(stacked.get_pixel(1, 1).0, [255, 255, 255]);
}

#[test]
fn combined_places_objects_side_by_side() {
    let frame = frame_2x1();
    let masks = MaskTensor::new(2, 2, 1, vec![true, false, false, true]).unwrap();
    let out = composite_separate(&frame, &masks, 2, DEFAULT_BRIGHTNESS).unwrap();

    let combined = out.combined.unwrap();
    assert_eq!(combined.dimensions(), (4, 2));
    // Top row: object 0 highlight, then object 1 highlight.
    assert_eq!(combined.get_pixel(0, 0).0, [100, 200, 10]);
    assert_eq!(combined.get_pixel(1, 0).0, [77, 0, 15]);
    assert_eq!(combined.get_pixel(2, 0).0, [30, 60, 3]);
    assert_eq!(combined.get_pixel(3, 0).0, [255, 0, 50]);
    // Bottom row: masks.
    assert_eq!(combined.get_pixel(0, 1).0, [255, 255, 255]);
    assert_eq!(combined.get_pixel(3, 1).0, [255, 255, 255]);
    assert_eq!(combined.get_pixel(1, 1).0, [0, 0, 0]);
}

#[test]
fn absent_objects_keep_combined_width_constant() {
    let frame = frame_2x1();
    let masks = MaskTensor::new(1, 2, 1, vec![true, true]).unwrap();
    let out = composite_separate(&frame, &masks, 3, DEFAULT_BRIGHTNESS).unwrap();

    assert_eq!(out.panels.len(), 1);
    let combined = out.combined.unwrap();
    assert_eq!(combined.dimensions(), (6, 2));
    // Missing slots show the darkened frame over a black mask.
    assert_eq!(combined.get_pixel(4, 0).0, [30, 60, 3]);
    assert_eq!(combined.get_pixel(4, 1).0, [0, 0, 0]);
}

#[test]
fn no_slots_means_no_combined_image() {
    let frame = frame_2x1();
    let masks = MaskTensor::new(0, 2, 1, Vec::new()).unwrap();
    let out = composite_separate(&frame, &masks, 0, DEFAULT_BRIGHTNESS).unwrap();
    assert!(out.panels.is_empty());
    assert!(out.combined.is_none());
}

#[test]
fn mismatched_mask_size_is_rejected() {
    let frame = frame_2x1();
    let masks = MaskTensor::new(1, 1, 1, vec![true]).unwrap();
    assert!(composite_separate(&frame, &masks, 1, DEFAULT_BRIGHTNESS).is_err());
}
