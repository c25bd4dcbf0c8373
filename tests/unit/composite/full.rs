use image::Rgb;

use super::*;

#[test]
fn accumulate_sums_overlapping_colors_and_clips() {
    let colors = ColorTable::new(vec![[200, 10, 0], [100, 20, 50]]);
    // Pixel 0: both objects. Pixel 1: object 1 only. Pixel 2: none.
    let masks = MaskTensor::new(2, 3, 1, vec![true, false, false, true, true, false]).unwrap();

    let acc = accumulate_colors(3, 1, &masks, &colors).unwrap();
    assert_eq!(acc.get_pixel(0, 0).0, [255, 30, 50]);
    assert_eq!(acc.get_pixel(1, 0).0, [100, 20, 50]);
    assert_eq!(acc.get_pixel(2, 0).0, [0, 0, 0]);
}

#[test]
fn accumulate_reuses_colors_modulo_table_len() {
    let colors = ColorTable::new(vec![[10, 20, 30]]);
    let masks = MaskTensor::new(2, 1, 1, vec![true, true]).unwrap();
    let acc = accumulate_colors(1, 1, &masks, &colors).unwrap();
    assert_eq!(acc.get_pixel(0, 0).0, [20, 40, 60]);
}

#[test]
fn accumulate_without_colors_is_error_only_when_objects_exist() {
    let empty = ColorTable::new(Vec::new());
    let none = MaskTensor::new(0, 1, 1, Vec::new()).unwrap();
    assert!(accumulate_colors(1, 1, &none, &empty).is_ok());

    let one = MaskTensor::new(1, 1, 1, vec![true]).unwrap();
    assert!(accumulate_colors(1, 1, &one, &empty).is_err());
}

#[test]
fn blend_weights_frame_and_overlay() {
    let frame = RgbImage::from_pixel(1, 1, Rgb([5, 100, 0]));
    let overlay = RgbImage::from_pixel(1, 1, Rgb([255, 30, 0]));
    let out = blend(&frame, &overlay, DEFAULT_MASK_ALPHA).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [80, 79, 0]);
}

#[test]
fn blend_rejects_size_mismatch() {
    let frame = RgbImage::new(2, 1);
    let overlay = RgbImage::new(1, 1);
    assert!(blend(&frame, &overlay, DEFAULT_MASK_ALPHA).is_err());
}

#[test]
fn uncovered_pixels_are_dimmed_frame() {
    let frame = RgbImage::from_pixel(2, 1, Rgb([100, 200, 10]));
    let colors = ColorTable::new(vec![[200, 0, 100]]);
    let masks = MaskTensor::new(1, 2, 1, vec![true, false]).unwrap();

    let out = composite_full(&frame, &masks, &colors, DEFAULT_MASK_ALPHA).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [130, 140, 37]);
    assert_eq!(out.get_pixel(1, 0).0, [70, 140, 7]);
}
