use image::Rgb;

use super::*;
use crate::foundation::core::{FrameIndex, Level, VisMode};
use crate::load::masks::MaskTensor;

fn alternating_inputs() -> Inputs {
    // 3 frames, 2 objects; object 0 covers even frames, object 1 covers odd frames.
    let frames = vec![RgbImage::from_pixel(2, 2, Rgb([100, 100, 100])); 3];
    let masks = (0..3)
        .map(|i| {
            let even = i % 2 == 0;
            let mut bits = vec![even; 4];
            bits.extend(vec![!even; 4]);
            MaskTensor::new(2, 2, 2, bits).unwrap()
        })
        .collect();
    Inputs::new(frames, masks).unwrap()
}

fn opts_for(mode: VisMode) -> VisualizeOpts {
    VisualizeOpts {
        level: Level::Small,
        mode,
        encode_videos: false,
        ..VisualizeOpts::default()
    }
}

#[test]
fn full_mode_blends_alternating_objects() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path(), Level::Small);
    let inputs = alternating_inputs();
    let colors = ColorTable::new(vec![[200, 0, 100], [0, 100, 200]]);
    let opts = opts_for(VisMode::Full);
    let mut report = RunReport::default();

    run_full(&inputs, &layout, &opts, &colors, &mut report).unwrap();

    assert_eq!(report.full_images, 3);
    let expected = [[130, 70, 100], [70, 100, 130], [130, 70, 100]];
    for (i, want) in expected.iter().enumerate() {
        let img = image::open(layout.full_frame(FrameIndex(i)))
            .unwrap()
            .to_rgb8();
        assert!(img.pixels().all(|p| p.0 == *want), "frame {i}");
    }
    assert!(report.videos_written.is_empty());
}

#[test]
fn separate_mode_writes_per_object_and_combined_frames() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path(), Level::Small);
    let inputs = alternating_inputs();
    let mut report = RunReport::default();

    run_separate(&inputs, &layout, &opts_for(VisMode::Separate), &mut report).unwrap();

    // 3 frames x (2 objects + 1 combined).
    assert_eq!(report.separate_images, 9);
    let stacked = image::open(layout.uid_frame(ObjectId(1), FrameIndex(0)))
        .unwrap()
        .to_rgb8();
    assert_eq!(stacked.dimensions(), (2, 4));
    // Object 1 is absent from frame 0's coverage: darkened top, black mask below.
    assert_eq!(stacked.get_pixel(0, 0).0, [30, 30, 30]);
    assert_eq!(stacked.get_pixel(0, 3).0, [0, 0, 0]);

    let combined = image::open(layout.separate_frame(FrameIndex(1)))
        .unwrap()
        .to_rgb8();
    assert_eq!(combined.dimensions(), (4, 4));
    assert_eq!(combined.get_pixel(2, 0).0, [100, 100, 100]);
    assert_eq!(combined.get_pixel(2, 2).0, [255, 255, 255]);
    assert!(!layout.videos_dir().exists());
}

#[test]
fn both_mode_reports_everything() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path(), Level::Small);
    let opts = VisualizeOpts {
        seed: Some(7),
        ..opts_for(VisMode::Both)
    };

    let report = run_with_inputs(&alternating_inputs(), &layout, &opts).unwrap();
    assert_eq!(report.frames, 3);
    assert_eq!(report.max_objects, 2);
    assert_eq!(report.separate_images, 9);
    assert_eq!(report.full_images, 3);
    assert_eq!(report.colors.as_ref().map(Vec::len), Some(2));
}

#[test]
fn separate_videos_skip_objects_without_frames() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path(), Level::Small);
    // One empty frame: there are no object slots at all, so nothing to encode.
    let inputs = Inputs::new(
        vec![RgbImage::new(2, 2)],
        vec![MaskTensor::new(0, 2, 2, Vec::new()).unwrap()],
    )
    .unwrap();
    let opts = VisualizeOpts {
        encode_videos: true,
        ..opts_for(VisMode::Separate)
    };
    let mut report = RunReport::default();

    run_separate(&inputs, &layout, &opts, &mut report).unwrap();
    assert_eq!(report.separate_images, 0);
    assert!(report.videos_written.is_empty());
    assert!(report.videos_skipped.is_empty());
    assert!(layout.videos_dir().is_dir());
}

#[test]
fn separate_video_inputs_ignore_stale_uid_frames() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path(), Level::Small);
    let stale = layout.uid_frame(ObjectId(0), FrameIndex(7));
    std::fs::create_dir_all(layout.uid_dir(ObjectId(0))).unwrap();
    RgbImage::new(2, 4).save(&stale).unwrap();
    let mut report = RunReport::default();

    let written = write_separate_frames(
        &alternating_inputs(),
        &layout,
        &opts_for(VisMode::Separate),
        &mut report,
    )
    .unwrap();

    assert_eq!(written.len(), 2);
    let expected: Vec<_> = (0..3)
        .map(|i| layout.uid_frame(ObjectId(0), FrameIndex(i)))
        .collect();
    assert_eq!(written[0], expected);
    assert!(!written.iter().flatten().any(|p| *p == stale));
    assert!(stale.is_file());
}

#[test]
fn progress_ticks_about_ten_times_and_on_the_last_frame() {
    let ticks: Vec<usize> = (1..=25).filter(|&d| is_progress_tick(d, 25)).collect();
    assert_eq!(ticks, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 25]);
    assert!((1..=3).all(|d| is_progress_tick(d, 3)));
    assert!(is_progress_tick(1, 1));
}
