use super::*;

#[test]
fn defaults_match_the_documented_tunables() {
    let opts = VisualizeOpts::default();
    assert_eq!(opts.level, Level::Large);
    assert_eq!(opts.mode, VisMode::Full);
    assert_eq!(opts.video.fps, 30);
    assert!((opts.brightness - 0.3).abs() < f32::EPSILON);
    assert!((opts.mask_alpha - 0.3).abs() < f32::EPSILON);
    assert!(opts.encode_videos);
    opts.validate().unwrap();
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut opts = VisualizeOpts::default();
    opts.video.fps = 0;
    assert!(opts.validate().is_err());

    let opts = VisualizeOpts {
        mask_alpha: 1.5,
        ..VisualizeOpts::default()
    };
    assert!(opts.validate().is_err());

    let opts = VisualizeOpts {
        brightness: f32::NAN,
        ..VisualizeOpts::default()
    };
    assert!(opts.validate().is_err());
}

#[test]
fn report_tracks_written_and_skipped_videos() {
    let mut report = RunReport::default();
    report.record_video(
        Path::new("a.mp4"),
        EncodeOutcome::Written {
            path: PathBuf::from("a.mp4"),
            frames: 3,
        },
    );
    report.record_video(Path::new("b.mp4"), EncodeOutcome::Skipped);
    assert_eq!(report.videos_written, vec![PathBuf::from("a.mp4")]);
    assert_eq!(report.videos_skipped, vec![PathBuf::from("b.mp4")]);
}

#[test]
fn report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report").join("run.json");
    let report = RunReport {
        frames: 2,
        max_objects: 1,
        colors: Some(vec![[1, 2, 3]]),
        ..RunReport::default()
    };
    report.write_json(&path).unwrap();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["frames"], 2);
    assert_eq!(v["level"], "large");
    assert_eq!(v["mode"], "full");
    assert_eq!(v["colors"][0][2], 3);
}
