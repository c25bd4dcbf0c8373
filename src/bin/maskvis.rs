use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "maskvis",
    version,
    about = "Overlay per-object segmentation masks onto video frames"
)]
struct Cli {
    /// Directory of source frames named by integer (e.g. `00000.jpg`).
    #[arg(long, alias = "video_path", default_value = "")]
    video_path: String,

    /// Base directory; masks are read from `<output-dir>/<level>/final-output`.
    #[arg(long, alias = "output_dir", default_value = "")]
    output_dir: String,

    /// Mask level.
    #[arg(long, value_enum, default_value_t = LevelChoice::Large)]
    level: LevelChoice,

    /// Visualization mode.
    #[arg(long, alias = "vis_mode", value_enum, default_value_t = ModeChoice::Full)]
    vis_mode: ModeChoice,

    /// Output video frame rate.
    #[arg(long, default_value_t = maskvis::DEFAULT_FPS)]
    fps: u32,

    /// Seed for object colors (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Background brightness in separate mode.
    #[arg(long, default_value_t = maskvis::DEFAULT_BRIGHTNESS)]
    brightness: f32,

    /// Weight of the colored masks in full mode.
    #[arg(long, default_value_t = maskvis::DEFAULT_MASK_ALPHA)]
    mask_alpha: f32,

    /// Scale videos down to at most this width.
    #[arg(long, requires = "max_height")]
    max_width: Option<u32>,

    /// Scale videos down to at most this height.
    #[arg(long, requires = "max_width")]
    max_height: Option<u32>,

    /// Write PNGs only; skip MP4 encoding (no `ffmpeg` needed).
    #[arg(long)]
    no_video: bool,

    /// Write a JSON run summary to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelChoice {
    Default,
    Small,
    Middle,
    Large,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Full,
    #[value(name = "seperate", alias = "separate")]
    Separate,
    Both,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = make_opts(&cli);
    let report = maskvis::run(&opts)?;

    if let Some(path) = &cli.report {
        report.write_json(path)?;
    }

    eprintln!(
        "processed {} frames ({} objects): {} separate images, {} full images, {} videos",
        report.frames,
        report.max_objects,
        report.separate_images,
        report.full_images,
        report.videos_written.len()
    );
    for video in &report.videos_written {
        eprintln!("wrote {}", video.display());
    }
    Ok(())
}

fn make_opts(cli: &Cli) -> maskvis::VisualizeOpts {
    let level = match cli.level {
        LevelChoice::Default => maskvis::Level::Default,
        LevelChoice::Small => maskvis::Level::Small,
        LevelChoice::Middle => maskvis::Level::Middle,
        LevelChoice::Large => maskvis::Level::Large,
    };
    let mode = match cli.vis_mode {
        ModeChoice::Full => maskvis::VisMode::Full,
        ModeChoice::Separate => maskvis::VisMode::Separate,
        ModeChoice::Both => maskvis::VisMode::Both,
    };

    maskvis::VisualizeOpts {
        video_path: PathBuf::from(&cli.video_path),
        output_dir: PathBuf::from(&cli.output_dir),
        level,
        mode,
        seed: cli.seed,
        brightness: cli.brightness,
        mask_alpha: cli.mask_alpha,
        encode_videos: !cli.no_video,
        video: maskvis::VideoOpts {
            fps: cli.fps,
            max_size: cli.max_width.zip(cli.max_height),
            overwrite: true,
        },
    }
}
