/// 0-based position of a frame in the loaded sequence.
///
/// This is the enumeration index used to name output files, not the source filename stem.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Five-digit zero-padded stem used by separate-mode outputs (`00042`).
    pub fn padded5(self) -> String {
        format!("{:05}", self.0)
    }

    /// Four-digit zero-padded stem used by full-mode outputs (`0042`).
    pub fn padded4(self) -> String {
        format!("{:04}", self.0)
    }
}

/// Index into a mask tensor's object axis. Stable across frames within one run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ObjectId(pub usize);

/// Straight RGB color, one byte per channel.
pub type Rgb8 = [u8; 3];

/// Named tier of precomputed masks. Selects `output_dir/<level>/` and tags output filenames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Default,
    Small,
    Middle,
    #[default]
    Large,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Small => "small",
            Self::Middle => "middle",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which compositor(s) a run executes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisMode {
    #[default]
    Full,
    Separate,
    Both,
}

impl VisMode {
    pub fn runs_full(self) -> bool {
        matches!(self, Self::Full | Self::Both)
    }

    pub fn runs_separate(self) -> bool {
        matches!(self, Self::Separate | Self::Both)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
