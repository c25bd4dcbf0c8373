use std::path::{Path, PathBuf};

use crate::foundation::core::{FrameIndex, Level, ObjectId};

/// Input and output paths for one `output_dir/<level>` tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    level: Level,
}

impl OutputLayout {
    pub fn new(output_dir: &Path, level: Level) -> Self {
        Self {
            root: output_dir.join(level.as_str()),
            level,
        }
    }

    /// `<level>/`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Precomputed `.npy` masks: `<level>/final-output/`.
    pub fn mask_dir(&self) -> PathBuf {
        self.root.join("final-output")
    }

    pub fn visualization_dir(&self) -> PathBuf {
        self.root.join("visualization")
    }

    pub fn separate_dir(&self) -> PathBuf {
        self.visualization_dir().join("seperate")
    }

    pub fn uid_dir(&self, id: ObjectId) -> PathBuf {
        self.separate_dir().join(format!("uid_{}", id.0))
    }

    pub fn uid_frame(&self, id: ObjectId, idx: FrameIndex) -> PathBuf {
        self.uid_dir(id).join(format!("{}.png", idx.padded5()))
    }

    pub fn separate_frame(&self, idx: FrameIndex) -> PathBuf {
        self.separate_dir().join(format!("{}.png", idx.padded5()))
    }

    pub fn videos_dir(&self) -> PathBuf {
        self.separate_dir().join("videos")
    }

    pub fn uid_video(&self, id: ObjectId) -> PathBuf {
        self.videos_dir().join(format!("uid_{}.mp4", id.0))
    }

    pub fn full_dir(&self) -> PathBuf {
        self.visualization_dir().join("full-mask-npy")
    }

    pub fn full_frame(&self, idx: FrameIndex) -> PathBuf {
        self.full_dir().join(format!("frame_{}.png", idx.padded4()))
    }

    pub fn full_video(&self) -> PathBuf {
        self.visualization_dir()
            .join(format!("full-mask-{}.mp4", self.level))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visualize/layout.rs"]
mod tests;
