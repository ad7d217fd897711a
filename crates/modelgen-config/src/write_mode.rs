use serde::{Deserialize, Serialize};

/// How the rendered output is committed to the destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate the destination and write in place. A failure mid-write can
    /// leave a partially written file behind.
    Direct,
    /// Write a sibling temporary file, then rename it over the destination.
    #[default]
    Atomic,
}

impl WriteMode {
    /// Returns true when writes go through a temporary file.
    pub fn is_atomic(self) -> bool {
        matches!(self, WriteMode::Atomic)
    }
}
