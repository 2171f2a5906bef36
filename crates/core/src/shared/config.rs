use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::constants::{
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, FACE_LANDMARKER_MODEL_NAME, FACE_LANDMARKER_MODEL_URL,
    MODELS_DIR,
};

/// Where a model asset comes from and where it is cached locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelAsset {
    pub url: String,
    pub path: PathBuf,
}

impl ModelAsset {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
        }
    }

    /// The face landmarker bundle cached under `models_dir`.
    pub fn face_landmarker_in(models_dir: &Path) -> Self {
        Self::new(
            FACE_LANDMARKER_MODEL_URL,
            models_dir.join(FACE_LANDMARKER_MODEL_NAME),
        )
    }
}

impl Default for ModelAsset {
    fn default() -> Self {
        Self::face_landmarker_in(Path::new(MODELS_DIR))
    }
}

/// Facade configuration.
///
/// Detector thresholds are fixed and not part of this struct; only the
/// model asset location and the download budget can be changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatConfig {
    pub model: ModelAsset,
    /// `None` waits on the download indefinitely.
    pub download_timeout: Option<Duration>,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            model: ModelAsset::default(),
            download_timeout: Some(Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECS)),
        }
    }
}
