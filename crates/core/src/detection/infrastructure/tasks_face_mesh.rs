use std::path::PathBuf;

use ndarray::ArrayViewD;

use crate::detection::domain::face_landmarks::{DetectionResult, FaceLandmarks, Landmark};
use crate::detection::domain::face_mesh::FaceMesh;
use crate::detection::domain::vendor::{
    BaseOptions, FaceLandmarker, FaceLandmarkerOptions, FaceLandmarkerResult, RunningMode,
    TasksApi, VendorError,
};
use crate::shared::constants::{
    MAX_NUM_FACES, MIN_DETECTION_CONFIDENCE, MIN_FACE_PRESENCE_CONFIDENCE,
};
use crate::shared::rgb_image::RgbImage;

/// Single-image inference of one face from the given model bundle.
pub fn face_landmarker_options(model_asset_path: PathBuf) -> FaceLandmarkerOptions {
    FaceLandmarkerOptions {
        base_options: BaseOptions { model_asset_path },
        running_mode: RunningMode::Image,
        num_faces: MAX_NUM_FACES,
        min_face_detection_confidence: MIN_DETECTION_CONFIDENCE,
        min_face_presence_confidence: MIN_FACE_PRESENCE_CONFIDENCE,
    }
}

/// Backend over the task-based face landmarker, reshaped to the legacy
/// `process` contract.
pub struct TasksFaceMesh {
    landmarker: Box<dyn FaceLandmarker>,
}

impl TasksFaceMesh {
    pub fn new(landmarker: Box<dyn FaceLandmarker>) -> Self {
        Self { landmarker }
    }

    /// Build the landmarker from a model bundle that is already on disk.
    pub fn create(tasks: &dyn TasksApi, model_asset_path: PathBuf) -> Result<Self, VendorError> {
        let landmarker = tasks.create_face_landmarker(face_landmarker_options(model_asset_path))?;
        Ok(Self::new(landmarker))
    }
}

impl FaceMesh for TasksFaceMesh {
    fn process(
        &mut self,
        image: ArrayViewD<'_, u8>,
    ) -> Result<DetectionResult, Box<dyn std::error::Error + Send + Sync>> {
        let rgb = RgbImage::coerce(image)?;
        let result = self.landmarker.detect(&rgb)?;
        Ok(to_detection_result(result))
    }
}

/// Copy the landmarker output into the legacy shape. Missing depth reads as 0.0.
fn to_detection_result(result: FaceLandmarkerResult) -> DetectionResult {
    result
        .face_landmarks
        .into_iter()
        .map(|face| {
            face.into_iter()
                .map(|p| Landmark::new(p.x, p.y, p.z.unwrap_or(0.0)))
                .collect::<FaceLandmarks>()
        })
        .collect()
}
