use ndarray::ArrayViewD;

use crate::detection::domain::face_landmarks::DetectionResult;
use crate::detection::domain::face_mesh::FaceMesh;
use crate::detection::domain::vendor::{FaceMeshOptions, LegacyFaceMesh, SolutionsApi, VendorError};
use crate::shared::constants::{MAX_NUM_FACES, MIN_DETECTION_CONFIDENCE, MIN_TRACKING_CONFIDENCE};
use crate::shared::rgb_image::RgbImage;

/// Video-style single-face tracking with iris and lip refinement.
pub fn legacy_face_mesh_options() -> FaceMeshOptions {
    FaceMeshOptions {
        static_image_mode: false,
        max_num_faces: MAX_NUM_FACES,
        refine_landmarks: true,
        min_detection_confidence: MIN_DETECTION_CONFIDENCE,
        min_tracking_confidence: MIN_TRACKING_CONFIDENCE,
    }
}

/// Backend over the legacy `solutions` face mesh.
///
/// The vendor result already has the legacy shape and is returned as is.
pub struct LegacyFaceMeshBackend {
    inner: Box<dyn LegacyFaceMesh>,
}

impl LegacyFaceMeshBackend {
    pub fn create(solutions: &dyn SolutionsApi) -> Result<Self, VendorError> {
        let inner = solutions.face_mesh(legacy_face_mesh_options())?;
        Ok(Self { inner })
    }
}

impl FaceMesh for LegacyFaceMeshBackend {
    fn process(
        &mut self,
        image: ArrayViewD<'_, u8>,
    ) -> Result<DetectionResult, Box<dyn std::error::Error + Send + Sync>> {
        let rgb = RgbImage::coerce(image)?;
        self.inner.process(rgb.view())
    }
}
