use ndarray::ArrayViewD;

use crate::detection::domain::face_landmarks::DetectionResult;

/// Domain interface for face-mesh landmark detection.
///
/// Implementations may track faces across calls, hence `&mut self`.
/// Errors raised by the vendor library are returned unchanged.
pub trait FaceMesh: Send {
    fn process(
        &mut self,
        image: ArrayViewD<'_, u8>,
    ) -> Result<DetectionResult, Box<dyn std::error::Error + Send + Sync>>;
}
