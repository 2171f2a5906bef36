//! Interfaces of the vendor face-landmark library.
//!
//! The library ships two generations of API. Older releases expose the
//! `solutions` face mesh with a `process` call; newer releases dropped it and
//! only expose the task-based face landmarker, which needs a model asset on
//! disk. A binding to the library implements these traits; the facade never
//! depends on which release is installed.

use std::path::PathBuf;

use ndarray::ArrayView3;

use crate::detection::domain::face_landmarks::DetectionResult;
use crate::shared::rgb_image::RgbImage;

pub type VendorError = Box<dyn std::error::Error + Send + Sync>;

/// Entry points of an installed vendor library.
///
/// Either accessor fails when that API generation is not available, e.g.
/// because the installed release removed it or the library is missing.
pub trait VendorLibrary: Send + Sync {
    fn solutions(&self) -> Result<&dyn SolutionsApi, VendorError>;

    fn tasks(&self) -> Result<&dyn TasksApi, VendorError>;
}

/// Legacy `solutions` API.
pub trait SolutionsApi: Send + Sync {
    fn face_mesh(&self, options: FaceMeshOptions) -> Result<Box<dyn LegacyFaceMesh>, VendorError>;
}

/// Task-based API.
pub trait TasksApi: Send + Sync {
    fn create_face_landmarker(
        &self,
        options: FaceLandmarkerOptions,
    ) -> Result<Box<dyn FaceLandmarker>, VendorError>;
}

/// Legacy detector. Its native result already has the legacy shape.
pub trait LegacyFaceMesh: Send {
    fn process(&mut self, rgb: ArrayView3<'_, u8>) -> Result<DetectionResult, VendorError>;
}

/// Task-based detector.
pub trait FaceLandmarker: Send {
    fn detect(&mut self, image: &RgbImage<'_>) -> Result<FaceLandmarkerResult, VendorError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceMeshOptions {
    /// `false` treats input as a video stream and tracks between frames.
    pub static_image_mode: bool,
    pub max_num_faces: usize,
    /// Adds the iris and lip refinement landmarks.
    pub refine_landmarks: bool,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseOptions {
    pub model_asset_path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunningMode {
    Image,
    Video,
    LiveStream,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceLandmarkerOptions {
    pub base_options: BaseOptions,
    pub running_mode: RunningMode,
    pub num_faces: usize,
    pub min_face_detection_confidence: f32,
    pub min_face_presence_confidence: f32,
}

/// A point as reported by the task-based detector. Depth may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    pub z: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceLandmarkerResult {
    /// One entry per detected face, each an ordered list of points.
    pub face_landmarks: Vec<Vec<NormalizedLandmark>>,
}
