//! Landmark results in the legacy face-mesh shape.
//!
//! `result.multi_face_landmarks()[i].landmark()[j].{x, y, z}` reads the same
//! whichever vendor API produced the result.

/// One detected point in normalized image coordinates, as reported by the vendor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Ordered landmarks of one face.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceLandmarks {
    landmark: Vec<Landmark>,
}

impl FaceLandmarks {
    pub fn new(landmark: Vec<Landmark>) -> Self {
        Self { landmark }
    }

    pub fn landmark(&self) -> &[Landmark] {
        &self.landmark
    }
}

impl FromIterator<Landmark> for FaceLandmarks {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Faces found in a single `process` call. Empty when nothing was detected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionResult {
    multi_face_landmarks: Vec<FaceLandmarks>,
}

impl DetectionResult {
    pub fn new(multi_face_landmarks: Vec<FaceLandmarks>) -> Self {
        Self {
            multi_face_landmarks,
        }
    }

    pub fn multi_face_landmarks(&self) -> &[FaceLandmarks] {
        &self.multi_face_landmarks
    }

    pub fn is_empty(&self) -> bool {
        self.multi_face_landmarks.is_empty()
    }
}

impl FromIterator<FaceLandmarks> for DetectionResult {
    fn from_iter<I: IntoIterator<Item = FaceLandmarks>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
