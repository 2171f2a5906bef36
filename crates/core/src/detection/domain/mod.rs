pub mod face_landmarks;
pub mod face_mesh;
pub mod vendor;
