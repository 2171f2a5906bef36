pub mod face_mesh_context;
pub mod global_face_mesh;
