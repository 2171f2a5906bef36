pub mod capability_probe;
pub mod face_mesh_factory;
pub mod legacy_face_mesh;
pub mod model_resolver;
pub mod tasks_face_mesh;

#[cfg(test)]
pub(crate) mod fake_vendor;
