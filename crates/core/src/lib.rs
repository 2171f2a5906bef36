//! Stable face-mesh detector surface over the legacy `FaceMesh` API and the
//! task-based `FaceLandmarker` API of the vendor landmark library.
//!
//! ```ignore
//! install_vendor(vendor)?;
//! let mesh = get_face_mesh()?;
//! let result = mesh.process(rgb.view().into_dyn())?;
//! let from_file = mesh.process_image(&image::open("face.jpg")?)?;
//! if let Some(face) = result.multi_face_landmarks().first() {
//!     let nose_tip = face.landmark()[1];
//! }
//! ```

pub mod compat;
pub mod detection;
pub mod shared;

pub use compat::face_mesh_context::{ApiVariant, CompatError, FaceMeshContext, FaceMeshHandle};
pub use compat::global_face_mesh::{get_face_mesh, install_vendor, install_vendor_with_config};
pub use detection::domain::face_landmarks::{DetectionResult, FaceLandmarks, Landmark};
pub use detection::infrastructure::model_resolver::{ensure_model_asset, ModelFetchError};
pub use shared::config::{CompatConfig, ModelAsset};
