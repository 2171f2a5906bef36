use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use image::DynamicImage;
use ndarray::ArrayViewD;

use crate::detection::domain::face_landmarks::DetectionResult;
use crate::detection::domain::face_mesh::FaceMesh;
use crate::detection::domain::vendor::VendorLibrary;
use crate::detection::infrastructure::face_mesh_factory::create_face_mesh;
pub use crate::detection::infrastructure::face_mesh_factory::{ApiVariant, CompatError};
use crate::shared::config::CompatConfig;
use crate::shared::image_array::array_from_image;

/// The detector selected for this process, shareable across threads.
///
/// Detection calls are serialized; the vendor detectors are not reentrant.
pub struct FaceMeshHandle {
    variant: ApiVariant,
    mesh: Mutex<Box<dyn FaceMesh>>,
}

impl FaceMeshHandle {
    pub fn variant(&self) -> ApiVariant {
        self.variant
    }

    /// Detect face landmarks in an `HxW` or `HxWxC` 8-bit image.
    ///
    /// Errors from the vendor library are returned unchanged.
    pub fn process(
        &self,
        image: ArrayViewD<'_, u8>,
    ) -> Result<DetectionResult, Box<dyn std::error::Error + Send + Sync>> {
        let mut mesh = self.mesh.lock().unwrap_or_else(PoisonError::into_inner);
        mesh.process(image)
    }

    /// Detect face landmarks in a decoded image.
    pub fn process_image(
        &self,
        image: &DynamicImage,
    ) -> Result<DetectionResult, Box<dyn std::error::Error + Send + Sync>> {
        let pixels = array_from_image(image)?;
        self.process(pixels.view())
    }
}

impl fmt::Debug for FaceMeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaceMeshHandle")
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Owns the lazily built detector for one vendor library.
///
/// The first [`get_face_mesh`](Self::get_face_mesh) probes the vendor and
/// builds a backend while holding a lock, so concurrent first calls still
/// build exactly one. A failed build is not cached.
pub struct FaceMeshContext {
    vendor: Arc<dyn VendorLibrary>,
    config: CompatConfig,
    handle: Mutex<Option<Arc<FaceMeshHandle>>>,
    variant: OnceLock<ApiVariant>,
}

impl FaceMeshContext {
    pub fn new(vendor: Arc<dyn VendorLibrary>, config: CompatConfig) -> Self {
        Self {
            vendor,
            config,
            handle: Mutex::new(None),
            variant: OnceLock::new(),
        }
    }

    pub fn get_face_mesh(&self) -> Result<Arc<FaceMeshHandle>, CompatError> {
        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.as_ref() {
            return Ok(handle.clone());
        }

        let (variant, mesh) = create_face_mesh(self.vendor.as_ref(), &self.config)?;
        let handle = Arc::new(FaceMeshHandle {
            variant,
            mesh: Mutex::new(mesh),
        });
        let _ = self.variant.set(variant);
        *slot = Some(handle.clone());
        Ok(handle)
    }

    /// `None` until a backend has been built. Never waits on a build that
    /// is in progress.
    pub fn active_variant(&self) -> Option<ApiVariant> {
        self.variant.get().copied()
    }

    pub fn config(&self) -> &CompatConfig {
        &self.config
    }
}
