//! Process-wide facade for callers that expect an argument-less entry point.
//!
//! The vendor binding is installed once at startup; every later
//! [`get_face_mesh`] returns the same detector handle.

use std::sync::{Arc, OnceLock};

use crate::compat::face_mesh_context::{CompatError, FaceMeshContext, FaceMeshHandle};
use crate::detection::domain::vendor::VendorLibrary;
use crate::shared::config::CompatConfig;

static CONTEXT: OnceLock<FaceMeshContext> = OnceLock::new();

/// Install the vendor library with the default model location and timeout.
pub fn install_vendor(vendor: Arc<dyn VendorLibrary>) -> Result<(), CompatError> {
    install_vendor_with_config(vendor, CompatConfig::default())
}

pub fn install_vendor_with_config(
    vendor: Arc<dyn VendorLibrary>,
    config: CompatConfig,
) -> Result<(), CompatError> {
    CONTEXT
        .set(FaceMeshContext::new(vendor, config))
        .map_err(|_| CompatError::AlreadyInstalled)
}

/// The process-wide detector, built on first call.
pub fn get_face_mesh() -> Result<Arc<FaceMeshHandle>, CompatError> {
    CONTEXT
        .get()
        .ok_or(CompatError::NotInstalled)?
        .get_face_mesh()
}
