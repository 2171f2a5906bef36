use thiserror::Error;

use crate::detection::domain::face_mesh::FaceMesh;
use crate::detection::domain::vendor::{VendorError, VendorLibrary};
use crate::shared::config::CompatConfig;

use super::capability_probe::legacy_entry_point;
use super::legacy_face_mesh::LegacyFaceMeshBackend;
use super::model_resolver::{ensure_model_asset, ModelFetchError};
use super::tasks_face_mesh::TasksFaceMesh;

/// Which vendor API generation serves detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiVariant {
    /// Legacy `solutions` face mesh.
    Solutions,
    /// Task-based face landmarker.
    Tasks,
}

#[derive(Error, Debug)]
pub enum CompatError {
    #[error(transparent)]
    ModelFetch(#[from] ModelFetchError),
    #[error("no usable face landmark API in the vendor library: {0}")]
    TasksUnavailable(#[source] VendorError),
    #[error("vendor library failed to create a detector: {0}")]
    Vendor(#[source] VendorError),
    #[error("no vendor library installed; call install_vendor first")]
    NotInstalled,
    #[error("a vendor library is already installed")]
    AlreadyInstalled,
}

/// Creates the detector for whichever API the vendor library offers.
///
/// Prefers the legacy face mesh when it is reachable. Otherwise makes sure
/// the task model bundle is on disk and builds the task-based landmarker.
/// Logs which backend is selected.
pub fn create_face_mesh(
    vendor: &dyn VendorLibrary,
    config: &CompatConfig,
) -> Result<(ApiVariant, Box<dyn FaceMesh>), CompatError> {
    if let Some(solutions) = legacy_entry_point(vendor) {
        let backend = LegacyFaceMeshBackend::create(solutions).map_err(CompatError::Vendor)?;
        log::info!("Using legacy face mesh API");
        return Ok((ApiVariant::Solutions, Box::new(backend)));
    }

    let tasks = vendor.tasks().map_err(CompatError::TasksUnavailable)?;
    let model_path = ensure_model_asset(&config.model, config.download_timeout, None)?;
    let backend = TasksFaceMesh::create(tasks, model_path).map_err(CompatError::Vendor)?;
    log::info!("Using task-based face landmarker API");
    Ok((ApiVariant::Tasks, Box::new(backend)))
}
