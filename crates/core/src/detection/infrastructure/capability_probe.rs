use crate::detection::domain::vendor::{SolutionsApi, VendorLibrary};

/// The legacy face mesh entry point, if the installed vendor library still
/// exposes it. Every failure to reach it counts as "not available".
pub fn legacy_entry_point(vendor: &dyn VendorLibrary) -> Option<&dyn SolutionsApi> {
    match vendor.solutions() {
        Ok(solutions) => Some(solutions),
        Err(e) => {
            log::debug!("Legacy face mesh API unavailable: {e}");
            None
        }
    }
}

/// Whether the installed vendor library still exposes the legacy face mesh.
pub fn has_solutions_api(vendor: &dyn VendorLibrary) -> bool {
    legacy_entry_point(vendor).is_some()
}
