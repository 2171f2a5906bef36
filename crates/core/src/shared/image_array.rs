use image::DynamicImage;
use ndarray::{Array2, Array3, ArrayD, ShapeError};

/// Convert an already decoded image into the `u8` array layout accepted by
/// [`FaceMeshHandle::process`](crate::FaceMeshHandle::process).
///
/// 8-bit grayscale stays `HxW`, images with an alpha channel become `HxWx4`
/// and everything else becomes `HxWx3`. Channel coercion is left to the
/// detector so both paths go through the same rules.
pub fn array_from_image(image: &DynamicImage) -> Result<ArrayD<u8>, ShapeError> {
    let w = image.width() as usize;
    let h = image.height() as usize;

    match image {
        DynamicImage::ImageLuma8(gray) => {
            Ok(Array2::from_shape_vec((h, w), gray.as_raw().clone())?.into_dyn())
        }
        _ if image.color().has_alpha() => {
            Ok(Array3::from_shape_vec((h, w, 4), image.to_rgba8().into_raw())?.into_dyn())
        }
        _ => Ok(Array3::from_shape_vec((h, w, 3), image.to_rgb8().into_raw())?.into_dyn()),
    }
}
