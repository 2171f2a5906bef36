use ndarray::{s, Array3, ArrayView2, ArrayView3, ArrayViewD, Axis, CowArray, Ix2, Ix3};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageShapeError {
    #[error("expected an HxW or HxWxC image, got {0} dimensions")]
    Rank(usize),
    #[error("cannot build an RGB image from {0} channels")]
    Channels(usize),
}

/// Contiguous 8-bit RGB pixels, `(height, width, 3)` in row-major order.
///
/// This is the only image shape the landmark detectors accept. Input that is
/// already contiguous RGB is borrowed, everything else is copied once.
#[derive(Debug)]
pub struct RgbImage<'a> {
    pixels: CowArray<'a, u8, Ix3>,
}

impl<'a> RgbImage<'a> {
    /// Coerce an arbitrary `u8` image into contiguous RGB.
    ///
    /// - `HxW` and `HxWx1`: the single channel is replicated three times.
    /// - `HxWx3`: borrowed when contiguous, copied otherwise.
    /// - `HxWxC` with `C > 3`: the first three channels are kept.
    pub fn coerce(image: ArrayViewD<'a, u8>) -> Result<Self, ImageShapeError> {
        let pixels = match image.ndim() {
            2 => {
                let gray = image
                    .into_dimensionality::<Ix2>()
                    .map_err(|_| ImageShapeError::Rank(2))?;
                CowArray::from(replicate_gray(gray))
            }
            3 => {
                let arr = image
                    .into_dimensionality::<Ix3>()
                    .map_err(|_| ImageShapeError::Rank(3))?;
                match arr.len_of(Axis(2)) {
                    3 if arr.is_standard_layout() => CowArray::from(arr),
                    3 => CowArray::from(arr.as_standard_layout().into_owned()),
                    1 => CowArray::from(replicate_gray(arr.index_axis_move(Axis(2), 0))),
                    c if c > 3 => CowArray::from(
                        arr.slice(s![.., .., ..3]).as_standard_layout().into_owned(),
                    ),
                    c => return Err(ImageShapeError::Channels(c)),
                }
            }
            n => return Err(ImageShapeError::Rank(n)),
        };
        Ok(Self { pixels })
    }

    pub fn width(&self) -> usize {
        self.pixels.len_of(Axis(1))
    }

    pub fn height(&self) -> usize {
        self.pixels.len_of(Axis(0))
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.pixels
            .as_slice()
            .expect("RgbImage pixels are always in standard layout")
    }

    /// True when the pixels still point at the caller's buffer.
    pub fn is_borrowed(&self) -> bool {
        self.pixels.is_view()
    }
}

fn replicate_gray(gray: ArrayView2<'_, u8>) -> Array3<u8> {
    let (h, w) = gray.dim();
    Array3::from_shape_fn((h, w, 3), |(y, x, _)| gray[[y, x]])
}
