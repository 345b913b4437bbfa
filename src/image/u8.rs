use crate::error::EnhanceError;

/// Owned single-channel 8-bit image in row-major layout (stride == width).
///
/// Output type of the enhancement transforms; sample values cover the full
/// `[0, 255]` intensity range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of bytes between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Wrap raw row-major bytes, validating the buffer length.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self, EnhanceError> {
        if data.len() != w * h {
            return Err(EnhanceError::DimensionMismatch(format!(
                "expected {} bytes for a {w}x{h} grayscale buffer, got {}",
                w * h,
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Widen to a float image, keeping values in the `[0, 255]` range.
    ///
    /// Bridges pre-existing integer grayscale data into the transforms that
    /// consume [`super::ImageF32`].
    pub fn to_f32(&self) -> super::ImageF32 {
        let mut out = super::ImageF32::new(self.w, self.h);
        for (dst, &v) in out.data.iter_mut().zip(self.data.iter()) {
            *dst = v as f32;
        }
        out
    }
}

impl crate::image::traits::ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
