//! Linear contrast stretching with clipping.

use crate::error::EnhanceError;
use crate::image::{GrayImageU8, ImageF32};

use rayon::prelude::*;

/// Rescale intensities by a gain factor.
///
/// Each pixel is normalized to [0, 1], multiplied by `contrast_level`,
/// clipped to [0, 1] and scaled back to the 8-bit range with a truncating
/// cast. Gains below 1 compress toward black; gains above 1 brighten and may
/// clip highlights to pure white. The gain must be finite and strictly
/// positive.
pub fn stretch_contrast(
    gray: &ImageF32,
    contrast_level: f32,
) -> Result<GrayImageU8, EnhanceError> {
    if !contrast_level.is_finite() || contrast_level <= 0.0 {
        return Err(EnhanceError::InvalidContrastLevel(contrast_level));
    }

    let gain = contrast_level as f64;
    let mut out = GrayImageU8::new(gray.w, gray.h);
    out.data
        .par_iter_mut()
        .zip(gray.data.par_iter())
        .for_each(|(dst, &v)| {
            let scaled = (v as f64 / 255.0 * gain).clamp(0.0, 1.0);
            *dst = (scaled * 255.0) as u8;
        });
    Ok(out)
}
