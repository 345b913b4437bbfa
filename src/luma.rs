//! RGB → grayscale conversion using the standard luma weights.

use crate::error::EnhanceError;
use crate::image::{DecodedImage, ImageF32};

/// Perceptual weights collapsing R, G, B to a single brightness value.
pub const LUMA_WEIGHTS: [f32; 3] = [0.2989, 0.5870, 0.1140];

/// Weighted luma of a single RGB triple, in the `[0, 255]` range.
#[inline]
pub fn rgb_to_luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_WEIGHTS[0] * r as f32 + LUMA_WEIGHTS[1] * g as f32 + LUMA_WEIGHTS[2] * b as f32
}

/// Collapse a decoded image to a single-channel float image.
///
/// 3-channel input is reduced with [`LUMA_WEIGHTS`]; 1-channel input passes
/// through with each sample widened to f32, values unchanged. Any other
/// channel count is rejected — decoders are expected to strip alpha planes
/// before handing buffers to the transforms.
pub fn convert_to_grayscale(image: &DecodedImage) -> Result<ImageF32, EnhanceError> {
    match image.channels() {
        1 => Ok(widen_gray(image)),
        3 => Ok(weighted_luma(image)),
        n => Err(EnhanceError::UnsupportedFormat(format!(
            "expected 1 or 3 channels, got {n}"
        ))),
    }
}

fn widen_gray(image: &DecodedImage) -> ImageF32 {
    let mut out = ImageF32::new(image.width(), image.height());
    for (dst, &v) in out.data.iter_mut().zip(image.data().iter()) {
        *dst = v as f32;
    }
    out
}

fn weighted_luma(image: &DecodedImage) -> ImageF32 {
    let mut out = ImageF32::new(image.width(), image.height());
    for (dst, px) in out.data.iter_mut().zip(image.pixels()) {
        *dst = rgb_to_luma(px[0], px[1], px[2]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{convert_to_grayscale, rgb_to_luma};
    use crate::error::EnhanceError;
    use crate::image::DecodedImage;

    #[test]
    fn single_channel_passes_through_unchanged() {
        let data = vec![0u8, 13, 130, 255];
        let image = DecodedImage::gray(2, 2, data.clone()).expect("valid buffer");
        let gray = convert_to_grayscale(&image).expect("grayscale input is supported");
        for (i, &v) in data.iter().enumerate() {
            assert_eq!(gray.data[i], v as f32);
        }
    }

    #[test]
    fn constant_color_maps_to_weighted_luma() {
        let (r, g, b) = (100u8, 150u8, 200u8);
        let data: Vec<u8> = [r, g, b].repeat(6);
        let image = DecodedImage::rgb(3, 2, data).expect("valid buffer");
        let gray = convert_to_grayscale(&image).expect("rgb input is supported");

        let expected = rgb_to_luma(r, g, b);
        assert!((expected - 140.74).abs() < 1e-2);
        for &v in &gray.data {
            assert!((v - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn four_channel_buffer_is_rejected() {
        let image = DecodedImage::new(2, 2, 4, vec![0u8; 16]).expect("valid buffer");
        let err = convert_to_grayscale(&image).unwrap_err();
        assert!(matches!(err, EnhanceError::UnsupportedFormat(_)));
    }
}
