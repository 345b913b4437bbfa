use crate::error::EnhanceError;

/// Owned interleaved 8-bit sample buffer as produced by a decoder.
///
/// `channels == 1` is grayscale, `channels == 3` is RGB. Other channel counts
/// can be constructed (decoders are free to hand over anything), but the
/// grayscale converter rejects them.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl DecodedImage {
    /// Wrap a raw interleaved buffer, validating its length against the
    /// declared geometry.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, EnhanceError> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(EnhanceError::DimensionMismatch(format!(
                "expected {expected} bytes for a {width}x{height}x{channels} buffer, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Single-channel constructor.
    pub fn gray(width: usize, height: usize, data: Vec<u8>) -> Result<Self, EnhanceError> {
        Self::new(width, height, 1, data)
    }

    /// Interleaved-RGB constructor.
    pub fn rgb(width: usize, height: usize, data: Vec<u8>) -> Result<Self, EnhanceError> {
        Self::new(width, height, 3, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel (1 = grayscale, 3 = RGB)
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Raw interleaved samples in row-major order
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pixels as `channels`-sized sample groups.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels.max(1))
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::DecodedImage;
    use crate::error::EnhanceError;

    #[test]
    fn rejects_short_buffer() {
        let err = DecodedImage::rgb(2, 2, vec![0u8; 11]).unwrap_err();
        assert!(matches!(err, EnhanceError::DimensionMismatch(_)));
    }

    #[test]
    fn pixels_iterates_sample_groups() {
        let img = DecodedImage::rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).expect("valid buffer");
        let px: Vec<&[u8]> = img.pixels().collect();
        assert_eq!(px, vec![&[1u8, 2, 3][..], &[4u8, 5, 6][..]]);
    }
}
