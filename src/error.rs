//! Error type shared by the enhancement transforms.

/// Failures produced by the core transforms. I/O helpers report plain
/// `String` errors instead; only the numeric pipeline uses this enum.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// The sample buffer does not have 1 or 3 channels.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The CDF has fewer than two distinct nonzero values, so the
    /// normalization anchor collapses (single-intensity or empty image).
    #[error("degenerate histogram: {0}")]
    DegenerateHistogram(String),

    /// Contrast gain must be finite and strictly positive.
    #[error("invalid contrast level: {0}")]
    InvalidContrastLevel(f32),

    /// A buffer length does not match the declared image geometry.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
