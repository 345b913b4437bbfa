#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod enhance;
pub mod equalize;
pub mod error;
pub mod image;
pub mod luma;
pub mod stretch;

// Building blocks the demos and advanced callers can reach into.
pub mod config;
pub mod histogram;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the three transforms + the pipeline runner.
pub use crate::enhance::{EnhanceOutcome, EnhanceParams, Enhancer};
pub use crate::equalize::{equalize, LookupTable};
pub use crate::error::EnhanceError;
pub use crate::luma::convert_to_grayscale;
pub use crate::stretch::stretch_contrast;

// Trace types returned by the runner.
pub use crate::diagnostics::{EnhanceTrace, HistogramSummary, StretchSummary};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use tone_enhancer::prelude::*;
///
/// let data = vec![0u8, 64, 128, 255];
/// let image = DecodedImage::gray(2, 2, data).unwrap();
///
/// let gray = convert_to_grayscale(&image).unwrap();
/// let equalized = equalize(&gray).unwrap();
/// assert_eq!(equalized.get(1, 1), 255);
/// ```
pub mod prelude {
    pub use crate::image::{DecodedImage, GrayImageU8, ImageF32};
    pub use crate::{
        convert_to_grayscale, equalize, stretch_contrast, EnhanceError, EnhanceParams, Enhancer,
    };
}
