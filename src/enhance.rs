//! End-to-end enhancement pipeline.
//!
//! Overview
//! - Collapses the decoded input to a single-channel float image with the
//!   standard luma weights (or a widening passthrough for grayscale input).
//! - Builds the intensity histogram, derives the normalized-CDF lookup table
//!   and remaps every pixel through it.
//! - Optionally applies a linear contrast stretch to the *grayscale* image
//!   (not to the equalized output; both enhancements render the same input).
//! - Times each stage and assembles an [`EnhanceTrace`] for reporting.
//!
//! The runner holds parameters only; every call operates on its own buffers.

use crate::diagnostics::{
    EnhanceTrace, HistogramSummary, InputDescriptor, StageTiming, StretchSummary,
};
use crate::equalize::LookupTable;
use crate::error::EnhanceError;
use crate::histogram::Histogram;
use crate::image::{DecodedImage, GrayImageU8, ImageF32};
use crate::luma::convert_to_grayscale;
use crate::stretch::stretch_contrast;

use log::debug;
use std::time::Instant;

/// Pipeline parameters.
#[derive(Clone, Debug)]
pub struct EnhanceParams {
    /// Gain applied by the contrast stretch stage.
    pub contrast_level: f32,
    /// Disables the stretch stage entirely (equalization-only runs).
    pub enable_stretch: bool,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            contrast_level: 1.5,
            enable_stretch: true,
        }
    }
}

/// Images and trace produced by a pipeline run.
#[derive(Clone, Debug)]
pub struct EnhanceOutcome {
    /// Grayscale rendering of the input, luma values in [0, 255].
    pub gray: ImageF32,
    /// Histogram-equalized image.
    pub equalized: GrayImageU8,
    /// Contrast-stretched image, when the stage is enabled.
    pub stretched: Option<GrayImageU8>,
    pub trace: EnhanceTrace,
}

/// Runs the grayscale → equalize → stretch sequence.
pub struct Enhancer {
    params: EnhanceParams,
}

impl Enhancer {
    pub fn new(params: EnhanceParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EnhanceParams {
        &self.params
    }

    pub fn process(&self, image: &DecodedImage) -> Result<EnhanceOutcome, EnhanceError> {
        let total_start = Instant::now();
        let mut timings = Vec::new();

        let start = Instant::now();
        let gray = convert_to_grayscale(image)?;
        timings.push(StageTiming::new("convert", elapsed_ms(start)));
        debug!(
            "Enhancer::process converted {}x{}x{} input to grayscale",
            image.width(),
            image.height(),
            image.channels()
        );

        let start = Instant::now();
        let hist = Histogram::from_image(&gray);
        let cdf = hist.cdf();
        let lut = LookupTable::from_cdf(&cdf)?;
        timings.push(StageTiming::new("histogram", elapsed_ms(start)));

        let (cdf_min, cdf_max) = cdf
            .nonzero_bounds()
            .expect("lookup table construction verified nonzero bounds");
        debug!(
            "Enhancer::process histogram: {} populated bins, cdf range [{cdf_min}, {cdf_max}]",
            hist.populated_bins()
        );

        let start = Instant::now();
        let equalized = lut.apply(&gray);
        timings.push(StageTiming::new("remap", elapsed_ms(start)));

        let (stretched, stretch_summary) = if self.params.enable_stretch {
            let start = Instant::now();
            let stretched = stretch_contrast(&gray, self.params.contrast_level)?;
            timings.push(StageTiming::new("stretch", elapsed_ms(start)));

            let summary = summarize_stretch(&gray, self.params.contrast_level);
            debug!(
                "Enhancer::process stretch clipped {} highlight px",
                summary.clipped_high
            );
            (Some(stretched), Some(summary))
        } else {
            (None, None)
        };

        let trace = EnhanceTrace {
            input: InputDescriptor::from_image(image),
            histogram: HistogramSummary {
                populated_bins: hist.populated_bins(),
                cdf_min,
                cdf_max,
                lut: lut.as_slice().to_vec(),
            },
            stretch: stretch_summary,
            timings,
            total_ms: elapsed_ms(total_start),
        };

        Ok(EnhanceOutcome {
            gray,
            equalized,
            stretched,
            trace,
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn summarize_stretch(gray: &ImageF32, contrast_level: f32) -> StretchSummary {
    let gain = contrast_level as f64;
    let mut clipped_high = 0usize;
    let mut clipped_low = 0usize;
    for &v in &gray.data {
        let scaled = v as f64 / 255.0 * gain;
        if scaled > 1.0 {
            clipped_high += 1;
        } else if scaled < 0.0 {
            clipped_low += 1;
        }
    }
    StretchSummary {
        contrast_level,
        clipped_high,
        clipped_low,
    }
}
