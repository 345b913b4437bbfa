//! Serializable trace describing a pipeline run.
//!
//! `EnhanceTrace` is assembled by the [`crate::enhance::Enhancer`] and
//! written to disk as JSON by the demo tools, bundling per-stage timings with
//! summary statistics of the histogram normalization and stretch clipping.

use crate::image::DecodedImage;
use serde::{Deserialize, Serialize};

/// Geometry of the decoded input buffer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl InputDescriptor {
    pub fn from_image(image: &DecodedImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
        }
    }
}

/// Histogram normalization details captured during equalization.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramSummary {
    /// Bins with at least one pixel.
    pub populated_bins: usize,
    /// Normalization anchors over the nonzero CDF subset.
    pub cdf_min: u64,
    pub cdf_max: u64,
    /// The derived 256-entry remapping table.
    pub lut: Vec<u8>,
}

/// Clipping behaviour of the contrast stretch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StretchSummary {
    pub contrast_level: f32,
    /// Pixels pushed past pure white by the gain.
    pub clipped_high: usize,
    /// Pixels below zero before clipping (only possible for out-of-range
    /// float inputs).
    pub clipped_low: usize,
}

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Full trace of a pipeline run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceTrace {
    pub input: InputDescriptor,
    pub histogram: HistogramSummary,
    /// Absent when the run skipped the contrast stretch.
    pub stretch: Option<StretchSummary>,
    pub timings: Vec<StageTiming>,
    pub total_ms: f64,
}
