//! Histogram equalization via cumulative-distribution remapping.
//!
//! The CDF of the input histogram, normalized over its nonzero entries, acts
//! as a monotonic remapping curve: frequently used intensity ranges are
//! spread apart, rare ones compressed. Bins with a zero CDF entry stay mapped
//! to 0 so unused low-end intensities cannot pick up spurious values.

use crate::error::EnhanceError;
use crate::histogram::{bin_index, Cdf, Histogram, NUM_BINS};
use crate::image::{GrayImageU8, ImageF32};

use rayon::prelude::*;

/// Precomputed intensity remapping derived from a normalized CDF.
#[derive(Clone, Debug)]
pub struct LookupTable {
    table: [u8; NUM_BINS],
}

impl LookupTable {
    /// Normalize the nonzero CDF entries to [0, 255].
    ///
    /// `(cdf − cdf_min) · 255 / (cdf_max − cdf_min)` with min and max taken
    /// over the nonzero subset, computed in f64 and truncated to u8. Entries
    /// that are zero in the CDF are left at 0.
    pub fn from_cdf(cdf: &Cdf) -> Result<Self, EnhanceError> {
        let (cdf_min, cdf_max) = cdf.nonzero_bounds().ok_or_else(|| {
            EnhanceError::DegenerateHistogram("image has no pixels".to_string())
        })?;
        if cdf_max == cdf_min {
            return Err(EnhanceError::DegenerateHistogram(
                "all pixels share a single intensity".to_string(),
            ));
        }

        let span = (cdf_max - cdf_min) as f64;
        let mut table = [0u8; NUM_BINS];
        for (entry, &c) in table.iter_mut().zip(cdf.values().iter()) {
            if c == 0 {
                continue;
            }
            *entry = ((c - cdf_min) as f64 * 255.0 / span) as u8;
        }
        Ok(Self { table })
    }

    #[inline]
    pub fn get(&self, intensity: u8) -> u8 {
        self.table[intensity as usize]
    }

    pub fn as_slice(&self) -> &[u8; NUM_BINS] {
        &self.table
    }

    /// Remap every pixel through the table, truncating float samples first.
    ///
    /// Each output pixel depends only on its own input value and the shared
    /// read-only table, so the remap runs data-parallel.
    pub fn apply(&self, gray: &ImageF32) -> GrayImageU8 {
        let mut out = GrayImageU8::new(gray.w, gray.h);
        out.data
            .par_iter_mut()
            .zip(gray.data.par_iter())
            .for_each(|(dst, &v)| {
                *dst = self.table[bin_index(v)];
            });
        out
    }
}

/// Equalize a grayscale image: histogram → CDF → lookup table → remap.
pub fn equalize(gray: &ImageF32) -> Result<GrayImageU8, EnhanceError> {
    let hist = Histogram::from_image(gray);
    let lut = LookupTable::from_cdf(&hist.cdf())?;
    Ok(lut.apply(gray))
}
