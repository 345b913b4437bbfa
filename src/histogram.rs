//! Intensity histogram and cumulative distribution over the 8-bit range.

use crate::image::{ImageF32, ImageView};

pub const NUM_BINS: usize = 256;

/// Bin a float sample into [0, 255].
///
/// The saturating float→int cast truncates toward zero; out-of-range values
/// clamp to the boundary bins and NaN lands in bin 0.
#[inline]
pub(crate) fn bin_index(value: f32) -> usize {
    value as u8 as usize
}

/// 256-bin count of pixel intensities.
#[derive(Clone, Debug)]
pub struct Histogram {
    bins: [u32; NUM_BINS],
}

impl Histogram {
    /// Count every pixel of `image`, truncating float samples to integer bins.
    pub fn from_image(image: &ImageF32) -> Self {
        let mut bins = [0u32; NUM_BINS];
        if let Some(slice) = image.as_slice() {
            for &v in slice {
                bins[bin_index(v)] += 1;
            }
        } else {
            for row in image.rows() {
                for &v in row {
                    bins[bin_index(v)] += 1;
                }
            }
        }
        Self { bins }
    }

    pub fn bins(&self) -> &[u32; NUM_BINS] {
        &self.bins
    }

    /// Number of bins with at least one pixel.
    pub fn populated_bins(&self) -> usize {
        self.bins.iter().filter(|&&c| c > 0).count()
    }

    /// Running cumulative sum of the bin counts.
    pub fn cdf(&self) -> Cdf {
        let mut values = [0u64; NUM_BINS];
        let mut acc = 0u64;
        for (dst, &count) in values.iter_mut().zip(self.bins.iter()) {
            acc += count as u64;
            *dst = acc;
        }
        Cdf { values }
    }
}

/// Monotonically non-decreasing prefix sum of a [`Histogram`].
#[derive(Clone, Debug)]
pub struct Cdf {
    values: [u64; NUM_BINS],
}

impl Cdf {
    pub fn values(&self) -> &[u64; NUM_BINS] {
        &self.values
    }

    /// Minimum and maximum over the nonzero entries only.
    ///
    /// Zero entries correspond to unused low-end intensities and must not
    /// participate in the normalization anchor. Returns `None` when every
    /// entry is zero (empty image).
    pub fn nonzero_bounds(&self) -> Option<(u64, u64)> {
        let mut min = None;
        let mut max = None;
        for &v in &self.values {
            if v == 0 {
                continue;
            }
            if min.is_none() {
                min = Some(v);
            }
            max = Some(v);
        }
        Some((min?, max?))
    }
}

#[cfg(test)]
mod tests {
    use super::{bin_index, Histogram};
    use crate::image::ImageF32;

    fn image_from(values: &[f32], w: usize, h: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        img.data.copy_from_slice(values);
        img
    }

    #[test]
    fn bin_index_truncates_and_clamps() {
        assert_eq!(bin_index(0.0), 0);
        assert_eq!(bin_index(254.9), 254);
        assert_eq!(bin_index(255.0), 255);
        assert_eq!(bin_index(300.0), 255);
        assert_eq!(bin_index(-5.0), 0);
    }

    #[test]
    fn counts_each_intensity_once() {
        let img = image_from(&[0.0, 64.7, 128.0, 255.0], 2, 2);
        let hist = Histogram::from_image(&img);
        assert_eq!(hist.bins()[0], 1);
        assert_eq!(hist.bins()[64], 1);
        assert_eq!(hist.bins()[128], 1);
        assert_eq!(hist.bins()[255], 1);
        assert_eq!(hist.populated_bins(), 4);
    }

    #[test]
    fn cdf_is_monotonic_and_ends_at_pixel_count() {
        let img = image_from(&[10.0, 10.0, 200.0, 40.0, 40.0, 40.0], 3, 2);
        let cdf = Histogram::from_image(&img).cdf();
        let values = cdf.values();
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(values[255], 6);
    }

    #[test]
    fn nonzero_bounds_skip_leading_zeros() {
        let img = image_from(&[100.0, 100.0, 220.0, 220.0], 2, 2);
        let cdf = Histogram::from_image(&img).cdf();
        // bins below 100 are zero and excluded from the minimum
        assert_eq!(cdf.nonzero_bounds(), Some((2, 4)));
    }

    #[test]
    fn nonzero_bounds_empty_image() {
        let img = ImageF32::new(0, 0);
        let cdf = Histogram::from_image(&img).cdf();
        assert_eq!(cdf.nonzero_bounds(), None);
    }
}
