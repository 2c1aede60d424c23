//! Fixed-width histogram building

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use num_traits::{Float, NumCast};
use termhist_core::{Error, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins. Without
/// an explicit range the bins span the finite sample values and the last bin
/// is closed. With [`with_range`](Self::with_range) the bins form a regular
/// axis over `[lower, upper)`, and samples outside it are tallied as
/// underflow/overflow instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    range: Option<(f64, f64)>,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            range: None,
        }
    }

    /// Fix the axis to `[lower, upper)` instead of the sample range
    pub fn with_range(mut self, lower: f64, upper: f64) -> Self {
        self.range = Some((lower, upper));
        self
    }

    fn check_num_bins(&self) -> Result<()> {
        if self.num_bins == 0 {
            return Err(Error::InvalidParameter(
                "num_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Equal-width bins over `[lower, upper]`, all empty
    fn empty_bins<F: Float>(&self, lower: F, upper: F) -> Vec<HistogramBin<F>> {
        let num_bins_f = cast::<F>(self.num_bins);
        let width = (upper - lower) / num_bins_f;

        (0..self.num_bins)
            .map(|i| {
                let left = lower + cast::<F>(i) * width;
                let right = if i == self.num_bins - 1 {
                    upper // Last edge is exact, not accumulated
                } else {
                    lower + cast::<F>(i + 1) * width
                };
                HistogramBin::new(left, right, 0, 0)
            })
            .collect()
    }

    /// Index of the regular bin holding `value`, which must lie in `[lower, upper]`
    fn bin_index<F: Float>(&self, value: F, lower: F, upper: F) -> usize {
        let width = (upper - lower) / cast::<F>(self.num_bins);
        let index = ((value - lower) / width)
            .floor()
            .to_usize()
            .unwrap_or(0);
        // Rounding can push values near the top edge one bin too far
        index.min(self.num_bins - 1)
    }

    fn build_regular<F: Float>(&self, sample: &[F], lower: f64, upper: f64) -> Result<Histogram<F>> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::non_finite("histogram range"));
        }
        if lower >= upper {
            return Err(Error::InvalidParameter(format!(
                "histogram range must satisfy lower < upper, got [{lower}, {upper})"
            )));
        }

        let lower_f = <F as NumCast>::from(lower).ok_or_else(|| Error::non_finite("histogram range"))?;
        let upper_f = <F as NumCast>::from(upper).ok_or_else(|| Error::non_finite("histogram range"))?;

        let mut bins = self.empty_bins(lower_f, upper_f);
        let mut underflow = 0u64;
        let mut overflow = 0u64;

        for &value in sample {
            if value < lower_f {
                underflow += 1;
            } else if value >= upper_f || value.is_nan() {
                overflow += 1;
            } else {
                bins[self.bin_index(value, lower_f, upper_f)].count += 1;
            }
        }

        Ok(finish(bins, lower_f, upper_f).with_out_of_range(underflow, overflow))
    }
}

impl<F: Float> HistogramBuilder<F> for FixedWidthBuilder {
    fn build(&self, sample: &[F]) -> Result<Histogram<F>> {
        self.check_num_bins()?;

        if let Some((lower, upper)) = self.range {
            return self.build_regular(sample, lower, upper);
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[F]) -> Result<Histogram<F>> {
        self.check_num_bins()?;

        if let Some((lower, upper)) = self.range {
            return self.build_regular(sorted_sample, lower, upper);
        }

        // Non-finite values have no place on a data-derived axis
        let underflow = sorted_sample.iter().filter(|v| **v == F::neg_infinity()).count() as u64;
        let overflow = sorted_sample
            .iter()
            .filter(|v| **v == F::infinity() || v.is_nan())
            .count() as u64;
        let finite: Vec<F> = sorted_sample.iter().copied().filter(|v| v.is_finite()).collect();

        let (Some(&min), Some(&max)) = (
            finite.iter().min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)),
            finite.iter().max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)),
        ) else {
            return Ok(Histogram::new(vec![], 0, F::zero(), F::zero())
                .with_out_of_range(underflow, overflow));
        };

        let epsilon = <F as NumCast>::from(1e-10).unwrap_or_else(F::epsilon);
        if (max - min).abs() < epsilon {
            // All values are the same
            let total = finite.len() as u64;
            let bin = HistogramBin::new(min, max, total, total);
            return Ok(Histogram::new(vec![bin], total, min, max)
                .with_out_of_range(underflow, overflow));
        }

        let mut bins = self.empty_bins(min, max);
        for &value in &finite {
            bins[self.bin_index(value, min, max)].count += 1;
        }

        Ok(finish(bins, min, max).with_out_of_range(underflow, overflow))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

fn cast<F: Float>(value: usize) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::nan)
}

/// Fill in totals and densities once every count is known
fn finish<F: Float>(mut bins: Vec<HistogramBin<F>>, min: F, max: F) -> Histogram<F> {
    let total: u64 = bins.iter().map(|bin| bin.count).sum();
    for bin in &mut bins {
        bin.update_density(total);
    }
    Histogram::new(bins, total, min, max)
}
