//! Core traits for histogram building

use crate::types::Histogram;
use num_traits::Float;
use termhist_core::Result;

/// Trait for building histograms from sample data
pub trait HistogramBuilder<F: Float = f64> {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[F]) -> Result<Histogram<F>>;

    /// Build a histogram from pre-sorted data
    ///
    /// Default implementation just calls build().
    fn build_sorted(&self, sorted_sample: &[F]) -> Result<Histogram<F>> {
        self.build(sorted_sample)
    }

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
