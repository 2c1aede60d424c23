//! Core types for histogram representation

use std::fmt;

use num_traits::{Float, NumCast, ToPrimitive};
use termhist_core::{Bin, BinSource};

/// Convert a count into the histogram's float type
fn count_to_float<F: Float>(count: u64) -> F {
    <F as NumCast>::from(count).unwrap_or_else(F::nan)
}

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin<F: Float = f64> {
    /// Left edge of the bin (inclusive)
    pub left: F,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: F,
    /// Number of values in this bin
    pub count: u64,
    /// Density (count / (total_count * bin_width))
    pub density: F,
}

impl<F: Float> HistogramBin<F> {
    /// Create a new histogram bin
    pub fn new(left: F, right: F, count: u64, total_count: u64) -> Self {
        let mut bin = Self {
            left,
            right,
            count,
            density: F::zero(),
        };
        bin.update_density(total_count);
        bin
    }

    /// Recompute the density against a new total
    pub(crate) fn update_density(&mut self, total_count: u64) {
        let width = self.width();
        self.density = if width > F::zero() && total_count > 0 {
            count_to_float::<F>(self.count) / (count_to_float::<F>(total_count) * width)
        } else {
            F::zero()
        };
    }

    /// Get the center point of the bin
    pub fn center(&self) -> F {
        (self.left + self.right) / (F::one() + F::one())
    }

    /// Get the width of the bin
    pub fn width(&self) -> F {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: F) -> bool {
        value >= self.left && value < self.right
    }
}

impl<F: Float + fmt::Display> fmt::Display for HistogramBin<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<F: Float = f64> {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin<F>>,
    /// Number of data points that landed in a regular bin
    total_count: u64,
    /// Data points below the first bin
    underflow: u64,
    /// Data points at or above the end of the last bin, plus NaN
    overflow: u64,
    /// Lower edge of the first bin
    min: F,
    /// Upper edge of the last bin
    max: F,
}

impl<F: Float> Histogram<F> {
    /// Create a new histogram without out-of-range counts
    pub fn new(bins: Vec<HistogramBin<F>>, total_count: u64, min: F, max: F) -> Self {
        Self {
            bins,
            total_count,
            underflow: 0,
            overflow: 0,
            min,
            max,
        }
    }

    /// Attach underflow and overflow counts
    pub fn with_out_of_range(mut self, underflow: u64, overflow: u64) -> Self {
        self.underflow = underflow;
        self.overflow = overflow;
        self
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin<F>] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the count of data points that landed in a regular bin
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Get the count of data points below the first bin
    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    /// Get the count of data points past the last bin
    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    /// Every data point seen, in range or not
    pub fn entries(&self) -> u64 {
        self.total_count + self.underflow + self.overflow
    }

    /// Get the minimum edge
    pub fn min(&self) -> F {
        self.min
    }

    /// Get the maximum edge
    pub fn max(&self) -> F {
        self.max
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: F) -> Option<usize> {
        // Last bin includes its right boundary
        if let Some(last) = self.bins.last() {
            if value == last.right {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<u64> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<F> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<F> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.extend(self.bins.iter().map(|bin| bin.left));
        edges.push(last.right);
        edges
    }
}

impl<F: Float> BinSource for Histogram<F> {
    fn bin_count(&self) -> usize {
        self.bins.len()
    }

    fn bin(&self, index: usize) -> Bin {
        let bin = &self.bins[index];
        Bin::new(
            bin.left.to_f64().unwrap_or(f64::NAN),
            bin.right.to_f64().unwrap_or(f64::NAN),
            bin.count,
        )
    }

    fn underflow(&self) -> Option<u64> {
        Some(self.underflow)
    }

    fn overflow(&self) -> Option<u64> {
        Some(self.overflow)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Histogram<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}], underflow={}, overflow={})",
            self.len(),
            self.total_count,
            self.min,
            self.max,
            self.underflow,
            self.overflow
        )
    }
}
