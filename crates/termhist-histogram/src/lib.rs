//! Histogram data sources for terminal rendering
//!
//! This crate provides a small concrete histogram type that implements
//! [`termhist_core::BinSource`], so it can be handed straight to the
//! renderer in `termhist-display`. Histograms built over a fixed range keep
//! track of the samples that fell outside it.
//!
//! # Examples
//!
//! ## Fixed-Width Bins Over the Sample Range
//!
//! ```rust
//! use termhist_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//!
//! println!("Histogram with {} bins", histogram.len());
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.left, bin.right, bin.count);
//! }
//! ```
//!
//! ## Regular Axis With Underflow and Overflow
//!
//! ```rust
//! use termhist_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![-3.0, 0.5, 0.5, 0.3, -0.2, 1.6, 7.5];
//! let histogram = FixedWidthBuilder::new(5)
//!     .with_range(-0.5, 2.0)
//!     .build(&data)
//!     .unwrap();
//!
//! assert_eq!(histogram.underflow(), 1);
//! assert_eq!(histogram.overflow(), 1);
//! assert_eq!(histogram.counts(), vec![1, 1, 2, 0, 1]);
//! ```

pub mod builders;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::FixedWidthBuilder;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

/// Create a histogram with a fixed number of equal-width bins over the sample range
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> termhist_core::Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Create a histogram with `num_bins` equal-width bins over `[lower, upper)`
pub fn regular_histogram(
    data: &[f64],
    num_bins: usize,
    lower: f64,
    upper: f64,
) -> termhist_core::Result<Histogram> {
    FixedWidthBuilder::new(num_bins)
        .with_range(lower, upper)
        .build(data)
}

pub use termhist_core::Result;
