//! ASCII bar charts of one-dimensional histograms
//!
//! This facade re-exports the termhist workspace crates:
//!
//! - `termhist_core`: the shared error type and the [`BinSource`] capability
//! - [`histogram`]: a concrete histogram with underflow/overflow tracking
//! - [`display`]: the chart renderer and its [`DisplayConfig`]
//!
//! ```rust
//! use termhist::prelude::*;
//!
//! let histogram = FixedWidthBuilder::new(4)
//!     .with_range(0.0, 4.0)
//!     .build(&[0.5, 1.5, 1.7, 3.2, 9.0])
//!     .unwrap();
//! let chart = histogram
//!     .render_chart(&DisplayConfig::default().with_overflow_bins(true))
//!     .unwrap();
//!
//! assert!(chart.contains("[ 4.0, inf]  1 |"));
//! ```

pub use termhist_display as display;
pub use termhist_histogram as histogram;

pub use termhist_core::{Bin, BinSource, Error, Result};
pub use termhist_display::{print, render, render_to, DisplayConfig, DisplayExt};
pub use termhist_histogram::{FixedWidthBuilder, Histogram, HistogramBin, HistogramBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Bin, BinSource, DisplayConfig, DisplayExt, Error, FixedWidthBuilder, Histogram,
        HistogramBuilder, Result,
    };
}
