//! Fixed-width ASCII bar charts for one-dimensional histograms
//!
//! Any [`BinSource`] can be drawn. Each bin becomes one row holding its
//! half-open interval label, its count and a bar scaled so that the largest
//! count fills `max_bin_fraction` of the display width:
//!
//! ```text
//!
//!                +------------------------------------------------------------+
//! [-0.5, 0.3)  2 |**********************                                      |
//! [ 0.3, 1.1)  5 |*********************************************************   |
//! [ 1.1, 2.0]  3 |**********************************                          |
//!                +------------------------------------------------------------+
//!
//! ```
//!
//! # Examples
//!
//! ```rust
//! use termhist_display::{render, DisplayConfig};
//!
//! let bins: Vec<(f64, f64, u64)> = vec![(-0.5, 0.3, 2), (0.3, 1.1, 5), (1.1, 2.0, 3)];
//! let chart = render(&bins, &DisplayConfig::default()).unwrap();
//!
//! assert!(chart.contains("[ 1.1, 2.0]  3 |"));
//! ```
//!
//! Rendering either produces the whole chart or fails before anything is
//! written:
//!
//! ```rust
//! use termhist_core::Error;
//! use termhist_display::{render_to, DisplayConfig};
//!
//! let bins: Vec<(f64, f64, u64)> = vec![(0.0, 1.0, 0)];
//! let mut out = Vec::new();
//! let err = render_to(&bins, &DisplayConfig::default(), &mut out).unwrap_err();
//!
//! assert!(matches!(err, Error::DegenerateHistogram { .. }));
//! assert!(out.is_empty());
//! ```

pub mod config;
mod extract;
mod layout;
mod scale;

use std::io::{self, Write};

use termhist_core::{BinSource, Result};
use tracing::instrument;

pub use config::DisplayConfig;

/// Draw `source` as a multi-line chart
///
/// # Errors
///
/// - [`Error::InvalidConfig`](termhist_core::Error::InvalidConfig) if `config`
///   does not validate
/// - [`Error::EmptyHistogram`](termhist_core::Error::EmptyHistogram) if the
///   source has no bins
/// - [`Error::DegenerateHistogram`](termhist_core::Error::DegenerateHistogram)
///   if every row count is zero
#[instrument(skip_all, fields(bins = source.bin_count(), width = config.display_width))]
pub fn render<S: BinSource + ?Sized>(source: &S, config: &DisplayConfig) -> Result<String> {
    config.validate()?;
    let data = extract::extract(source, config.label_precision, config.include_overflow_bins)?;
    layout::draw_chart(&data, config)
}

/// Draw `source` and write the chart to `out` in a single write
///
/// Nothing is written if rendering fails.
pub fn render_to<S, W>(source: &S, config: &DisplayConfig, out: &mut W) -> Result<()>
where
    S: BinSource + ?Sized,
    W: Write + ?Sized,
{
    let chart = render(source, config)?;
    out.write_all(chart.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Draw `source` to standard output
pub fn print<S: BinSource + ?Sized>(source: &S, config: &DisplayConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render_to(source, config, &mut lock)
}

/// Chart rendering as a method on every bin source
pub trait DisplayExt: BinSource {
    /// See [`render`]
    fn render_chart(&self, config: &DisplayConfig) -> Result<String> {
        render(self, config)
    }

    /// See [`print`]
    fn print_chart(&self, config: &DisplayConfig) -> Result<()> {
        print(self, config)
    }
}

impl<S: BinSource + ?Sized> DisplayExt for S {}
