//! Pulling labels and counts out of a bin source

use termhist_core::{BinSource, Error, Result};
use tracing::debug;

/// Bin bounds formatted as text, plus raw counts
///
/// Index `i` of every vector refers to the same row of the chart.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExtractedData {
    pub(crate) lower_bounds: Vec<String>,
    pub(crate) upper_bounds: Vec<String>,
    pub(crate) counts: Vec<u64>,
}

impl ExtractedData {
    fn with_capacity(rows: usize) -> Self {
        Self {
            lower_bounds: Vec::with_capacity(rows),
            upper_bounds: Vec::with_capacity(rows),
            counts: Vec::with_capacity(rows),
        }
    }

    fn push(&mut self, lower: f64, upper: f64, count: u64, precision: usize) {
        self.lower_bounds.push(format_bound(lower, precision));
        self.upper_bounds.push(format_bound(upper, precision));
        self.counts.push(count);
    }

    /// Number of chart rows
    pub(crate) fn len(&self) -> usize {
        debug_assert_eq!(self.lower_bounds.len(), self.counts.len());
        debug_assert_eq!(self.upper_bounds.len(), self.counts.len());
        self.counts.len()
    }
}

/// Format a bound with a fixed number of decimals (`-inf`/`inf` for infinities)
pub(crate) fn format_bound(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Visit the source once, front to back, and format every bin
///
/// With `include_overflow` an underflow row `[-inf, first.lower)` is placed
/// before the regular bins and an overflow row `[last.upper, inf]` after
/// them. Their counts are whatever the source tracks, or zero.
pub(crate) fn extract<S: BinSource + ?Sized>(
    source: &S,
    precision: usize,
    include_overflow: bool,
) -> Result<ExtractedData> {
    let bin_count = source.bin_count();
    if bin_count == 0 {
        return Err(Error::EmptyHistogram);
    }

    let extra_rows = if include_overflow { 2 } else { 0 };
    let mut data = ExtractedData::with_capacity(bin_count + extra_rows);

    let mut bins = source.bins().peekable();
    if include_overflow {
        if let Some(first) = bins.peek() {
            let underflow = source.underflow().unwrap_or(0);
            data.push(f64::NEG_INFINITY, first.lower, underflow, precision);
        }
    }

    let mut last_upper = f64::INFINITY;
    for bin in bins {
        data.push(bin.lower, bin.upper, bin.count, precision);
        last_upper = bin.upper;
    }

    if include_overflow {
        let overflow = source.overflow().unwrap_or(0);
        data.push(last_upper, f64::INFINITY, overflow, precision);
    }

    debug!(
        rows = data.len(),
        bins = bin_count,
        include_overflow,
        "extracted histogram rows"
    );
    Ok(data)
}
