//! Configuration types for chart rendering

use serde::{Deserialize, Serialize};
use termhist_core::{Error, Result};

/// Default total width of a bar, in characters
pub const DEFAULT_DISPLAY_WIDTH: usize = 60;

/// Default fraction of the display width the tallest bar may occupy
pub const DEFAULT_MAX_BIN_FRACTION: f64 = 0.95;

/// Default number of digits after the decimal point in bound labels
pub const DEFAULT_LABEL_PRECISION: usize = 1;

/// Largest accepted label precision
pub const MAX_LABEL_PRECISION: usize = 16;

/// Options controlling how a histogram is drawn
///
/// Every field has a default, so a partial serialized form is enough:
///
/// ```rust
/// use termhist_display::DisplayConfig;
///
/// let config = DisplayConfig::default()
///     .with_display_width(40)
///     .with_axis_line(true);
/// assert_eq!(config.longest_bar(), 38);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Total character width of each bar
    pub display_width: usize,

    /// Fraction of `display_width` the tallest bar may occupy
    pub max_bin_fraction: f64,

    /// Fill character for bars
    pub bar_character: char,

    /// Fill character for the top and bottom border
    pub border_character: char,

    /// Print the numeric scale above the chart
    pub show_axis_line: bool,

    /// Add `[-inf, lower)` and `[upper, inf]` rows for out-of-range counts
    pub include_overflow_bins: bool,

    /// Digits after the decimal point in bound labels
    pub label_precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            max_bin_fraction: DEFAULT_MAX_BIN_FRACTION,
            bar_character: '*',
            border_character: '-',
            show_axis_line: false,
            include_overflow_bins: false,
            label_precision: DEFAULT_LABEL_PRECISION,
        }
    }
}

impl DisplayConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bar width
    pub fn with_display_width(mut self, display_width: usize) -> Self {
        self.display_width = display_width;
        self
    }

    /// Set the fraction of the bar width the tallest bar may occupy
    pub fn with_max_bin_fraction(mut self, max_bin_fraction: f64) -> Self {
        self.max_bin_fraction = max_bin_fraction;
        self
    }

    /// Set the bar fill character
    pub fn with_bar_character(mut self, bar_character: char) -> Self {
        self.bar_character = bar_character;
        self
    }

    /// Set the border fill character
    pub fn with_border_character(mut self, border_character: char) -> Self {
        self.border_character = border_character;
        self
    }

    /// Enable or disable the numeric scale line
    pub fn with_axis_line(mut self, show_axis_line: bool) -> Self {
        self.show_axis_line = show_axis_line;
        self
    }

    /// Enable or disable underflow/overflow rows
    pub fn with_overflow_bins(mut self, include_overflow_bins: bool) -> Self {
        self.include_overflow_bins = include_overflow_bins;
        self
    }

    /// Set the number of digits after the decimal point in labels
    pub fn with_label_precision(mut self, label_precision: usize) -> Self {
        self.label_precision = label_precision;
        self
    }

    /// Length in characters of the bar drawn for the largest count
    ///
    /// Always `floor(max_bin_fraction * display_width)`, so never more than
    /// `display_width` for a valid configuration.
    pub fn longest_bar(&self) -> usize {
        (self.max_bin_fraction * self.display_width as f64).floor() as usize
    }

    /// Check every field against its domain
    pub fn validate(&self) -> Result<()> {
        if self.display_width == 0 {
            return Err(Error::invalid_config("display_width", "must be at least 1"));
        }
        if !self.max_bin_fraction.is_finite()
            || self.max_bin_fraction <= 0.0
            || self.max_bin_fraction > 1.0
        {
            return Err(Error::invalid_config(
                "max_bin_fraction",
                format_args!("must be in (0, 1], got {}", self.max_bin_fraction),
            ));
        }
        if self.label_precision > MAX_LABEL_PRECISION {
            return Err(Error::invalid_config(
                "label_precision",
                format_args!(
                    "must be at most {MAX_LABEL_PRECISION}, got {}",
                    self.label_precision
                ),
            ));
        }
        for (field, c) in [
            ("bar_character", self.bar_character),
            ("border_character", self.border_character),
        ] {
            if c.is_control() {
                return Err(Error::invalid_config(
                    field,
                    format_args!("must be printable, got {c:?}"),
                ));
            }
        }
        Ok(())
    }
}
