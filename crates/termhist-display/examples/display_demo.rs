//! Builds a small histogram and draws it in the terminal
//!
//! Run with `RUST_LOG=termhist_display=debug` to see the layout decisions.

use termhist_display::{print, DisplayConfig};
use termhist_histogram::{FixedWidthBuilder, HistogramBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 5 regular bins from -0.5 to 2.0
    let values = [0.5, 0.5, 0.3, -0.2, 1.6, 0.0, 0.1, 0.1, 0.6, 0.4];
    let histogram = FixedWidthBuilder::new(5)
        .with_range(-0.5, 2.0)
        .build(&values)?;

    println!("=== Default ===");
    print(&histogram, &DisplayConfig::default())?;

    println!("=== With scale and out-of-range rows ===");
    let config = DisplayConfig::default()
        .with_axis_line(true)
        .with_overflow_bins(true);
    print(&histogram, &config)?;

    Ok(())
}
