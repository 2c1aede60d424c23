//! Core traits and types shared by the termhist crates
//!
//! Anything that can present itself as an ordered run of bins, each with a
//! lower bound, an upper bound and a count, implements [`BinSource`] and can be
//! handed to the renderer in `termhist-display`.
//!
//! # Example
//!
//! ```rust
//! use termhist_core::{Bin, BinSource};
//!
//! let bins: Vec<(f64, f64, u64)> = vec![(-0.5, 0.3, 2), (0.3, 1.1, 5), (1.1, 2.0, 3)];
//! assert_eq!(bins.bin_count(), 3);
//! assert_eq!(bins.bin(1), Bin::new(0.3, 1.1, 5));
//! assert_eq!(bins.max_count(), Some(5));
//! ```

pub mod error;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use traits::{Bin, BinSource, Bins};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
