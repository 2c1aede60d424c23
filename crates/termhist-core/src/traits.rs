//! Bin-source capability traits
//!
//! The renderer does not care how a histogram was built. It only needs an
//! ordered, finite run of bins that it can visit front to back once.

use std::iter::FusedIterator;

/// A single histogram bin as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower bound (inclusive)
    pub lower: f64,
    /// Upper bound (exclusive, except for the last bin)
    pub upper: f64,
    /// Number of entries in this bin
    pub count: u64,
}

impl Bin {
    /// Create a new bin
    pub fn new(lower: f64, upper: f64, count: u64) -> Self {
        Self { lower, upper, count }
    }
}

impl From<(f64, f64, u64)> for Bin {
    fn from((lower, upper, count): (f64, f64, u64)) -> Self {
        Self::new(lower, upper, count)
    }
}

/// An ordered sequence of bins
///
/// Implementors must return the same bin for the same index for as long as
/// they are borrowed. `bin` is only ever called with `index < bin_count()`.
pub trait BinSource {
    /// Number of regular bins (underflow/overflow excluded)
    fn bin_count(&self) -> usize;

    /// The bin at `index`
    fn bin(&self, index: usize) -> Bin;

    /// Count of entries below the first bin, if the source tracks it
    fn underflow(&self) -> Option<u64> {
        None
    }

    /// Count of entries above the last bin, if the source tracks it
    fn overflow(&self) -> Option<u64> {
        None
    }

    /// Iterate over the regular bins front to back
    fn bins(&self) -> Bins<'_, Self> {
        Bins {
            source: self,
            front: 0,
            back: self.bin_count(),
        }
    }

    /// Largest count among the regular bins, `None` when there are no bins
    fn max_count(&self) -> Option<u64> {
        self.bins().map(|bin| bin.count).max()
    }
}

/// Iterator over the bins of a [`BinSource`]
#[derive(Debug)]
pub struct Bins<'a, S: ?Sized> {
    source: &'a S,
    front: usize,
    back: usize,
}

impl<S: BinSource + ?Sized> Iterator for Bins<'_, S> {
    type Item = Bin;

    fn next(&mut self) -> Option<Bin> {
        if self.front >= self.back {
            return None;
        }
        let bin = self.source.bin(self.front);
        self.front += 1;
        Some(bin)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: BinSource + ?Sized> DoubleEndedIterator for Bins<'_, S> {
    fn next_back(&mut self) -> Option<Bin> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.source.bin(self.back))
    }
}

impl<S: BinSource + ?Sized> ExactSizeIterator for Bins<'_, S> {}

impl<S: BinSource + ?Sized> FusedIterator for Bins<'_, S> {}

impl BinSource for [Bin] {
    fn bin_count(&self) -> usize {
        self.len()
    }

    fn bin(&self, index: usize) -> Bin {
        self[index]
    }
}

impl BinSource for [(f64, f64, u64)] {
    fn bin_count(&self) -> usize {
        self.len()
    }

    fn bin(&self, index: usize) -> Bin {
        self[index].into()
    }
}

impl<T> BinSource for Vec<T>
where
    [T]: BinSource,
{
    fn bin_count(&self) -> usize {
        self.as_slice().bin_count()
    }

    fn bin(&self, index: usize) -> Bin {
        self.as_slice().bin(index)
    }
}

impl<S: BinSource + ?Sized> BinSource for &S {
    fn bin_count(&self) -> usize {
        (**self).bin_count()
    }

    fn bin(&self, index: usize) -> Bin {
        (**self).bin(index)
    }

    fn underflow(&self) -> Option<u64> {
        (**self).underflow()
    }

    fn overflow(&self) -> Option<u64> {
        (**self).overflow()
    }
}
