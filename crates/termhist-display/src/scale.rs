//! Bar lengths

use termhist_core::{Error, Result};

/// Scale every count to a bar length in `[0, longest_bar]`
///
/// `bar[i] = count[i] * longest_bar / max_count` with truncating division, so
/// the largest count gets exactly `longest_bar` characters and every other bar
/// is rounded down.
pub(crate) fn scale_factors(counts: &[u64], longest_bar: usize) -> Result<Vec<usize>> {
    let max_count = counts.iter().copied().max().ok_or(Error::EmptyHistogram)?;
    if max_count == 0 {
        return Err(Error::DegenerateHistogram { bins: counts.len() });
    }

    // u128 keeps count * longest_bar from overflowing for large counts
    let longest = longest_bar as u128;
    let max = u128::from(max_count);
    Ok(counts
        .iter()
        .map(|&count| (u128::from(count) * longest / max) as usize)
        .collect())
}
