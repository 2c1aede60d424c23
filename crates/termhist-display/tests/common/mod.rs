//! Common test utilities for termhist-display tests

use termhist_core::Bin;

/// Bins of unit width starting at zero with the given counts
pub fn unit_bins(counts: &[u64]) -> Vec<Bin> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bin::new(i as f64, (i + 1) as f64, count))
        .collect()
}

/// Rows of a rendered chart: every line that carries a bar
pub fn bar_rows(chart: &str) -> Vec<&str> {
    chart.lines().filter(|line| line.ends_with('|')).collect()
}

/// Border lines of a rendered chart
pub fn border_lines(chart: &str) -> Vec<&str> {
    chart.lines().filter(|line| line.ends_with('+')).collect()
}

/// Characters between the two `|` delimiters of a row
pub fn bar_content(row: &str) -> &str {
    let start = row.find('|').expect("row has an opening delimiter") + 1;
    &row[start..row.len() - 1]
}

/// The closing bracket of a row's interval label
pub fn label_bracket(row: &str) -> char {
    let end = row.find(')').into_iter().chain(row.find(']')).min().expect("row has a label");
    row.as_bytes()[end] as char
}
