//! Properties every rendered chart must satisfy

mod common;

use common::{bar_content, bar_rows, border_lines, label_bracket, unit_bins};
use proptest::prelude::*;
use termhist_core::Error;
use termhist_display::{render, DisplayConfig};

fn counts_with_a_positive() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..10_000, 1..40)
        .prop_filter("at least one positive count", |counts| counts.iter().any(|&c| c > 0))
}

proptest! {
    #[test]
    fn prop_tallest_bar_fills_longest_bar(
        counts in counts_with_a_positive(),
        width in 1usize..120,
        fraction in 0.05f64..=1.0,
    ) {
        let config = DisplayConfig::default()
            .with_display_width(width)
            .with_max_bin_fraction(fraction);
        let chart = render(&unit_bins(&counts), &config).unwrap();
        let rows = bar_rows(&chart);
        let longest = config.longest_bar();
        let max = *counts.iter().max().unwrap();

        prop_assert_eq!(rows.len(), counts.len());
        for (row, &count) in rows.iter().zip(&counts) {
            let stars = bar_content(row).chars().filter(|&c| c == '*').count();
            prop_assert!(stars <= longest);
            if count == max {
                prop_assert_eq!(stars, longest);
            }
        }
    }

    #[test]
    fn prop_bar_content_fills_display_width(
        counts in counts_with_a_positive(),
        width in 1usize..120,
    ) {
        let config = DisplayConfig::default().with_display_width(width);
        let chart = render(&unit_bins(&counts), &config).unwrap();

        for row in bar_rows(&chart) {
            prop_assert_eq!(bar_content(row).chars().count(), width);
        }
    }

    #[test]
    fn prop_only_last_row_is_closed(
        counts in counts_with_a_positive(),
        overflow in any::<bool>(),
    ) {
        let config = DisplayConfig::default().with_overflow_bins(overflow);
        let chart = render(&unit_bins(&counts), &config).unwrap();
        let rows = bar_rows(&chart);
        let (last, rest) = rows.split_last().unwrap();

        prop_assert_eq!(label_bracket(last), ']');
        for row in rest {
            prop_assert_eq!(label_bracket(row), ')');
        }
    }

    #[test]
    fn prop_borders_match_and_align(
        counts in counts_with_a_positive(),
        axis in any::<bool>(),
    ) {
        let config = DisplayConfig::default().with_axis_line(axis);
        let chart = render(&unit_bins(&counts), &config).unwrap();
        let borders = border_lines(&chart);

        prop_assert_eq!(borders.len(), 2);
        prop_assert_eq!(borders[0], borders[1]);

        let plus = borders[0].find('+').unwrap();
        for row in bar_rows(&chart) {
            prop_assert_eq!(row.find('|'), Some(plus));
            prop_assert_eq!(row.len(), borders[0].len());
        }
    }

    #[test]
    fn prop_rendering_is_deterministic(counts in counts_with_a_positive()) {
        let bins = unit_bins(&counts);
        let config = DisplayConfig::default().with_axis_line(true);
        prop_assert_eq!(render(&bins, &config).unwrap(), render(&bins, &config).unwrap());
    }
}

#[test]
fn test_example_from_three_bins() {
    let bins: Vec<(f64, f64, u64)> = vec![(-0.5, 0.3, 2), (0.3, 1.1, 5), (1.1, 2.0, 3)];
    let chart = render(&bins, &DisplayConfig::default()).unwrap();
    let rows = bar_rows(&chart);

    let stars: Vec<usize> = rows
        .iter()
        .map(|row| bar_content(row).chars().filter(|&c| c == '*').count())
        .collect();
    assert_eq!(stars, vec![22, 57, 34]);
    assert_eq!(bar_content(rows[1]), format!("{}   ", "*".repeat(57)));
    assert!(rows[2].starts_with("[ 1.1, 2.0]"));
    assert!(rows[0].starts_with("[-0.5, 0.3)"));

    assert!(chart.starts_with('\n'));
    assert!(chart.ends_with("+\n\n"));
}

#[test]
fn test_all_zero_counts_are_degenerate() {
    let bins = unit_bins(&[0, 0, 0, 0]);
    let err = render(&bins, &DisplayConfig::default()).unwrap_err();
    assert!(matches!(err, Error::DegenerateHistogram { bins: 4 }));
}

#[test]
fn test_empty_histogram() {
    let bins = unit_bins(&[]);
    let err = render(&bins, &DisplayConfig::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyHistogram));
}
