//! Column widths and frame assembly

use std::iter;

use termhist_core::Result;
use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::extract::ExtractedData;
use crate::scale::scale_factors;

/// Characters around the label columns: `[`, `, `, the closing bracket and
/// the two spaces before the count
const LABEL_DECORATION: usize = 6;

/// Widest entry of each text column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    lower: usize,
    upper: usize,
    count: usize,
}

impl ColumnWidths {
    fn measure(data: &ExtractedData, count_labels: &[String]) -> Self {
        Self {
            lower: max_width(&data.lower_bounds),
            upper: max_width(&data.upper_bounds),
            count: max_width(count_labels),
        }
    }

    /// Indent that puts the border's `+` above each row's opening `|`
    fn label_shift(&self) -> usize {
        self.lower + self.upper + self.count + LABEL_DECORATION
    }
}

fn max_width(column: &[String]) -> usize {
    column.iter().map(|s| s.chars().count()).max().unwrap_or(0)
}

/// `len` copies of `fill`, padded with spaces up to `pad_to`
fn draw_line(len: usize, fill: char, pad_to: usize) -> String {
    iter::repeat(fill)
        .take(len)
        .chain(iter::repeat(' ').take(pad_to.saturating_sub(len)))
        .collect()
}

fn border_line(shift: usize, config: &DisplayConfig) -> String {
    format!(
        "{} +{}+",
        " ".repeat(shift),
        draw_line(config.display_width, config.border_character, 0)
    )
}

/// `0` under the left edge and `max_count / max_bin_fraction` ending over the
/// last bar cell
fn axis_line(shift: usize, max_count: u64, config: &DisplayConfig) -> String {
    let scale_max = max_count as f64 / config.max_bin_fraction;
    format!(
        "{} 0{:>width$.precision$}",
        " ".repeat(shift),
        scale_max,
        width = config.display_width,
        precision = config.label_precision,
    )
}

fn row_label(data: &ExtractedData, index: usize, widths: &ColumnWidths) -> String {
    let bracket = if index + 1 == data.len() { ']' } else { ')' };
    format!(
        "[{:>lower$}, {:>upper$}{}",
        data.lower_bounds[index],
        data.upper_bounds[index],
        bracket,
        lower = widths.lower,
        upper = widths.upper,
    )
}

/// Assemble the complete chart
///
/// Fails before producing any text when no bar can be scaled.
pub(crate) fn draw_chart(data: &ExtractedData, config: &DisplayConfig) -> Result<String> {
    let longest_bar = config.longest_bar();
    let bars = scale_factors(&data.counts, longest_bar)?;
    assert_eq!(bars.len(), data.len(), "bar lengths out of step with rows");

    let count_labels: Vec<String> = data.counts.iter().map(u64::to_string).collect();
    let widths = ColumnWidths::measure(data, &count_labels);
    let shift = widths.label_shift();
    debug!(
        lower_width = widths.lower,
        upper_width = widths.upper,
        count_width = widths.count,
        longest_bar,
        "computed chart layout"
    );

    let border = border_line(shift, config);
    let row_width = shift + config.display_width + 3;
    let mut chart = String::with_capacity((data.len() + 5) * (row_width + 1));

    chart.push('\n');
    if config.show_axis_line {
        let max_count = data.counts.iter().copied().max().unwrap_or(0);
        chart.push_str(&axis_line(shift, max_count, config));
        chart.push('\n');
    }
    chart.push_str(&border);
    chart.push('\n');

    for (index, (count_label, &bar)) in count_labels.iter().zip(&bars).enumerate() {
        chart.push_str(&row_label(data, index, &widths));
        chart.push_str("  ");
        chart.push_str(&format!("{:<width$}", count_label, width = widths.count));
        chart.push_str(" |");
        chart.push_str(&draw_line(bar, config.bar_character, config.display_width));
        chart.push_str("|\n");
        trace!(row = index, count = data.counts[index], bar, "drew row");
    }

    chart.push_str(&border);
    chart.push_str("\n\n");
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use termhist_core::Error;

    fn example_data() -> ExtractedData {
        let bins: Vec<(f64, f64, u64)> = vec![(-0.5, 0.3, 2), (0.3, 1.1, 5), (1.1, 2.0, 3)];
        extract(&bins, 1, false).unwrap()
    }

    fn bar(stars: usize, width: usize) -> String {
        format!("|{}{}|", "*".repeat(stars), " ".repeat(width - stars))
    }

    #[test]
    fn test_example_chart() {
        let chart = draw_chart(&example_data(), &DisplayConfig::default()).unwrap();

        let border = format!("{} +{}+", " ".repeat(14), "-".repeat(60));
        let expected = format!(
            "\n{border}\n\
             [-0.5, 0.3)  2 {}\n\
             [ 0.3, 1.1)  5 {}\n\
             [ 1.1, 2.0]  3 {}\n\
             {border}\n\n",
            bar(22, 60),
            bar(57, 60),
            bar(34, 60),
        );
        assert_eq!(chart, expected);
    }

    #[test]
    fn test_axis_line() {
        let config = DisplayConfig::default().with_axis_line(true);
        let chart = draw_chart(&example_data(), &config).unwrap();
        let lines: Vec<&str> = chart.lines().collect();

        // 5 / 0.95 = 5.26...
        let expected_axis = format!("{} 0{:>60}", " ".repeat(14), "5.3");
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], expected_axis);
        assert!(lines[2].ends_with('+'));

        // Scale value ends above the last bar cell
        let axis_end = lines[1].len();
        let row_end = lines[3].len();
        assert_eq!(axis_end + 1, row_end);
    }

    #[test]
    fn test_custom_characters_and_width() {
        let config = DisplayConfig::default()
            .with_display_width(10)
            .with_bar_character('#')
            .with_border_character('=');
        let chart = draw_chart(&example_data(), &config).unwrap();
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[1], format!("{} +{}+", " ".repeat(14), "=".repeat(10)));
        // longest bar is floor(0.95 * 10) = 9
        assert_eq!(lines[3], "[ 0.3, 1.1)  5 |######### |");
        assert_eq!(lines[2], "[-0.5, 0.3)  2 |###       |");
    }

    #[test]
    fn test_count_column_is_left_aligned() {
        let bins: Vec<(f64, f64, u64)> = vec![(0.0, 1.0, 7), (1.0, 2.0, 120)];
        let data = extract(&bins, 1, false).unwrap();
        let chart = draw_chart(&data, &DisplayConfig::default()).unwrap();
        let lines: Vec<&str> = chart.lines().collect();

        assert!(lines[2].starts_with("[0.0, 1.0)  7   |"));
        assert!(lines[3].starts_with("[1.0, 2.0]  120 |"));
    }

    #[test]
    fn test_degenerate_counts() {
        let bins: Vec<(f64, f64, u64)> = vec![(0.0, 1.0, 0), (1.0, 2.0, 0)];
        let data = extract(&bins, 1, false).unwrap();
        assert!(matches!(
            draw_chart(&data, &DisplayConfig::default()),
            Err(Error::DegenerateHistogram { bins: 2 })
        ));
    }

    #[test]
    fn test_draw_line() {
        assert_eq!(draw_line(3, '*', 5), "***  ");
        assert_eq!(draw_line(5, '*', 5), "*****");
        assert_eq!(draw_line(4, '-', 0), "----");
        assert_eq!(draw_line(0, '*', 2), "  ");
    }
}
