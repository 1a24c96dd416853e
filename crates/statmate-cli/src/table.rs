//! Plain-text tables printed by the CLI reports.

use statmate_stats::{
    descriptive::Descriptives, histogram::Histogram, sample_size::SampleSizeComparison,
    ttest::WelchTTest,
};

const BAR_WIDTH: usize = 40;

/// Print descriptive statistics as a two-column table
///
/// An empty sample prints "-" for every value.
pub fn print_descriptives(title: &str, stats: &Descriptives) {
    println!("{title}");
    println!("  {}", "-".repeat(24));
    println!("  {:<10} {:>12}", "N", stats.n);
    for (label, value) in [
        ("Mean", stats.mean),
        ("Median", stats.median),
        ("SD", stats.std_dev),
        ("Min", stats.min),
        ("Max", stats.max),
    ] {
        println!("  {label:<10} {:>12}", format_value(stats.n, value));
    }
}

/// Print a histogram with one bar per bin, scaled to the tallest bin
pub fn print_histogram(histogram: &Histogram) {
    println!("Frequency distribution");
    let max_count = histogram.max_count();
    if max_count == 0 {
        println!("  (no data)");
        return;
    }
    let label_width = histogram
        .bins
        .iter()
        .map(|bin| bin.label.len())
        .max()
        .unwrap_or(0);
    for bin in &histogram.bins {
        let bar_len = bin.count * BAR_WIDTH / max_count;
        println!(
            "  {:<label_width$} | {:<BAR_WIDTH$} {:>5}",
            bin.label,
            "#".repeat(bar_len),
            bin.count,
        );
    }
}

/// Print the group summaries and test statistics of a Welch t-test
pub fn print_welch(result: &WelchTTest) {
    println!("Welch's t-test");
    println!("  {:<8} {:>6} {:>12} {:>12}", "Group", "N", "Mean", "SD");
    println!("  {}", "-".repeat(41));
    for (label, stats) in [("A", &result.stat_a), ("B", &result.stat_b)] {
        println!(
            "  {label:<8} {:>6} {:>12.3} {:>12.3}",
            stats.n, stats.mean, stats.std_dev
        );
    }
    println!();
    println!("  {:<16} {:>12.4}", "t", result.t_value);
    println!("  {:<16} {:>12.4}", "df", result.df);
    println!("  {:<16} {:>12.4}", "Mean diff", result.mean_diff);
    println!("  {:<16} {:>12.4}", "Std. error", result.standard_error());
}

/// Print both sample-size formulas side by side
pub fn print_sample_size(comparison: &SampleSizeComparison) {
    println!("Sample size");
    println!("  {:<20} {:>10}", "Population", comparison.population);
    println!("  {:<20} {:>10}", "Error margin", comparison.error_margin.get());
    println!("  {}", "-".repeat(31));
    println!("  {:<20} {:>10}", "Yamane", comparison.yamane);
    println!("  {:<20} {:>10}", "Krejcie & Morgan", comparison.krejcie_morgan);
}

fn format_value(n: usize, value: f64) -> String {
    if n == 0 {
        "-".to_owned()
    } else {
        format!("{value:.3}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0, 0.0), "-");
        assert_eq!(format_value(3, 17.571_428), "17.571");
    }
}
