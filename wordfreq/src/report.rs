// src/report.rs
use crate::models::{ChartPoint, PairComparison, TopWords};

/// Lists the top words of one text under its title.
#[must_use]
pub fn format_top_words(title: &str, top: &TopWords) -> String {
    let mut out = format!("{title} ({} words)\n", top.total);
    for entry in &top.words {
        out.push_str(&format!("{:8}  {}\n", entry.count, entry.word));
    }
    out
}

#[must_use]
pub fn format_comparisons(comparisons: &[PairComparison], overlap_size: usize) -> String {
    let mut out = format!("Shared words among the top {overlap_size}:\n");
    for c in comparisons {
        out.push_str(&format!("{:8}  {}  <->  {}\n", c.overlap, c.left, c.right));
    }
    out
}

/// Renders `points` as a horizontal bar chart, the longest bar `width` cells wide.
#[must_use]
#[expect(clippy::as_conversions, reason = "Bar lengths are small")]
#[expect(clippy::cast_possible_truncation, reason = "Bar lengths are small")]
#[expect(clippy::cast_sign_loss, reason = "Values are clamped to zero")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn render_chart(title: &str, points: &[ChartPoint], width: usize) -> String {
    let mut out = format!("{title}\n");
    if points.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    for point in points {
        let cells = if max > 0.0 {
            ((point.value.max(0.0) / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<label_width$}  {}  {:.4}\n",
            point.label,
            "#".repeat(cells),
            point.value,
        ));
    }
    out
}
