//! Proportional scaling of magnitudes into bar widths for charts.
use serde::Serialize;

/// Convert magnitudes into widths between 0 and 100, relative to the largest value.
///
/// The output has the same length and order as the input. The largest value maps to exactly 100.
/// If the largest value is zero (or the input is empty), every width is zero. Negative and
/// non-finite values are treated as zero.
pub fn scale_to_percent(values: &[f64]) -> Vec<f64> {
    let sanitise = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let max = values.iter().copied().map(sanitise).fold(0.0, f64::max);
    if max == 0.0 {
        return vec![0.0; values.len()];
    }

    values
        .iter()
        .map(|&v| (sanitise(v) / max * 100.0).clamp(0.0, 100.0))
        .collect()
}

/// A labelled bar in a bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar<L> {
    /// What the bar represents
    pub label: L,
    /// The magnitude the bar was scaled from
    pub value: f64,
    /// The width of the bar, between 0 and 100
    pub width: f64,
}

/// Build bars from labelled magnitudes, preserving their order
pub fn bar_chart<L, I>(items: I) -> Vec<Bar<L>>
where
    I: IntoIterator<Item = (L, f64)>,
{
    let (labels, values): (Vec<_>, Vec<_>) = items.into_iter().unzip();
    let widths = scale_to_percent(&values);
    labels
        .into_iter()
        .zip(values)
        .zip(widths)
        .map(|((label, value), width)| Bar {
            label,
            value,
            width,
        })
        .collect()
}
