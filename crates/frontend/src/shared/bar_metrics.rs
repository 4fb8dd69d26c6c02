//! Relative bar widths for the dashboard's horizontal bar widgets

/// Width of each value as a percentage of the largest one.
///
/// When the maximum is zero (including empty input) every width is zero.
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    values.iter().map(|v| bar_width(*v, max)).collect()
}

/// Width of `value` relative to `max`, in percent
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max == 0.0 {
        0.0
    } else {
        value / max * 100.0
    }
}

/// Widths for one field of a row sequence
pub fn bar_widths_by<T>(rows: &[T], field: impl Fn(&T) -> f64) -> Vec<f64> {
    let values: Vec<f64> = rows.iter().map(field).collect();
    bar_widths(&values)
}

/// CSS `width` declaration for a bar
pub fn width_style(width: f64) -> String {
    format!("width: {:.1}%;", width)
}
