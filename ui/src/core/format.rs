//! Formatting helpers for presenting aggregate values.

/// Fraction 0-1 rendered as a whole percentage, e.g. `0.62` → `62%`.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.0}%", value * 100.0)
    } else {
        "—".to_string()
    }
}

/// Percentage 0-100 rendered with one decimal, e.g. `61.7%`.
pub fn format_rate(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "—".to_string()
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

pub fn format_count(count: usize) -> String {
    match count {
        1 => "1 patient".to_string(),
        n => format!("{n} patients"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fractions_and_rates() {
        assert_eq!(format_percent(0.625), "63%");
        assert_eq!(format_rate(61.66), "61.7%");
        assert_eq!(format_number(0.8123, 2), "0.81");
        assert_eq!(format_count(1), "1 patient");
        assert_eq!(format_count(12), "12 patients");
    }

    #[test]
    fn non_finite_values_render_as_dash() {
        assert_eq!(format_percent(f64::NAN), "—");
        assert_eq!(format_rate(f64::INFINITY), "—");
    }
}
