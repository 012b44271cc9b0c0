//! Geometry and color helpers for the inline SVG chart panels.

use crate::core::dataset::ChestPainType;

pub(crate) const VIEW_W: f64 = 360.0;
pub(crate) const VIEW_H: f64 = 230.0;
pub(crate) const PAD_L: f64 = 36.0;
pub(crate) const PAD_T: f64 = 12.0;
pub(crate) const PAD_R: f64 = 36.0;
pub(crate) const PAD_B: f64 = 28.0;
pub(crate) const PLOT_W: f64 = VIEW_W - PAD_L - PAD_R;
pub(crate) const PLOT_H: f64 = VIEW_H - PAD_T - PAD_B;

pub(crate) const VIEW_BOX: &str = "0 0 360 230";

/// Horizontal band (x, width) for categorical slot `index` of `count`,
/// with 10% padding on each side of the slot.
pub(crate) fn band(index: usize, count: usize) -> (f64, f64) {
    if count == 0 {
        return (PAD_L, 0.0);
    }
    let slot = PLOT_W / count as f64;
    (PAD_L + slot * index as f64 + slot * 0.1, slot * 0.8)
}

pub(crate) fn band_center(index: usize, count: usize) -> f64 {
    let (x, width) = band(index, count);
    x + width / 2.0
}

/// Y pixel for `value` on a linear axis from 0 to `max`.
pub(crate) fn y_for(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return PAD_T + PLOT_H;
    }
    PAD_T + PLOT_H * (1.0 - (value / max).clamp(0.0, 1.0))
}

pub(crate) fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Point on a polar chart: spoke `index` of `count` starting at twelve
/// o'clock, radius as a fraction of `max_r`.
pub(crate) fn polar_point(
    cx: f64,
    cy: f64,
    max_r: f64,
    index: usize,
    count: usize,
    fraction: f64,
) -> (f64, f64) {
    let angle = std::f64::consts::TAU * index as f64 / count.max(1) as f64
        - std::f64::consts::FRAC_PI_2;
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let r = max_r * fraction;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Royalblue → firebrick ramp over `t` in 0-1, the heat scale the original
/// charts use.
pub(crate) fn heat_color(t: f64) -> String {
    const FROM: (f64, f64, f64) = (65.0, 105.0, 225.0);
    const TO: (f64, f64, f64) = (178.0, 34.0, 34.0);

    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let r = FROM.0 + (TO.0 - FROM.0) * t;
    let g = FROM.1 + (TO.1 - FROM.1) * t;
    let b = FROM.2 + (TO.2 - FROM.2) * t;
    format!("rgb({r:.0},{g:.0},{b:.0})")
}

/// Colorblind-safe qualitative palette for the chest-pain categories.
pub(crate) fn pain_color(pain: ChestPainType) -> &'static str {
    match pain {
        ChestPainType::Asymptomatic => "#88ccee",
        ChestPainType::AtypicalAngina => "#cc6677",
        ChestPainType::NonAnginal => "#ddcc77",
        ChestPainType::TypicalAngina => "#117733",
    }
}
