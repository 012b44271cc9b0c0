//! The six chart panels. Each one runs its aggregation over the filtered
//! subset it receives and renders a small inline SVG; an empty view renders
//! a placeholder card instead.

use dioxus::prelude::*;

use crate::analytics::{
    age_pain_trend, age_slope_matrix, chest_pain_composition, ecg_profile,
    outcome_correlations, sex_pain_rates, CorrelationView, FeatureCorrelation, NumericFeature,
};
use crate::core::dataset::{AgeGroup, ChestPainType, PatientRecord, Sex, StSlope};
use crate::core::format;

use super::svg::{
    band, band_center, heat_color, pain_color, points_attr, polar_point, y_for, PAD_L, PAD_R,
    PAD_T, PLOT_H, PLOT_W, VIEW_BOX, VIEW_H, VIEW_W,
};

fn px(value: f64) -> String {
    format!("{value:.1}")
}

struct RectMark {
    x: String,
    y: String,
    w: String,
    h: String,
    fill: String,
}

struct CircleMark {
    cx: String,
    cy: String,
    r: String,
    fill: String,
}

struct TextMark {
    x: String,
    y: String,
    anchor: &'static str,
    value: String,
}

struct PolyMark {
    points: String,
    color: String,
}

struct SegmentMark {
    x1: String,
    y1: String,
    x2: String,
    y2: String,
    color: String,
}

fn group_ticks() -> Vec<TextMark> {
    AgeGroup::ALL
        .iter()
        .enumerate()
        .map(|(index, group)| TextMark {
            x: px(band_center(index, AgeGroup::ALL.len())),
            y: px(VIEW_H - 8.0),
            anchor: "middle",
            value: group.label().to_string(),
        })
        .collect()
}

fn axis_tick(value: f64, max: f64, label: &str, right: bool) -> TextMark {
    TextMark {
        x: px(if right { VIEW_W - PAD_R + 6.0 } else { PAD_L - 6.0 }),
        y: px(y_for(value, max) + 3.0),
        anchor: if right { "start" } else { "end" },
        value: label.to_string(),
    }
}

/// Stacked chest-pain shares per age group.
#[component]
pub fn CompositionPanel(records: Vec<PatientRecord>) -> Element {
    let slices = chest_pain_composition(&records);

    let mut bars: Vec<RectMark> = Vec::new();
    for (index, group) in AgeGroup::ALL.iter().enumerate() {
        let (x, width) = band(index, AgeGroup::ALL.len());
        let mut filled = 0.0;
        for slice in slices.iter().filter(|s| s.age_group == *group) {
            let height = slice.share * PLOT_H;
            filled += height;
            bars.push(RectMark {
                x: px(x),
                y: px(PAD_T + PLOT_H - filled),
                w: px(width),
                h: px(height),
                fill: pain_color(slice.chest_pain).to_string(),
            });
        }
    }

    let ticks = group_ticks();
    let axis = [
        axis_tick(0.0, 1.0, "0%", false),
        axis_tick(0.5, 1.0, "50%", false),
        axis_tick(1.0, 1.0, "100%", false),
    ];

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "Chest pain % by age group" }
            }
            if slices.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                svg { class: "chart", view_box: VIEW_BOX,
                    for bar in &bars {
                        rect { x: "{bar.x}", y: "{bar.y}", width: "{bar.w}", height: "{bar.h}", fill: "{bar.fill}" }
                    }
                    for tick in ticks.iter().chain(axis.iter()) {
                        text { class: "chart__tick", x: "{tick.x}", y: "{tick.y}", text_anchor: "{tick.anchor}", "{tick.value}" }
                    }
                }
                div { class: "chart__legend",
                    for pain in ChestPainType::ALL {
                        span { class: "chart__legend-item",
                            span { class: "chart__legend-swatch", style: "background:{pain_color(pain)}" }
                            "{pain.code()}"
                        }
                    }
                }
            }
        }
    }
}

/// ECG category counts (bars, left axis) with disease % (line, right axis).
#[component]
pub fn EcgPanel(records: Vec<PatientRecord>) -> Element {
    let buckets = ecg_profile(&records);
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let slots = buckets.len();

    let mut bars: Vec<RectMark> = Vec::new();
    let mut line: Vec<(f64, f64)> = Vec::new();
    let mut ticks: Vec<TextMark> = Vec::new();
    for (index, bucket) in buckets.iter().enumerate() {
        let (x, width) = band(index, slots);
        let top = y_for(bucket.count as f64, max_count);
        bars.push(RectMark {
            x: px(x),
            y: px(top),
            w: px(width),
            h: px(PAD_T + PLOT_H - top),
            fill: "teal".to_string(),
        });
        line.push((band_center(index, slots), y_for(bucket.disease_pct, 100.0)));
        ticks.push(TextMark {
            x: px(band_center(index, slots)),
            y: px(VIEW_H - 8.0),
            anchor: "middle",
            value: bucket.ecg.label().to_string(),
        });
    }

    let markers: Vec<CircleMark> = line
        .iter()
        .map(|(cx, cy)| CircleMark {
            cx: px(*cx),
            cy: px(*cy),
            r: "3".to_string(),
            fill: "crimson".to_string(),
        })
        .collect();
    let line_points = points_attr(&line);

    let axis = [
        axis_tick(0.0, 1.0, "0", false),
        axis_tick(1.0, 1.0, &format!("{max_count:.0}"), false),
        axis_tick(0.0, 1.0, "0%", true),
        axis_tick(1.0, 1.0, "100%", true),
    ];

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "ECG count & disease %" }
            }
            if buckets.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                svg { class: "chart", view_box: VIEW_BOX,
                    for bar in &bars {
                        rect { x: "{bar.x}", y: "{bar.y}", width: "{bar.w}", height: "{bar.h}", fill: "{bar.fill}" }
                    }
                    if line.len() >= 2 {
                        polyline { class: "chart__line", points: "{line_points}", stroke: "crimson" }
                    }
                    for marker in &markers {
                        circle { cx: "{marker.cx}", cy: "{marker.cy}", r: "{marker.r}", fill: "{marker.fill}" }
                    }
                    for tick in ticks.iter().chain(axis.iter()) {
                        text { class: "chart__tick", x: "{tick.x}", y: "{tick.y}", text_anchor: "{tick.anchor}", "{tick.value}" }
                    }
                }
                div { class: "chart__legend",
                    span { class: "chart__legend-item",
                        span { class: "chart__legend-swatch", style: "background:teal" }
                        "Count"
                    }
                    span { class: "chart__legend-item",
                        span { class: "chart__legend-swatch", style: "background:crimson" }
                        "Disease %"
                    }
                }
            }
        }
    }
}

/// Disease-rate heatmap over age group × ST slope. Absent combinations stay
/// blank.
#[component]
pub fn SlopeHeatmapPanel(records: Vec<PatientRecord>) -> Element {
    let matrix = age_slope_matrix(&records);

    let cell_w = PLOT_W / StSlope::ALL.len() as f64;
    let cell_h = PLOT_H / AgeGroup::ALL.len() as f64;

    let mut cells: Vec<RectMark> = Vec::new();
    let mut values: Vec<TextMark> = Vec::new();
    for (row, group) in AgeGroup::ALL.iter().enumerate() {
        for (col, slope) in StSlope::ALL.iter().enumerate() {
            if let Some(rate) = matrix.rate(*group, *slope) {
                let x = PAD_L + cell_w * col as f64;
                let y = PAD_T + cell_h * row as f64;
                cells.push(RectMark {
                    x: px(x + 1.0),
                    y: px(y + 1.0),
                    w: px(cell_w - 2.0),
                    h: px(cell_h - 2.0),
                    fill: heat_color(rate / 100.0),
                });
                values.push(TextMark {
                    x: px(x + cell_w / 2.0),
                    y: px(y + cell_h / 2.0 + 3.0),
                    anchor: "middle",
                    value: format::format_number(rate, 1),
                });
            }
        }
    }

    let row_labels: Vec<TextMark> = AgeGroup::ALL
        .iter()
        .enumerate()
        .map(|(row, group)| TextMark {
            x: px(PAD_L - 6.0),
            y: px(PAD_T + cell_h * row as f64 + cell_h / 2.0 + 3.0),
            anchor: "end",
            value: group.label().to_string(),
        })
        .collect();
    let col_labels: Vec<TextMark> = StSlope::ALL
        .iter()
        .enumerate()
        .map(|(col, slope)| TextMark {
            x: px(PAD_L + cell_w * col as f64 + cell_w / 2.0),
            y: px(VIEW_H - 8.0),
            anchor: "middle",
            value: slope.label().to_string(),
        })
        .collect();

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "Heatmap: age group vs ST slope" }
            }
            if matrix.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                svg { class: "chart", view_box: VIEW_BOX,
                    for cell in &cells {
                        rect { x: "{cell.x}", y: "{cell.y}", width: "{cell.w}", height: "{cell.h}", fill: "{cell.fill}" }
                    }
                    for value in &values {
                        text { class: "chart__cell-label", x: "{value.x}", y: "{value.y}", text_anchor: "{value.anchor}", "{value.value}" }
                    }
                    for label in row_labels.iter().chain(col_labels.iter()) {
                        text { class: "chart__tick", x: "{label.x}", y: "{label.y}", text_anchor: "{label.anchor}", "{label.value}" }
                    }
                }
            }
        }
    }
}

/// Disease % per chest-pain type, bubble-sized by group count, colored by
/// sex.
#[component]
pub fn SexPainPanel(records: Vec<PatientRecord>) -> Element {
    let groups = sex_pain_rates(&records);
    let slots = ChestPainType::ALL.len();

    let bubbles: Vec<CircleMark> = groups
        .iter()
        .map(|group| {
            let index = ChestPainType::ALL
                .iter()
                .position(|pain| *pain == group.chest_pain)
                .unwrap_or(0);
            let radius = (4.0 + (group.count as f64).sqrt() * 2.0).min(18.0);
            CircleMark {
                cx: px(band_center(index, slots)),
                cy: px(y_for(group.disease_pct, 100.0)),
                r: px(radius),
                fill: match group.sex {
                    Sex::Male => "royalblue".to_string(),
                    Sex::Female => "firebrick".to_string(),
                },
            }
        })
        .collect();

    let ticks: Vec<TextMark> = ChestPainType::ALL
        .iter()
        .enumerate()
        .map(|(index, pain)| TextMark {
            x: px(band_center(index, slots)),
            y: px(VIEW_H - 8.0),
            anchor: "middle",
            value: pain.code().to_string(),
        })
        .collect();
    let axis = [
        axis_tick(0.0, 1.0, "0%", false),
        axis_tick(0.5, 1.0, "50%", false),
        axis_tick(1.0, 1.0, "100%", false),
    ];

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "Disease % by chest pain type" }
            }
            if groups.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                svg { class: "chart", view_box: VIEW_BOX,
                    for bubble in &bubbles {
                        circle {
                            class: "chart__bubble",
                            cx: "{bubble.cx}",
                            cy: "{bubble.cy}",
                            r: "{bubble.r}",
                            fill: "{bubble.fill}",
                        }
                    }
                    for tick in ticks.iter().chain(axis.iter()) {
                        text { class: "chart__tick", x: "{tick.x}", y: "{tick.y}", text_anchor: "{tick.anchor}", "{tick.value}" }
                    }
                }
                div { class: "chart__legend",
                    span { class: "chart__legend-item",
                        span { class: "chart__legend-swatch", style: "background:firebrick" }
                        "Female"
                    }
                    span { class: "chart__legend-item",
                        span { class: "chart__legend-swatch", style: "background:royalblue" }
                        "Male"
                    }
                }
            }
        }
    }
}

fn radar_polygon(vector: &[FeatureCorrelation], cx: f64, cy: f64, max_r: f64) -> String {
    let count = NumericFeature::ALL.len();
    let points: Vec<(f64, f64)> = vector
        .iter()
        .enumerate()
        .filter(|(_, c)| c.magnitude.is_finite())
        .map(|(index, c)| polar_point(cx, cy, max_r, index, count, c.magnitude))
        .collect();
    points_attr(&points)
}

/// |Pearson r| of the six numeric features against the outcome. Two
/// overlaid radar traces when both sexes are present, a single polar bar
/// ring otherwise — the tag on `CorrelationView` decides.
#[component]
pub fn CorrelationPanel(records: Vec<PatientRecord>) -> Element {
    let is_empty = records.is_empty();
    let view = outcome_correlations(&records);

    let cx = VIEW_W / 2.0;
    let cy = PAD_T + PLOT_H / 2.0 + 4.0;
    let max_r = 76.0;
    let count = NumericFeature::ALL.len();

    let rings: Vec<CircleMark> = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|fraction| CircleMark {
            cx: px(cx),
            cy: px(cy),
            r: px(max_r * fraction),
            fill: String::new(),
        })
        .collect();

    let mut spokes: Vec<SegmentMark> = Vec::new();
    let mut labels: Vec<TextMark> = Vec::new();
    for (index, feature) in NumericFeature::ALL.iter().enumerate() {
        let (x2, y2) = polar_point(cx, cy, max_r, index, count, 1.0);
        spokes.push(SegmentMark {
            x1: px(cx),
            y1: px(cy),
            x2: px(x2),
            y2: px(y2),
            color: "#e3e6ee".to_string(),
        });
        let (lx, ly) = polar_point(cx, cy, max_r * 1.22, index, count, 1.0);
        labels.push(TextMark {
            x: px(lx),
            y: px(ly + 3.0),
            anchor: "middle",
            value: feature.label().to_string(),
        });
    }

    let mut single_bars: Vec<SegmentMark> = Vec::new();
    let mut traces: Vec<PolyMark> = Vec::new();
    let split = matches!(view, CorrelationView::BySex { .. });
    match &view {
        CorrelationView::Single(vector) => {
            for (index, correlation) in vector.iter().enumerate() {
                if !correlation.magnitude.is_finite() {
                    continue;
                }
                let (x2, y2) =
                    polar_point(cx, cy, max_r, index, count, correlation.magnitude);
                single_bars.push(SegmentMark {
                    x1: px(cx),
                    y1: px(cy),
                    x2: px(x2),
                    y2: px(y2),
                    color: heat_color(correlation.magnitude),
                });
            }
        }
        CorrelationView::BySex { male, female } => {
            traces.push(PolyMark {
                points: radar_polygon(male, cx, cy, max_r),
                color: "royalblue".to_string(),
            });
            traces.push(PolyMark {
                points: radar_polygon(female, cx, cy, max_r),
                color: "firebrick".to_string(),
            });
        }
    }

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "Abs correlation with heart disease" }
            }
            if is_empty {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                svg { class: "chart", view_box: VIEW_BOX,
                    for ring in &rings {
                        circle { class: "chart__ring", cx: "{ring.cx}", cy: "{ring.cy}", r: "{ring.r}" }
                    }
                    for spoke in &spokes {
                        line { x1: "{spoke.x1}", y1: "{spoke.y1}", x2: "{spoke.x2}", y2: "{spoke.y2}", stroke: "{spoke.color}" }
                    }
                    for bar in &single_bars {
                        line {
                            x1: "{bar.x1}",
                            y1: "{bar.y1}",
                            x2: "{bar.x2}",
                            y2: "{bar.y2}",
                            stroke: "{bar.color}",
                            stroke_width: "7",
                            stroke_linecap: "round",
                        }
                    }
                    for trace in &traces {
                        polygon {
                            class: "chart__radar",
                            points: "{trace.points}",
                            stroke: "{trace.color}",
                            fill: "{trace.color}",
                        }
                    }
                    for label in &labels {
                        text { class: "chart__tick", x: "{label.x}", y: "{label.y}", text_anchor: "{label.anchor}", "{label.value}" }
                    }
                }
                if split {
                    div { class: "chart__legend",
                        span { class: "chart__legend-item",
                            span { class: "chart__legend-swatch", style: "background:royalblue" }
                            "Male"
                        }
                        span { class: "chart__legend-item",
                            span { class: "chart__legend-swatch", style: "background:firebrick" }
                            "Female"
                        }
                    }
                }
            }
        }
    }
}

/// Disease-rate trend per chest-pain type across the ordered age groups.
#[component]
pub fn TrendPanel(records: Vec<PatientRecord>) -> Element {
    let points = age_pain_trend(&records);
    let slots = AgeGroup::ALL.len();

    let mut lines: Vec<PolyMark> = Vec::new();
    let mut dots: Vec<CircleMark> = Vec::new();
    for pain in ChestPainType::ALL {
        let series: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| p.chest_pain == pain)
            .map(|p| {
                let index = AgeGroup::ALL
                    .iter()
                    .position(|g| *g == p.age_group)
                    .unwrap_or(0);
                (band_center(index, slots), y_for(p.rate, 1.0))
            })
            .collect();

        if series.len() >= 2 {
            lines.push(PolyMark {
                points: points_attr(&series),
                color: pain_color(pain).to_string(),
            });
        }
        for (cx, cy) in &series {
            dots.push(CircleMark {
                cx: px(*cx),
                cy: px(*cy),
                r: "3".to_string(),
                fill: pain_color(pain).to_string(),
            });
        }
    }

    let ticks = group_ticks();
    let axis = [
        axis_tick(0.0, 1.0, "0%", false),
        axis_tick(0.5, 1.0, "50%", false),
        axis_tick(1.0, 1.0, "100%", false),
    ];

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "Trend: age group & chest pain" }
            }
            if points.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                svg { class: "chart", view_box: VIEW_BOX,
                    for line_mark in &lines {
                        polyline { class: "chart__line", points: "{line_mark.points}", stroke: "{line_mark.color}" }
                    }
                    for dot in &dots {
                        circle { cx: "{dot.cx}", cy: "{dot.cy}", r: "{dot.r}", fill: "{dot.fill}" }
                    }
                    for tick in ticks.iter().chain(axis.iter()) {
                        text { class: "chart__tick", x: "{tick.x}", y: "{tick.y}", text_anchor: "{tick.anchor}", "{tick.value}" }
                    }
                }
                div { class: "chart__legend",
                    for pain in ChestPainType::ALL {
                        span { class: "chart__legend-item",
                            span { class: "chart__legend-swatch", style: "background:{pain_color(pain)}" }
                            "{pain.code()}"
                        }
                    }
                }
            }
        }
    }
}
