//! Absolute Pearson correlation of numeric features against the outcome,
//! for the radar/polar panel.
//!
//! The result is tagged by cohort shape: a subset containing both sexes
//! yields two independent vectors (male and female cohorts), anything else
//! a single vector. The panel picks its chart form off the tag, so the
//! bifurcation is part of the contract, not an implementation detail.
//!
//! Zero sentinels in resting BP and cholesterol feed the correlation
//! unchanged; a zero-variance feature yields a NaN magnitude that renderers
//! drop via `is_finite`.

use crate::core::dataset::{PatientRecord, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFeature {
    Age,
    RestingBp,
    Cholesterol,
    MaxHr,
    Oldpeak,
    FastingBs,
}

impl NumericFeature {
    pub const ALL: [NumericFeature; 6] = [
        NumericFeature::Age,
        NumericFeature::RestingBp,
        NumericFeature::Cholesterol,
        NumericFeature::MaxHr,
        NumericFeature::Oldpeak,
        NumericFeature::FastingBs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NumericFeature::Age => "Age",
            NumericFeature::RestingBp => "Resting BP",
            NumericFeature::Cholesterol => "Cholesterol",
            NumericFeature::MaxHr => "Max HR",
            NumericFeature::Oldpeak => "Oldpeak",
            NumericFeature::FastingBs => "Fasting BS",
        }
    }

    pub fn value(self, record: &PatientRecord) -> f64 {
        match self {
            NumericFeature::Age => record.age as f64,
            NumericFeature::RestingBp => record.resting_bp,
            NumericFeature::Cholesterol => record.cholesterol,
            NumericFeature::MaxHr => record.max_hr,
            NumericFeature::Oldpeak => record.oldpeak,
            NumericFeature::FastingBs => {
                if record.fasting_bs {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureCorrelation {
    pub feature: NumericFeature,
    /// |Pearson r| against the outcome; NaN when undefined.
    pub magnitude: f64,
}

/// Cohort-tagged correlation result, consumed polymorphically by the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationView {
    Single(Vec<FeatureCorrelation>),
    BySex {
        male: Vec<FeatureCorrelation>,
        female: Vec<FeatureCorrelation>,
    },
}

pub fn outcome_correlations(records: &[PatientRecord]) -> CorrelationView {
    let male: Vec<PatientRecord> = records
        .iter()
        .copied()
        .filter(|r| r.sex == Sex::Male)
        .collect();
    let female: Vec<PatientRecord> = records
        .iter()
        .copied()
        .filter(|r| r.sex == Sex::Female)
        .collect();

    if !male.is_empty() && !female.is_empty() {
        CorrelationView::BySex {
            male: cohort_vector(&male),
            female: cohort_vector(&female),
        }
    } else {
        CorrelationView::Single(cohort_vector(records))
    }
}

fn cohort_vector(records: &[PatientRecord]) -> Vec<FeatureCorrelation> {
    let outcomes: Vec<f64> = records.iter().map(|r| r.outcome()).collect();

    NumericFeature::ALL
        .into_iter()
        .map(|feature| {
            let values: Vec<f64> = records.iter().map(|r| feature.value(r)).collect();
            FeatureCorrelation {
                feature,
                magnitude: pearson(&values, &outcomes).abs(),
            }
        })
        .collect()
}

/// Sample Pearson coefficient; NaN when either side has no variance or
/// fewer than two observations.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return f64::NAN;
    }

    let nf = n as f64;
    let mean_x = xs.iter().sum::<f64>() / nf;
    let mean_y = ys.iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}
