//! Disease rate per sex × chest-pain pair, for the bubble panel.

use std::collections::BTreeMap;

use crate::core::dataset::{ChestPainType, PatientRecord, Sex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexPainGroup {
    pub sex: Sex,
    pub chest_pain: ChestPainType,
    /// Bubble size.
    pub count: usize,
    /// Mean outcome as a percentage, 0-100.
    pub disease_pct: f64,
}

impl SexPainGroup {
    pub fn sex_label(&self) -> &'static str {
        self.sex.label()
    }
}

/// Groups ordered female-first, then chest-pain vocabulary order. Pairs with
/// no rows are absent.
pub fn sex_pain_rates(records: &[PatientRecord]) -> Vec<SexPainGroup> {
    let mut tally: BTreeMap<(Sex, ChestPainType), (usize, usize)> = BTreeMap::new();

    for record in records {
        let entry = tally.entry((record.sex, record.chest_pain)).or_default();
        entry.0 += 1;
        if record.heart_disease {
            entry.1 += 1;
        }
    }

    tally
        .into_iter()
        .map(|((sex, chest_pain), (count, positives))| SexPainGroup {
            sex,
            chest_pain,
            count,
            disease_pct: positives as f64 / count as f64 * 100.0,
        })
        .collect()
}
