//! Disease-rate matrix over age group × ST slope, for the heatmap panel.

use std::collections::BTreeMap;

use crate::core::dataset::{AgeGroup, PatientRecord, StSlope};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeCell {
    pub age_group: AgeGroup,
    pub slope: StSlope,
    /// Mean outcome as a percentage, 0-100.
    pub disease_pct: f64,
}

/// Sparse matrix: combinations with no rows are absent cells, not zeros.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlopeMatrix {
    cells: Vec<SlopeCell>,
}

impl SlopeMatrix {
    pub fn cells(&self) -> &[SlopeCell] {
        &self.cells
    }

    pub fn rate(&self, age_group: AgeGroup, slope: StSlope) -> Option<f64> {
        self.cells
            .iter()
            .find(|cell| cell.age_group == age_group && cell.slope == slope)
            .map(|cell| cell.disease_pct)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

pub fn age_slope_matrix(records: &[PatientRecord]) -> SlopeMatrix {
    let mut tally: BTreeMap<(AgeGroup, StSlope), (usize, usize)> = BTreeMap::new();

    for record in records {
        let entry = tally.entry((record.age_group, record.st_slope)).or_default();
        entry.0 += 1;
        if record.heart_disease {
            entry.1 += 1;
        }
    }

    let cells = tally
        .into_iter()
        .map(|((age_group, slope), (count, positives))| SlopeCell {
            age_group,
            slope,
            disease_pct: positives as f64 / count as f64 * 100.0,
        })
        .collect();

    SlopeMatrix { cells }
}
