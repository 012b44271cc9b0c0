//! Disease-rate trend per age group and chest-pain type, for the line panel.

use std::collections::BTreeMap;

use crate::core::dataset::{AgeGroup, ChestPainType, PatientRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub age_group: AgeGroup,
    pub chest_pain: ChestPainType,
    /// Mean outcome as a fraction, 0-1.
    pub rate: f64,
}

/// Points ordered by age group then chest-pain vocabulary, ready to be
/// threaded into one polyline per chest-pain type. Combinations with no
/// rows are absent, so lines simply skip those age groups.
pub fn age_pain_trend(records: &[PatientRecord]) -> Vec<TrendPoint> {
    let mut tally: BTreeMap<(AgeGroup, ChestPainType), (usize, usize)> = BTreeMap::new();

    for record in records {
        let entry = tally
            .entry((record.age_group, record.chest_pain))
            .or_default();
        entry.0 += 1;
        if record.heart_disease {
            entry.1 += 1;
        }
    }

    tally
        .into_iter()
        .map(|((age_group, chest_pain), (count, positives))| TrendPoint {
            age_group,
            chest_pain,
            rate: positives as f64 / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::record;
    use crate::core::dataset::{Sex, StSlope};

    #[test]
    fn rates_are_fractions_per_pair() {
        let records = vec![
            record(45, Sex::Male, ChestPainType::Asymptomatic, StSlope::Flat, true),
            record(48, Sex::Male, ChestPainType::Asymptomatic, StSlope::Flat, false),
            record(66, Sex::Female, ChestPainType::Asymptomatic, StSlope::Down, true),
        ];
        let points = age_pain_trend(&records);
        assert_eq!(points.len(), 2);

        assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.rate)));
        let mid = points
            .iter()
            .find(|p| p.age_group == AgeGroup::A41To50)
            .unwrap();
        assert!((mid.rate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn ordered_by_age_group_sequence() {
        let records = vec![
            record(72, Sex::Male, ChestPainType::NonAnginal, StSlope::Up, false),
            record(34, Sex::Male, ChestPainType::NonAnginal, StSlope::Up, true),
        ];
        let points = age_pain_trend(&records);
        assert_eq!(points[0].age_group, AgeGroup::A30To40);
        assert_eq!(points[1].age_group, AgeGroup::A71Plus);
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(age_pain_trend(&[]).is_empty());
    }
}
