//! Per-ECG-category counts and disease rates, for the dual-axis panel.

use std::collections::BTreeMap;

use crate::core::dataset::{PatientRecord, RestingEcg};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcgBucket {
    pub ecg: RestingEcg,
    pub count: usize,
    /// Mean outcome as a percentage, 0-100.
    pub disease_pct: f64,
}

/// Buckets ordered by descending count, vocabulary order as the tiebreak.
/// Categories absent from the filtered table are absent from the output.
pub fn ecg_profile(records: &[PatientRecord]) -> Vec<EcgBucket> {
    let mut tally: BTreeMap<RestingEcg, (usize, usize)> = BTreeMap::new();

    for record in records {
        let entry = tally.entry(record.resting_ecg).or_default();
        entry.0 += 1;
        if record.heart_disease {
            entry.1 += 1;
        }
    }

    let mut buckets: Vec<EcgBucket> = tally
        .into_iter()
        .map(|(ecg, (count, positives))| EcgBucket {
            ecg,
            count,
            disease_pct: positives as f64 / count as f64 * 100.0,
        })
        .collect();

    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::record;
    use crate::core::dataset::{ChestPainType, Sex, StSlope};

    fn with_ecg(ecg: RestingEcg, diseased: bool) -> PatientRecord {
        let mut r = record(
            50,
            Sex::Male,
            ChestPainType::Asymptomatic,
            StSlope::Flat,
            diseased,
        );
        r.resting_ecg = ecg;
        r
    }

    #[test]
    fn rates_stay_inside_percentage_bounds() {
        let records = vec![
            with_ecg(RestingEcg::Normal, true),
            with_ecg(RestingEcg::Normal, false),
            with_ecg(RestingEcg::St, true),
        ];
        for bucket in ecg_profile(&records) {
            assert!((0.0..=100.0).contains(&bucket.disease_pct));
        }
    }

    #[test]
    fn buckets_come_out_count_descending() {
        let records = vec![
            with_ecg(RestingEcg::St, true),
            with_ecg(RestingEcg::Normal, false),
            with_ecg(RestingEcg::Normal, true),
            with_ecg(RestingEcg::Lvh, false),
        ];
        let buckets = ecg_profile(&records);
        assert_eq!(buckets[0].ecg, RestingEcg::Normal);
        assert_eq!(buckets[0].count, 2);
        assert!((buckets[0].disease_pct - 50.0).abs() < 1e-9);
        assert!(buckets.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(ecg_profile(&[]).is_empty());
    }
}
