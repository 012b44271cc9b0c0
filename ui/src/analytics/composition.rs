//! Chest-pain composition per age group, for the stacked-bar panel.

use std::collections::BTreeMap;

use crate::core::dataset::{AgeGroup, ChestPainType, PatientRecord};

/// One stacked-bar segment: this chest-pain type's share of its age group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionSlice {
    pub age_group: AgeGroup,
    pub chest_pain: ChestPainType,
    pub count: usize,
    /// Fraction of the age group's rows, 0-1. Shares of one group sum to 1.
    pub share: f64,
}

/// Slices ordered by age group, then chest-pain vocabulary. Age groups with
/// no rows are absent, so an empty table produces an empty output.
pub fn chest_pain_composition(records: &[PatientRecord]) -> Vec<CompositionSlice> {
    let mut counts: BTreeMap<(AgeGroup, ChestPainType), usize> = BTreeMap::new();
    let mut group_totals: BTreeMap<AgeGroup, usize> = BTreeMap::new();

    for record in records {
        *counts
            .entry((record.age_group, record.chest_pain))
            .or_default() += 1;
        *group_totals.entry(record.age_group).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((age_group, chest_pain), count)| CompositionSlice {
            age_group,
            chest_pain,
            count,
            share: count as f64 / group_totals[&age_group] as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::record;
    use crate::core::dataset::{Sex, StSlope};

    #[test]
    fn shares_per_group_sum_to_one() {
        let records = vec![
            record(45, Sex::Male, ChestPainType::Asymptomatic, StSlope::Flat, true),
            record(47, Sex::Female, ChestPainType::AtypicalAngina, StSlope::Up, false),
            record(49, Sex::Male, ChestPainType::Asymptomatic, StSlope::Up, false),
            record(63, Sex::Male, ChestPainType::NonAnginal, StSlope::Flat, true),
        ];
        let slices = chest_pain_composition(&records);

        for group in [AgeGroup::A41To50, AgeGroup::A61To70] {
            let total: f64 = slices
                .iter()
                .filter(|s| s.age_group == group)
                .map(|s| s.share)
                .sum();
            assert!((total - 1.0).abs() < 1e-9, "group {group:?} sums to {total}");
        }
    }

    #[test]
    fn counts_follow_the_grouping() {
        let records = vec![
            record(45, Sex::Male, ChestPainType::Asymptomatic, StSlope::Flat, true),
            record(49, Sex::Male, ChestPainType::Asymptomatic, StSlope::Up, false),
            record(47, Sex::Female, ChestPainType::AtypicalAngina, StSlope::Up, false),
        ];
        let slices = chest_pain_composition(&records);

        let asy = slices
            .iter()
            .find(|s| s.chest_pain == ChestPainType::Asymptomatic)
            .unwrap();
        assert_eq!(asy.count, 2);
        assert!((asy.share - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(chest_pain_composition(&[]).is_empty());
    }

    #[test]
    fn groups_without_rows_are_absent() {
        let records = vec![record(
            35,
            Sex::Female,
            ChestPainType::TypicalAngina,
            StSlope::Up,
            false,
        )];
        let slices = chest_pain_composition(&records);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].age_group, AgeGroup::A30To40);
    }
}
