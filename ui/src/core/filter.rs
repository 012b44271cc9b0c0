//! Filter predicates applied to the patient table.
//!
//! A `FilterCriteria` is a snapshot of the sidebar controls, rebuilt on
//! every interaction. Evaluation is the logical AND of five predicates; an
//! emptied multiselect legitimately produces an empty table downstream.

use std::collections::BTreeSet;

use super::dataset::{AgeGroup, ChestPainType, PatientRecord, RestingEcg, Sex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Allowed chest-pain types; membership test, so empty means "nothing".
    pub chest_pain: BTreeSet<ChestPainType>,
    /// `None` leaves resting ECG unconstrained.
    pub resting_ecg: Option<RestingEcg>,
    /// Allowed age groups; membership test, so empty means "nothing".
    pub age_groups: BTreeSet<AgeGroup>,
    /// When set, only rows with exercise-induced angina pass.
    pub angina_only: bool,
    /// `None` leaves sex unconstrained.
    pub sex: Option<Sex>,
}

impl FilterCriteria {
    /// The sidebar's initial state: every category selected, no single-value
    /// constraints.
    pub fn all_selected() -> Self {
        Self {
            chest_pain: ChestPainType::ALL.into_iter().collect(),
            resting_ecg: None,
            age_groups: AgeGroup::ALL.into_iter().collect(),
            angina_only: false,
            sex: None,
        }
    }

    pub fn matches(&self, record: &PatientRecord) -> bool {
        if !self.chest_pain.contains(&record.chest_pain) {
            return false;
        }
        if let Some(ecg) = self.resting_ecg {
            if record.resting_ecg != ecg {
                return false;
            }
        }
        if !self.age_groups.contains(&record.age_group) {
            return false;
        }
        if self.angina_only && !record.exercise_angina {
            return false;
        }
        if let Some(sex) = self.sex {
            if record.sex != sex {
                return false;
            }
        }
        true
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::all_selected()
    }
}

/// The filtered subset every aggregation reads from.
pub fn apply(criteria: &FilterCriteria, records: &[PatientRecord]) -> Vec<PatientRecord> {
    records
        .iter()
        .copied()
        .filter(|record| criteria.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{Dataset, StSlope};

    fn sample() -> Vec<PatientRecord> {
        let text = "age,chest_pain_type,resting_bp,cholesterol,fasting_bs,resting_ecg,max_hr,oldpeak,st_slope,heart_disease,Sex: Male,Exercise-Induced Angina: Yes\n\
            45,ATA,130,233,0,Normal,150,0.0,Up,0,1,0\n\
            63,ASY,145,180,1,ST,108,2.3,Flat,1,0,1\n\
            52,NAP,120,210,0,LVH,140,0.5,Up,0,1,1\n\
            74,ASY,160,290,0,Normal,98,3.1,Down,1,1,0";
        Dataset::from_csv_str(text).unwrap().records().to_vec()
    }

    #[test]
    fn default_criteria_keep_everything() {
        let records = sample();
        let filtered = apply(&FilterCriteria::all_selected(), &records);
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn every_surviving_row_satisfies_all_predicates() {
        let records = sample();
        let criteria = FilterCriteria {
            chest_pain: [ChestPainType::Asymptomatic].into_iter().collect(),
            resting_ecg: None,
            age_groups: AgeGroup::ALL.into_iter().collect(),
            angina_only: false,
            sex: Some(Sex::Male),
        };
        let filtered = apply(&criteria, &records);
        assert_eq!(filtered.len(), 1);
        assert!(filtered
            .iter()
            .all(|r| criteria.matches(r) && r.sex == Sex::Male));
        assert_eq!(filtered[0].st_slope, StSlope::Down);
    }

    #[test]
    fn emptied_multiselect_yields_empty_table() {
        let records = sample();
        let criteria = FilterCriteria {
            chest_pain: BTreeSet::new(),
            ..FilterCriteria::all_selected()
        };
        assert!(apply(&criteria, &records).is_empty());
    }

    #[test]
    fn angina_toggle_constrains_rows() {
        let records = sample();
        let criteria = FilterCriteria {
            angina_only: true,
            ..FilterCriteria::all_selected()
        };
        let filtered = apply(&criteria, &records);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.exercise_angina));
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            resting_ecg: Some(RestingEcg::Normal),
            ..FilterCriteria::all_selected()
        };
        let once = apply(&criteria, &records);
        let twice = apply(&criteria, &once);
        assert_eq!(once, twice);
    }
}
