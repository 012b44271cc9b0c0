//! End-to-end properties of the filter-and-aggregate engine, exercised
//! against the bundled demo table.

use std::collections::BTreeSet;

use ui::analytics::{
    age_pain_trend, age_slope_matrix, chest_pain_composition, ecg_profile,
    outcome_correlations, sex_pain_rates, CorrelationView,
};
use ui::core::dataset::{AgeGroup, ChestPainType, Dataset, PatientRecord, RestingEcg, Sex};
use ui::core::filter::{apply, FilterCriteria};

fn all_records() -> Vec<PatientRecord> {
    Dataset::bundled()
        .expect("bundled table must parse")
        .records()
        .to_vec()
}

#[test]
fn filtered_table_is_a_subset_satisfying_every_predicate() {
    let records = all_records();
    let criteria = FilterCriteria {
        chest_pain: [ChestPainType::Asymptomatic, ChestPainType::NonAnginal]
            .into_iter()
            .collect(),
        resting_ecg: Some(RestingEcg::Normal),
        age_groups: [AgeGroup::A41To50, AgeGroup::A51To60, AgeGroup::A61To70]
            .into_iter()
            .collect(),
        angina_only: true,
        sex: Some(Sex::Male),
    };

    let filtered = apply(&criteria, &records);
    assert!(filtered.len() < records.len());
    for row in &filtered {
        assert!(records.contains(row), "filtered row not from the source table");
        assert!(criteria.matches(row));
    }
}

#[test]
fn filtering_twice_equals_filtering_once() {
    let records = all_records();
    let criteria = FilterCriteria {
        resting_ecg: Some(RestingEcg::St),
        angina_only: true,
        ..FilterCriteria::all_selected()
    };

    let once = apply(&criteria, &records);
    let twice = apply(&criteria, &once);
    assert_eq!(once, twice);
}

#[test]
fn composition_shares_sum_to_one_for_every_nonempty_group() {
    let records = all_records();
    let slices = chest_pain_composition(&records);

    for group in AgeGroup::ALL {
        let total: f64 = slices
            .iter()
            .filter(|s| s.age_group == group)
            .map(|s| s.share)
            .sum();
        if total > 0.0 {
            assert!(
                (total - 1.0).abs() < 1e-9,
                "shares for {} sum to {total}",
                group.label()
            );
        }
    }
}

#[test]
fn aggregate_values_stay_in_their_documented_ranges() {
    let records = all_records();

    for bucket in ecg_profile(&records) {
        assert!((0.0..=100.0).contains(&bucket.disease_pct));
    }
    for cell in age_slope_matrix(&records).cells() {
        assert!((0.0..=100.0).contains(&cell.disease_pct));
    }
    for group in sex_pain_rates(&records) {
        assert!((0.0..=100.0).contains(&group.disease_pct));
        assert!(group.count > 0);
    }
    for point in age_pain_trend(&records) {
        assert!((0.0..=1.0).contains(&point.rate));
    }

    let correlations = match outcome_correlations(&records) {
        CorrelationView::BySex { male, female } => [male, female].concat(),
        CorrelationView::Single(vector) => vector,
    };
    for correlation in correlations.iter().filter(|c| c.magnitude.is_finite()) {
        assert!((0.0..=1.0).contains(&correlation.magnitude));
    }
}

#[test]
fn emptied_multiselect_cascades_to_empty_views_without_panicking() {
    let records = all_records();
    let criteria = FilterCriteria {
        chest_pain: BTreeSet::new(),
        ..FilterCriteria::all_selected()
    };

    let filtered = apply(&criteria, &records);
    assert!(filtered.is_empty());

    assert!(chest_pain_composition(&filtered).is_empty());
    assert!(ecg_profile(&filtered).is_empty());
    assert!(age_slope_matrix(&filtered).is_empty());
    assert!(sex_pain_rates(&filtered).is_empty());
    assert!(age_pain_trend(&filtered).is_empty());
    match outcome_correlations(&filtered) {
        CorrelationView::Single(vector) => {
            assert!(vector.iter().all(|c| !c.magnitude.is_finite()));
        }
        other => panic!("empty subset must stay a single cohort, got {other:?}"),
    }
}

#[test]
fn age_45_with_ata_lands_in_the_41_50_group() {
    let text = "age,chest_pain_type,resting_bp,cholesterol,fasting_bs,resting_ecg,max_hr,oldpeak,st_slope,heart_disease,Sex: Male,Exercise-Induced Angina: Yes\n\
        45,ATA,130,233,0,Normal,150,0.0,Up,0,1,0";
    let dataset = Dataset::from_csv_str(text).unwrap();
    let record = dataset.records()[0];
    assert_eq!(record.chest_pain, ChestPainType::AtypicalAngina);
    assert_eq!(record.age_group, AgeGroup::A41To50);
}

#[test]
fn male_only_subset_yields_a_single_correlation_vector() {
    let records = all_records();
    let criteria = FilterCriteria {
        sex: Some(Sex::Male),
        ..FilterCriteria::all_selected()
    };
    let filtered = apply(&criteria, &records);
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|r| r.sex == Sex::Male));

    match outcome_correlations(&filtered) {
        CorrelationView::Single(vector) => assert_eq!(vector.len(), 6),
        CorrelationView::BySex { .. } => {
            panic!("single-sex subset must not split into cohorts")
        }
    }
}
