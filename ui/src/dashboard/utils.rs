use crate::core::dataset::PatientRecord;
use crate::core::format;

/// Header strapline for the current filtered subset.
pub(crate) fn subset_summary(records: &[PatientRecord]) -> String {
    if records.is_empty() {
        return "No patients match the current filters".to_string();
    }
    let diseased = records.iter().filter(|r| r.heart_disease).count();
    let share = diseased as f64 / records.len() as f64;
    format!(
        "{} · {} with disease",
        format::format_count(records.len()),
        format::format_percent(share)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;

    #[test]
    fn summary_reports_count_and_share() {
        let text = "age,chest_pain_type,resting_bp,cholesterol,fasting_bs,resting_ecg,max_hr,oldpeak,st_slope,heart_disease,Sex: Male,Exercise-Induced Angina: Yes\n\
            45,ATA,130,233,0,Normal,150,0.0,Up,0,1,0\n\
            63,ASY,145,180,1,ST,108,2.3,Flat,1,0,1";
        let dataset = Dataset::from_csv_str(text).unwrap();
        assert_eq!(
            subset_summary(dataset.records()),
            "2 patients · 50% with disease"
        );
        assert_eq!(
            subset_summary(&[]),
            "No patients match the current filters"
        );
    }
}
