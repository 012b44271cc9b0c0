//! Patient table loading and the derived age-group column.
//!
//! The loader owns the boundary contract: fixed column names, closed
//! categorical vocabularies, 0/1 flags, and ages inside the 30-100 clinical
//! range. Anything outside that contract is a fatal `DatasetError` before
//! any panel renders. Past this module the table is immutable.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{macros::format_description, OffsetDateTime};

/// Environment variable naming an explicit table path (desktop only).
pub const DATA_ENV: &str = "PULSEBOARD_DATA";

/// Table file picked up from the working directory when no path is given.
pub const DEFAULT_FILE: &str = "heart_cleaned_fe.csv";

/// Demo table compiled into the crate; the only source on wasm.
const BUNDLED_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/heart_cleaned_fe.csv"
));

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: age {age} is outside the 30-100 clinical range")]
    AgeOutOfRange { row: usize, age: u8 },
    #[error("row {row}: {column} must be 0 or 1, got {value}")]
    BinaryFlag {
        row: usize,
        column: &'static str,
        value: u8,
    },
    #[error("the patient table has no rows")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "Female")]
    Female,
    #[serde(rename = "Male")]
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChestPainType {
    #[serde(rename = "ASY")]
    Asymptomatic,
    #[serde(rename = "ATA")]
    AtypicalAngina,
    #[serde(rename = "NAP")]
    NonAnginal,
    #[serde(rename = "TA")]
    TypicalAngina,
}

impl ChestPainType {
    pub const ALL: [ChestPainType; 4] = [
        ChestPainType::Asymptomatic,
        ChestPainType::AtypicalAngina,
        ChestPainType::NonAnginal,
        ChestPainType::TypicalAngina,
    ];

    /// Short dataset code, used on chart axes.
    pub fn code(self) -> &'static str {
        match self {
            ChestPainType::Asymptomatic => "ASY",
            ChestPainType::AtypicalAngina => "ATA",
            ChestPainType::NonAnginal => "NAP",
            ChestPainType::TypicalAngina => "TA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChestPainType::Asymptomatic => "Asymptomatic",
            ChestPainType::AtypicalAngina => "Atypical angina",
            ChestPainType::NonAnginal => "Non-anginal pain",
            ChestPainType::TypicalAngina => "Typical angina",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RestingEcg {
    #[serde(rename = "LVH")]
    Lvh,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "ST")]
    St,
}

impl RestingEcg {
    pub const ALL: [RestingEcg; 3] = [RestingEcg::Lvh, RestingEcg::Normal, RestingEcg::St];

    pub fn label(self) -> &'static str {
        match self {
            RestingEcg::Lvh => "LVH",
            RestingEcg::Normal => "Normal",
            RestingEcg::St => "ST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StSlope {
    #[serde(rename = "Down")]
    Down,
    #[serde(rename = "Flat")]
    Flat,
    #[serde(rename = "Up")]
    Up,
}

impl StSlope {
    pub const ALL: [StSlope; 3] = [StSlope::Down, StSlope::Flat, StSlope::Up];

    pub fn label(self) -> &'static str {
        match self {
            StSlope::Down => "Down",
            StSlope::Flat => "Flat",
            StSlope::Up => "Up",
        }
    }
}

/// Fixed-width age bucket, derived once at load and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "30-40")]
    A30To40,
    #[serde(rename = "41-50")]
    A41To50,
    #[serde(rename = "51-60")]
    A51To60,
    #[serde(rename = "61-70")]
    A61To70,
    #[serde(rename = "71+")]
    A71Plus,
}

impl AgeGroup {
    /// Buckets in chart order, youngest first.
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::A30To40,
        AgeGroup::A41To50,
        AgeGroup::A51To60,
        AgeGroup::A61To70,
        AgeGroup::A71Plus,
    ];

    /// `None` for ages outside the supported 30-100 range.
    pub fn from_age(age: u8) -> Option<AgeGroup> {
        match age {
            30..=40 => Some(AgeGroup::A30To40),
            41..=50 => Some(AgeGroup::A41To50),
            51..=60 => Some(AgeGroup::A51To60),
            61..=70 => Some(AgeGroup::A61To70),
            71..=100 => Some(AgeGroup::A71Plus),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::A30To40 => "30-40",
            AgeGroup::A41To50 => "41-50",
            AgeGroup::A51To60 => "51-60",
            AgeGroup::A61To70 => "61-70",
            AgeGroup::A71Plus => "71+",
        }
    }
}

/// Source row exactly as the file spells it, including the one-hot headers
/// the upstream feature-engineering step left behind.
#[derive(Debug, Deserialize)]
struct RawRow {
    age: u8,
    chest_pain_type: ChestPainType,
    resting_bp: f64,
    cholesterol: f64,
    fasting_bs: u8,
    resting_ecg: RestingEcg,
    max_hr: f64,
    oldpeak: f64,
    st_slope: StSlope,
    heart_disease: u8,
    #[serde(rename = "Sex: Male")]
    sex_male: u8,
    #[serde(rename = "Exercise-Induced Angina: Yes")]
    exercise_angina: u8,
}

/// One validated patient row with the derived age group attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatientRecord {
    /// Age in years, 30-100.
    pub age: u8,
    pub sex: Sex,
    pub chest_pain: ChestPainType,
    /// Resting blood pressure in mmHg. Zero sentinels are kept as-is.
    pub resting_bp: f64,
    /// Serum cholesterol in mg/dL. Zero sentinels are kept as-is.
    pub cholesterol: f64,
    /// Fasting blood sugar above 120 mg/dL.
    pub fasting_bs: bool,
    pub resting_ecg: RestingEcg,
    /// Maximum heart rate achieved during exercise.
    pub max_hr: f64,
    /// ST depression induced by exercise relative to rest.
    pub oldpeak: f64,
    pub exercise_angina: bool,
    pub st_slope: StSlope,
    /// Binary outcome label.
    pub heart_disease: bool,
    pub age_group: AgeGroup,
}

impl PatientRecord {
    /// Outcome as 0.0/1.0, the unit every disease-rate mean is taken over.
    pub fn outcome(self) -> f64 {
        if self.heart_disease {
            1.0
        } else {
            0.0
        }
    }

    fn from_raw(raw: RawRow, row: usize) -> Result<Self, DatasetError> {
        let age_group = AgeGroup::from_age(raw.age)
            .ok_or(DatasetError::AgeOutOfRange { row, age: raw.age })?;
        let sex = if binary_flag(row, "Sex: Male", raw.sex_male)? {
            Sex::Male
        } else {
            Sex::Female
        };

        Ok(Self {
            age: raw.age,
            sex,
            chest_pain: raw.chest_pain_type,
            resting_bp: raw.resting_bp,
            cholesterol: raw.cholesterol,
            fasting_bs: binary_flag(row, "fasting_bs", raw.fasting_bs)?,
            resting_ecg: raw.resting_ecg,
            max_hr: raw.max_hr,
            oldpeak: raw.oldpeak,
            exercise_angina: binary_flag(
                row,
                "Exercise-Induced Angina: Yes",
                raw.exercise_angina,
            )?,
            st_slope: raw.st_slope,
            heart_disease: binary_flag(row, "heart_disease", raw.heart_disease)?,
            age_group,
        })
    }
}

fn binary_flag(row: usize, column: &'static str, value: u8) -> Result<bool, DatasetError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(DatasetError::BinaryFlag { row, column, value }),
    }
}

/// The loaded, validated, augmented table. Write-once at load, read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<PatientRecord>,
    loaded_at: OffsetDateTime,
}

impl Dataset {
    pub fn from_csv_str(text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut records = Vec::new();

        for (index, raw) in reader.deserialize::<RawRow>().enumerate() {
            let row = index + 1;
            let raw = raw.map_err(|source| DatasetError::Malformed { row, source })?;
            records.push(PatientRecord::from_raw(raw, row)?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self {
            records,
            loaded_at: OffsetDateTime::now_utc(),
        })
    }

    /// The demo table compiled into the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_csv_str(BUNDLED_CSV)
    }

    /// Resolve the table source once per app lifetime: explicit path from
    /// `PULSEBOARD_DATA`, then `heart_cleaned_fe.csv` beside the process,
    /// then the bundled demo table. An explicit path that cannot be read or
    /// parsed is fatal, not recoverable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Result<Self, DatasetError> {
        use std::{env, fs, path::Path};

        if let Ok(path) = env::var(DATA_ENV) {
            let text = fs::read_to_string(&path).map_err(|source| DatasetError::Io {
                path: path.clone(),
                source,
            })?;
            let dataset = Self::from_csv_str(&text)?;
            tracing::info!(records = dataset.len(), %path, "patient table loaded");
            return Ok(dataset);
        }

        if Path::new(DEFAULT_FILE).exists() {
            let text = fs::read_to_string(DEFAULT_FILE).map_err(|source| DatasetError::Io {
                path: DEFAULT_FILE.to_string(),
                source,
            })?;
            let dataset = Self::from_csv_str(&text)?;
            tracing::info!(records = dataset.len(), path = DEFAULT_FILE, "patient table loaded");
            return Ok(dataset);
        }

        let dataset = Self::bundled()?;
        tracing::info!(records = dataset.len(), "bundled demo table loaded");
        Ok(dataset)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_default() -> Result<Self, DatasetError> {
        let dataset = Self::bundled()?;
        tracing::info!(records = dataset.len(), "bundled demo table loaded");
        Ok(dataset)
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> OffsetDateTime {
        self.loaded_at
    }

    /// Compact stamp for the dashboard footer, e.g. `2026-08-06 14:30 UTC`.
    pub fn loaded_at_label(&self) -> String {
        self.loaded_at
            .format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute] UTC"
            ))
            .unwrap_or_else(|_| "—".to_string())
    }
}

/// Cheaply clonable read-only handle to the loaded table. Constructed once
/// at the app root and injected through context; nothing mutates it after
/// load.
#[derive(Debug, Clone)]
pub struct DataHandle(Arc<Dataset>);

impl DataHandle {
    pub fn new(dataset: Dataset) -> Self {
        Self(Arc::new(dataset))
    }

    pub fn load() -> Result<Self, DatasetError> {
        Dataset::load_default().map(Self::new)
    }
}

impl std::ops::Deref for DataHandle {
    type Target = Dataset;

    fn deref(&self) -> &Dataset {
        &self.0
    }
}

impl PartialEq for DataHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "age,chest_pain_type,resting_bp,cholesterol,fasting_bs,resting_ecg,max_hr,oldpeak,st_slope,heart_disease,Sex: Male,Exercise-Induced Angina: Yes";

    fn table(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn age_groups_partition_the_clinical_range() {
        assert_eq!(AgeGroup::from_age(30), Some(AgeGroup::A30To40));
        assert_eq!(AgeGroup::from_age(40), Some(AgeGroup::A30To40));
        assert_eq!(AgeGroup::from_age(41), Some(AgeGroup::A41To50));
        assert_eq!(AgeGroup::from_age(45), Some(AgeGroup::A41To50));
        assert_eq!(AgeGroup::from_age(70), Some(AgeGroup::A61To70));
        assert_eq!(AgeGroup::from_age(71), Some(AgeGroup::A71Plus));
        assert_eq!(AgeGroup::from_age(100), Some(AgeGroup::A71Plus));
        assert_eq!(AgeGroup::from_age(29), None);
        assert_eq!(AgeGroup::from_age(101), None);
    }

    #[test]
    fn parses_a_valid_table() {
        let text = table(&[
            "45,ATA,130,233,0,Normal,150,0.0,Up,0,1,0",
            "63,ASY,145,0,1,ST,108,2.3,Flat,1,0,1",
        ]);
        let dataset = Dataset::from_csv_str(&text).expect("table should parse");
        assert_eq!(dataset.len(), 2);

        let first = dataset.records()[0];
        assert_eq!(first.age_group, AgeGroup::A41To50);
        assert_eq!(first.sex, Sex::Male);
        assert_eq!(first.chest_pain, ChestPainType::AtypicalAngina);
        assert!(!first.heart_disease);

        let second = dataset.records()[1];
        assert_eq!(second.sex, Sex::Female);
        assert!(second.fasting_bs);
        assert!(second.exercise_angina);
        // Zero cholesterol sentinel survives load untouched.
        assert_eq!(second.cholesterol, 0.0);
    }

    #[test]
    fn unknown_chest_pain_is_malformed() {
        let text = table(&["45,XXX,130,233,0,Normal,150,0.0,Up,0,1,0"]);
        match Dataset::from_csv_str(&text) {
            Err(DatasetError::Malformed { row: 1, .. }) => {}
            other => panic!("expected malformed row, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_age_is_fatal() {
        let text = table(&["29,ATA,130,233,0,Normal,150,0.0,Up,0,1,0"]);
        match Dataset::from_csv_str(&text) {
            Err(DatasetError::AgeOutOfRange { row: 1, age: 29 }) => {}
            other => panic!("expected age error, got {other:?}"),
        }
    }

    #[test]
    fn non_binary_flag_is_fatal() {
        let text = table(&["45,ATA,130,233,0,Normal,150,0.0,Up,2,1,0"]);
        match Dataset::from_csv_str(&text) {
            Err(DatasetError::BinaryFlag {
                column: "heart_disease",
                value: 2,
                ..
            }) => {}
            other => panic!("expected flag error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_fatal() {
        let text = "age,chest_pain_type\n45,ATA";
        assert!(matches!(
            Dataset::from_csv_str(text),
            Err(DatasetError::Malformed { .. })
        ));
    }

    #[test]
    fn header_only_table_is_empty() {
        assert!(matches!(
            Dataset::from_csv_str(HEADER),
            Err(DatasetError::Empty)
        ));
    }
}
