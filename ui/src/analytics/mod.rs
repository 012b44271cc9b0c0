//! The six aggregate views feeding the chart grid.
//!
//! Each module owns one view, takes the filtered table, and tolerates
//! empty or degenerate input by returning an empty/minimal result. None of
//! them depends on another's output.

pub mod composition;
pub mod correlation;
pub mod ecg;
pub mod sex_pain;
pub mod slope_heat;
pub mod trend;

pub use composition::{chest_pain_composition, CompositionSlice};
pub use correlation::{outcome_correlations, CorrelationView, FeatureCorrelation, NumericFeature};
pub use ecg::{ecg_profile, EcgBucket};
pub use sex_pain::{sex_pain_rates, SexPainGroup};
pub use slope_heat::{age_slope_matrix, SlopeCell, SlopeMatrix};
pub use trend::{age_pain_trend, TrendPoint};
