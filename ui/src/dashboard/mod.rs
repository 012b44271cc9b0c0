//! Dashboard surface: filter sidebar, chart panels, export.

mod filters;
pub use filters::FilterSidebar;

mod panels;
pub use panels::{
    CompositionPanel, CorrelationPanel, EcgPanel, SexPainPanel, SlopeHeatmapPanel, TrendPanel,
};

mod export;
pub use export::ExportPanel;

mod svg;

mod utils;
pub(crate) use utils::*;

use crate::core::dataset::DataHandle;

/// Outcome of the one-time table load, constructed at the app root and
/// injected through context. A load failure leaves `handle` empty and the
/// app renders the fatal-error page instead of the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub handle: Option<DataHandle>,
    pub error: Option<String>,
}

impl DashboardData {
    pub fn load() -> Self {
        match DataHandle::load() {
            Ok(handle) => Self {
                handle: Some(handle),
                error: None,
            },
            Err(err) => {
                tracing::error!(error = %err, "patient table load failed");
                Self {
                    handle: None,
                    error: Some(format!("Couldn't load the patient table: {err}")),
                }
            }
        }
    }
}
