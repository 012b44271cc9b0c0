use dioxus::prelude::*;

use crate::core::filter::{self, FilterCriteria};
use crate::dashboard::{
    subset_summary, CompositionPanel, CorrelationPanel, DashboardData, EcgPanel, ExportPanel,
    FilterSidebar, SexPainPanel, SlopeHeatmapPanel, TrendPanel,
};

/// The dashboard page: filter sidebar plus the fixed 2×3 chart grid. Every
/// filter interaction produces a fresh criteria snapshot and one full
/// recomputation pass over all six aggregations.
#[component]
pub fn Dashboard() -> Element {
    let data = use_context::<DashboardData>();
    let criteria = use_signal(FilterCriteria::all_selected);

    let Some(handle) = data.handle.clone() else {
        let message = data
            .error
            .clone()
            .unwrap_or_else(|| "Patient table unavailable.".to_string());
        return rsx! {
            section { class: "page page-dashboard",
                div { class: "load-error",
                    h1 { "Pulseboard" }
                    p { class: "load-error__message", "{message}" }
                    p { "Fix the source table and restart — there is no recovery path." }
                }
            }
        };
    };

    let memo_handle = handle.clone();
    let filtered = use_memo(move || filter::apply(&criteria(), memo_handle.records()));
    let records = filtered();
    let summary = subset_summary(&records);

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard__header",
                h1 { "💓 Heart Disease Dashboard" }
                span { class: "dashboard__meta", "{summary}" }
            }

            div { class: "dashboard__layout",
                FilterSidebar { criteria }

                div { class: "dashboard__grid",
                    CompositionPanel { records: records.clone() }
                    EcgPanel { records: records.clone() }
                    SlopeHeatmapPanel { records: records.clone() }
                    SexPainPanel { records: records.clone() }
                    CorrelationPanel { records: records.clone() }
                    TrendPanel { records: records.clone() }
                }
            }

            ExportPanel { records }

            footer { class: "dashboard__footer",
                "{handle.len()} records · table loaded {handle.loaded_at_label()} · filters refresh all six panels"
            }
        }
    }
}
