use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Pulseboard" }
            p { "An interactive view over a table of patient cardiac records." }
            p {
                "Pick filters in the sidebar and all six panels recompute from the "
                "same filtered subset — composition, counts, disease rates, and "
                "feature correlations."
            }

            ul { class: "page-home__features",
                li { "Five filter controls: chest pain, resting ECG, age group, angina, sex" }
                li { "Six charts recomputed in full on every interaction" }
                li { "JSON/CSV export of whatever subset you are looking at" }
            }
            p { class: "page-home__cta",
                "Head to the Dashboard tab to start slicing."
            }
        }
    }
}
