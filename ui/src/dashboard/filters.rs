use dioxus::prelude::*;

use crate::core::dataset::{AgeGroup, ChestPainType, RestingEcg, Sex};
use crate::core::filter::FilterCriteria;

/// Sidebar controls. Every interaction rebuilds the whole `FilterCriteria`
/// snapshot so downstream memos see one consistent value.
#[component]
pub fn FilterSidebar(criteria: Signal<FilterCriteria>) -> Element {
    let mut criteria = criteria;
    let current = criteria();

    let ecg_value = current
        .resting_ecg
        .map(RestingEcg::label)
        .unwrap_or("All")
        .to_string();
    let sex_value = current.sex.map(Sex::label).unwrap_or("All").to_string();

    rsx! {
        aside { class: "filters",
            h2 { class: "filters__title", "Filters" }

            fieldset { class: "filters__group",
                legend { "Chest pain type" }
                for pain in ChestPainType::ALL {
                    label { class: "filters__option",
                        input {
                            r#type: "checkbox",
                            checked: current.chest_pain.contains(&pain),
                            oninput: move |evt: FormEvent| {
                                let mut next = criteria();
                                if evt.checked() {
                                    next.chest_pain.insert(pain);
                                } else {
                                    next.chest_pain.remove(&pain);
                                }
                                criteria.set(next);
                            },
                        }
                        span { "{pain.label()} ({pain.code()})" }
                    }
                }
            }

            div { class: "filters__group",
                label { class: "filters__label", r#for: "ecg-select", "Resting ECG" }
                select {
                    id: "ecg-select",
                    class: "filters__select",
                    value: "{ecg_value}",
                    oninput: move |evt: FormEvent| {
                        let mut next = criteria();
                        next.resting_ecg = RestingEcg::ALL
                            .into_iter()
                            .find(|ecg| ecg.label() == evt.value());
                        criteria.set(next);
                    },
                    option { value: "All", "All" }
                    for ecg in RestingEcg::ALL {
                        option { value: "{ecg.label()}", "{ecg.label()}" }
                    }
                }
            }

            fieldset { class: "filters__group",
                legend { "Age group" }
                for group in AgeGroup::ALL {
                    label { class: "filters__option",
                        input {
                            r#type: "checkbox",
                            checked: current.age_groups.contains(&group),
                            oninput: move |evt: FormEvent| {
                                let mut next = criteria();
                                if evt.checked() {
                                    next.age_groups.insert(group);
                                } else {
                                    next.age_groups.remove(&group);
                                }
                                criteria.set(next);
                            },
                        }
                        span { "{group.label()}" }
                    }
                }
            }

            div { class: "filters__group",
                label { class: "filters__option filters__option--toggle",
                    input {
                        r#type: "checkbox",
                        checked: current.angina_only,
                        oninput: move |evt: FormEvent| {
                            let mut next = criteria();
                            next.angina_only = evt.checked();
                            criteria.set(next);
                        },
                    }
                    span { "Exercise-induced angina: yes" }
                }
            }

            div { class: "filters__group",
                label { class: "filters__label", r#for: "sex-select", "Sex" }
                select {
                    id: "sex-select",
                    class: "filters__select",
                    value: "{sex_value}",
                    oninput: move |evt: FormEvent| {
                        let mut next = criteria();
                        next.sex = Sex::ALL.into_iter().find(|sex| sex.label() == evt.value());
                        criteria.set(next);
                    },
                    option { value: "All", "All" }
                    for sex in Sex::ALL {
                        option { value: "{sex.label()}", "{sex.label()}" }
                    }
                }
            }
        }
    }
}
