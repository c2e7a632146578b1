use api::{Frequency, HabitFilters};
use dioxus::prelude::*;

/// Sidebar panel with the status, frequency and name filters.
///
/// Status and frequency commit straight into the filter set; the name field
/// only reports keystrokes upward — the owning view debounces them before
/// committing.
#[component]
pub fn HabitFiltersPanel(
    mut filters: Signal<HabitFilters>,
    name_filter: Signal<String>,
    on_name_input: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let status_value = match filters().is_active {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    };
    let frequency_value = filters()
        .frequency
        .map(Frequency::wire_value)
        .unwrap_or("");

    rsx! {
        div {
            class: "filters-section",
            h2 { "Filtros" }

            div {
                class: "filter-group",
                label { "Status:" }
                select {
                    value: status_value,
                    onchange: move |evt| {
                        let value = evt.value();
                        filters.with_mut(|f| {
                            f.is_active = match value.as_str() {
                                "true" => Some(true),
                                "false" => Some(false),
                                _ => None,
                            };
                        });
                    },
                    option { value: "", "Todos" }
                    option { value: "true", "Ativos" }
                    option { value: "false", "Inativos" }
                }
            }

            div {
                class: "filter-group",
                label { "Frequência:" }
                select {
                    value: frequency_value,
                    onchange: move |evt| {
                        let frequency = evt.value().parse::<Frequency>().ok();
                        filters.with_mut(|f| f.frequency = frequency);
                    },
                    option { value: "", "Todas" }
                    for frequency in Frequency::ALL {
                        option {
                            value: frequency.wire_value(),
                            {frequency.wire_value()}
                        }
                    }
                }
            }

            div {
                class: "filter-group",
                label { "Nome:" }
                input {
                    r#type: "text",
                    placeholder: "Buscar por nome...",
                    value: name_filter(),
                    oninput: move |evt| on_name_input.call(evt.value()),
                }
            }

            button {
                class: "btn-clear-filters",
                onclick: move |_| on_clear.call(()),
                "Limpar Filtros"
            }
        }
    }
}
