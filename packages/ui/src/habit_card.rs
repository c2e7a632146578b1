use api::Habit;
use dioxus::prelude::*;

/// One habit in the list, with its toggle / edit / delete actions.
#[component]
pub fn HabitCard(
    habit: Habit,
    on_toggle: EventHandler<Habit>,
    on_edit: EventHandler<Habit>,
    on_delete: EventHandler<String>,
) -> Element {
    let created = habit.created_date().to_string();
    let frequency = habit.frequency.wire_value();

    rsx! {
        div {
            class: if habit.is_active { "habit-card" } else { "habit-card inactive" },

            div {
                class: "habit-header",
                h3 { "{habit.name}" }
                span {
                    class: if habit.is_active { "status-badge active" } else { "status-badge inactive" },
                    if habit.is_active { "Ativo" } else { "Inativo" }
                }
            }

            if let Some(ref description) = habit.description {
                p { class: "habit-description", "{description}" }
            }

            div {
                class: "habit-meta",
                span { class: "frequency-badge", "{frequency}" }
                span { class: "habit-date", "Criado em: {created}" }
            }

            div {
                class: "habit-actions",
                button {
                    class: if habit.is_active { "btn-toggle deactivate" } else { "btn-toggle activate" },
                    onclick: {
                        let habit = habit.clone();
                        move |_| on_toggle.call(habit.clone())
                    },
                    if habit.is_active { "Desativar" } else { "Ativar" }
                }
                button {
                    class: "btn-edit",
                    onclick: {
                        let habit = habit.clone();
                        move |_| on_edit.call(habit.clone())
                    },
                    "Editar"
                }
                button {
                    class: "btn-delete",
                    onclick: {
                        let id = habit.id.clone();
                        move |_| on_delete.call(id.clone())
                    },
                    "Excluir"
                }
            }
        }
    }
}
