use api::{Frequency, Habit, HabitPayload};
use dioxus::prelude::*;

/// Transient editable copy of a habit bound to the create/edit form.
/// Discarded on submit or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitDraft {
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    pub is_active: bool,
}

impl Default for HabitDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            frequency: Frequency::Daily,
            is_active: true,
        }
    }
}

impl HabitDraft {
    /// Load an existing habit into the form for editing.
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            name: habit.name.clone(),
            description: habit.description.clone().unwrap_or_default(),
            frequency: habit.frequency,
            is_active: habit.is_active,
        }
    }

    /// The full payload sent on create and update. An empty description is
    /// omitted rather than sent as an empty string.
    pub fn to_payload(&self) -> HabitPayload {
        let description = self.description.trim();
        HabitPayload {
            name: self.name.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            frequency: self.frequency,
            is_active: self.is_active,
        }
    }
}

/// Inline form for creating or editing a habit.
#[component]
pub fn HabitForm(
    mut draft: Signal<HabitDraft>,
    editing: bool,
    error: Option<String>,
    busy: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(());
    };

    rsx! {
        div {
            class: "habit-form-card",
            h2 {
                if editing { "Editar Hábito" } else { "Novo Hábito" }
            }
            form {
                onsubmit: handle_submit,

                div {
                    class: "form-group",
                    label { r#for: "habit-name", "Nome *" }
                    input {
                        id: "habit-name",
                        r#type: "text",
                        placeholder: "Ex: Academia",
                        value: draft().name,
                        oninput: move |evt| draft.with_mut(|d| d.name = evt.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "habit-description", "Descrição" }
                    textarea {
                        id: "habit-description",
                        rows: "3",
                        placeholder: "Descrição opcional do hábito",
                        value: draft().description,
                        oninput: move |evt| draft.with_mut(|d| d.description = evt.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "habit-frequency", "Frequência *" }
                    select {
                        id: "habit-frequency",
                        value: draft().frequency.wire_value(),
                        onchange: move |evt| {
                            if let Ok(frequency) = evt.value().parse::<Frequency>() {
                                draft.with_mut(|d| d.frequency = frequency);
                            }
                        },
                        for frequency in Frequency::ALL {
                            option {
                                value: frequency.wire_value(),
                                {frequency.wire_value()}
                            }
                        }
                    }
                }

                div {
                    class: "form-group",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: draft().is_active,
                            oninput: move |evt| draft.with_mut(|d| d.is_active = evt.checked()),
                        }
                        "Ativo"
                    }
                }

                if let Some(message) = error {
                    div { class: "error-message", "{message}" }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: busy,
                        if busy {
                            "Salvando..."
                        } else if editing {
                            "Atualizar"
                        } else {
                            "Criar"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit() -> Habit {
        Habit {
            id: "h-1".to_string(),
            name: "Academia".to_string(),
            description: Some("3x por semana".to_string()),
            frequency: Frequency::Weekly,
            is_active: false,
            user_id: "u-1".to_string(),
            created_at: "2024-01-10T12:00:00.000Z".to_string(),
            updated_at: "2024-01-10T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn blank_draft_defaults_to_daily_and_active() {
        let draft = HabitDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.description.is_empty());
        assert_eq!(draft.frequency, Frequency::Daily);
        assert!(draft.is_active);
    }

    #[test]
    fn editing_loads_every_habit_field() {
        let draft = HabitDraft::from_habit(&habit());
        assert_eq!(draft.name, "Academia");
        assert_eq!(draft.description, "3x por semana");
        assert_eq!(draft.frequency, Frequency::Weekly);
        assert!(!draft.is_active);
    }

    #[test]
    fn payload_trims_name_and_omits_empty_description() {
        let draft = HabitDraft {
            name: "  Correr  ".to_string(),
            description: "   ".to_string(),
            frequency: Frequency::Daily,
            is_active: true,
        };
        let payload = draft.to_payload();
        assert_eq!(payload.name, "Correr");
        assert!(payload.description.is_none());
    }
}
