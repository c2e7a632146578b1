//! Habit list page: list, filters, and the create/edit form, coordinated
//! against the API client.

use api::{Habit, HabitFilters, HabitPatch};
use dioxus::prelude::*;
use ui::{
    use_api, use_auth, use_request, validate, HabitCard, HabitDraft, HabitFiltersPanel, HabitForm,
    RequestOutcome,
};

use crate::views::ProtectedRoute;

/// How long the name filter input must stay idle before it is committed.
const NAME_FILTER_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn Habits() -> Element {
    let auth = use_auth();
    let api = use_api();
    let request = use_request();

    let mut habits = use_signal(Vec::<Habit>::new);
    let mut filters = use_signal(HabitFilters::default);
    let mut name_filter = use_signal(String::new);
    let mut debounce_generation = use_signal(|| 0u32);
    let mut draft = use_signal(HabitDraft::default);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);

    // Refetches whenever the committed filter set changes; the rendered list
    // is always the last successful fetch.
    let mut list = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let current = filters();
                match request.run(api.list_habits(&current)).await {
                    RequestOutcome::Success(result) => habits.set(result),
                    RequestOutcome::Failed(_) => {}
                }
            }
        }
    });

    // Keystrokes land in the buffer immediately; only the value still current
    // after the idle window is committed into the filter set.
    let handle_name_input = move |value: String| {
        name_filter.set(value);
        let generation = debounce_generation() + 1;
        debounce_generation.set(generation);
        spawn(async move {
            debounce().await;
            if debounce_generation() != generation {
                // superseded by a newer keystroke
                return;
            }
            let committed = committed_name(name_filter());
            filters.with_mut(|f| f.name = committed);
        });
    };

    let handle_clear = move |_| {
        name_filter.set(String::new());
        // invalidate any pending commit
        debounce_generation.set(debounce_generation() + 1);
        filters.set(HabitFilters::default());
    };

    let handle_submit = {
        let api = api.clone();
        move |_| {
            if submitting() {
                return;
            }
            if let Some(message) = validate::habit_draft_error(&draft()) {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            let api = api.clone();
            spawn(async move {
                submitting.set(true);
                let payload = draft().to_payload();
                let succeeded = match editing() {
                    Some(id) => request.run(api.update_habit(&id, &payload)).await.is_success(),
                    None => request.run(api.create_habit(&payload)).await.is_success(),
                };
                submitting.set(false);
                if succeeded {
                    draft.set(HabitDraft::default());
                    editing.set(None);
                    show_form.set(false);
                    list.restart();
                }
            });
        }
    };

    let reset_form = move |_| {
        draft.set(HabitDraft::default());
        editing.set(None);
        form_error.set(None);
        show_form.set(false);
    };

    let handle_edit = use_callback(move |habit: Habit| {
        editing.set(Some(habit.id.clone()));
        draft.set(HabitDraft::from_habit(&habit));
        form_error.set(None);
        show_form.set(true);
    });

    let handle_toggle = use_callback({
        let api = api.clone();
        move |habit: Habit| {
            let api = api.clone();
            spawn(async move {
                let patch = HabitPatch::active(!habit.is_active);
                if request.run(api.patch_habit(&habit.id, &patch)).await.is_success() {
                    list.restart();
                }
            });
        }
    });

    let handle_delete = use_callback({
        let api = api.clone();
        move |id: String| {
            if !confirm_delete() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                if request.run(api.delete_habit(&id)).await.is_success() {
                    list.restart();
                }
            });
        }
    });

    let handle_logout = {
        let auth = auth.clone();
        move |_| auth.logout()
    };

    let user_name = auth.user().map(|user| user.name).unwrap_or_default();

    rsx! {
        ProtectedRoute {
            div {
                class: "habits-container",

                header {
                    class: "habits-header",
                    div {
                        h1 { "Meus Hábitos" }
                        p { "Bem-vindo, {user_name}!" }
                    }
                    button { class: "btn-secondary", onclick: handle_logout, "Sair" }
                }

                div {
                    class: "habits-content",

                    div {
                        class: "habits-sidebar",
                        HabitFiltersPanel {
                            filters: filters,
                            name_filter: name_filter,
                            on_name_input: handle_name_input,
                            on_clear: handle_clear,
                        }
                        button {
                            class: "btn-primary btn-new-habit",
                            onclick: move |_| show_form.set(!show_form()),
                            if show_form() { "Cancelar" } else { "+ Novo Hábito" }
                        }
                    }

                    div {
                        class: "habits-main",

                        if show_form() {
                            HabitForm {
                                draft: draft,
                                editing: editing().is_some(),
                                error: form_error().or_else(|| request.error()),
                                busy: submitting(),
                                on_submit: handle_submit,
                                on_cancel: reset_form,
                            }
                        } else if let Some(message) = request.error() {
                            div { class: "error-message page-error", "{message}" }
                        }

                        div {
                            class: "habits-list",
                            if habits().is_empty() {
                                div {
                                    class: "empty-state",
                                    p { "Nenhum hábito encontrado." }
                                    if !show_form() {
                                        button {
                                            class: "btn-primary",
                                            onclick: move |_| show_form.set(true),
                                            "Criar Primeiro Hábito"
                                        }
                                    }
                                }
                            } else {
                                for habit in habits() {
                                    HabitCard {
                                        key: "{habit.id}",
                                        habit: habit.clone(),
                                        on_toggle: handle_toggle,
                                        on_edit: handle_edit,
                                        on_delete: handle_delete,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// What an idle name buffer commits into the filter set: an empty buffer
/// removes the filter instead of matching the empty string.
fn committed_name(buffer: String) -> Option<String> {
    if buffer.is_empty() {
        None
    } else {
        Some(buffer)
    }
}

async fn debounce() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(NAME_FILTER_DEBOUNCE_MS).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(
        NAME_FILTER_DEBOUNCE_MS,
    )))
    .await;
}

fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("Tem certeza que deseja excluir este hábito?")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::committed_name;

    #[test]
    fn empty_buffer_removes_the_name_filter() {
        assert_eq!(committed_name(String::new()), None);
        assert_eq!(committed_name("abc".to_string()), Some("abc".to_string()));
    }
}
