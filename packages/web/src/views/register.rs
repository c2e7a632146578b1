//! Registration page view.
//!
//! The form is validated client-side before any network call; the specific
//! failing rule is surfaced inline.

use dioxus::prelude::*;
use ui::{use_auth, use_request, validate, RequestOutcome};

use crate::views::PublicRoute;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let request = use_request();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            if let Some(message) =
                validate::registration_error(&name(), &password(), &confirm_password())
            {
                error.set(Some(message));
                return;
            }

            let name_value = name();
            let email_value = email();
            let password_value = password();
            match request
                .run(auth.register(&name_value, &email_value, &password_value))
                .await
            {
                RequestOutcome::Success(()) => {
                    nav.push(Route::Habits {});
                }
                RequestOutcome::Failed(_) => {
                    error.set(Some(
                        "Erro ao criar conta. Por favor, tente novamente.".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        PublicRoute {
            div {
                class: "auth-container",
                div {
                    class: "auth-card",
                    h1 { "Registro" }
                    form {
                        onsubmit: handle_submit,

                        div {
                            class: "form-group",
                            label { r#for: "name", "Nome" }
                            input {
                                id: "name",
                                r#type: "text",
                                placeholder: "Seu nome completo",
                                required: true,
                                value: name(),
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-group",
                            label { r#for: "email", "E-mail" }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "seu@email.com",
                                required: true,
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-group",
                            label { r#for: "password", "Senha" }
                            input {
                                id: "password",
                                r#type: "password",
                                placeholder: "Mínimo 6 caracteres",
                                required: true,
                                value: password(),
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-group",
                            label { r#for: "confirm-password", "Confirmar Senha" }
                            input {
                                id: "confirm-password",
                                r#type: "password",
                                placeholder: "Digite a senha novamente",
                                required: true,
                                value: confirm_password(),
                                oninput: move |evt| confirm_password.set(evt.value()),
                            }
                        }

                        if let Some(message) = error() {
                            div { class: "error-message", "{message}" }
                        }

                        button { r#type: "submit", class: "btn-primary", "Criar Conta" }
                    }
                    p {
                        class: "auth-link",
                        "Já tem uma conta? "
                        Link { to: Route::Login {}, "Faça login" }
                    }
                }
            }
        }
    }
}
