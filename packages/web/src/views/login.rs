//! Login page view.

use dioxus::prelude::*;
use ui::{use_auth, use_request, RequestOutcome};

use crate::views::PublicRoute;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let request = use_request();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);
            let email_value = email();
            let password_value = password();
            match request.run(auth.login(&email_value, &password_value)).await {
                RequestOutcome::Success(()) => {
                    nav.push(Route::Habits {});
                }
                RequestOutcome::Failed(_) => {
                    error.set(Some(
                        "Credenciais inválidas. Por favor, tente novamente.".to_string(),
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
                    h1 { "Login" }
                    form {
                        onsubmit: handle_submit,

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

                        if let Some(message) = error() {
                            div { class: "error-message", "{message}" }
                        }

                        button { r#type: "submit", class: "btn-primary", "Entrar" }
                    }
                    p {
                        class: "auth-link",
                        "Não tem uma conta? "
                        Link { to: Route::Register {}, "Registre-se" }
                    }
                }
            }
        }
    }
}
