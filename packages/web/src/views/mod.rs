use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

mod habits;
mod login;
mod register;

pub use habits::Habits;
pub use login::Login;
pub use register::Register;

/// Gate for the login/register pages: an authenticated user is sent straight
/// to the habit list. Waits for the startup session restore before deciding.
#[component]
pub fn PublicRoute(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth.state();
    if state.loading {
        return rsx! {
            div { class: "route-loading", p { "Carregando..." } }
        };
    }
    if state.is_authenticated() {
        nav.replace(Route::Habits {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Gate for authenticated pages: anonymous users land on the login page.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth.state();
    if state.loading {
        return rsx! {
            div { class: "route-loading", p { "Carregando..." } }
        };
    }
    if !state.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
