use dioxus::prelude::*;

use api::ApiClient;
use store::SessionCache;
use ui::{AuthProvider, Loader, LoaderProvider};
use views::{Habits, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/habits")]
    Habits {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting habits client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client handle for the whole tree; its cache backs the bearer
    // interceptor and session rehydration alike.
    use_context_provider(|| ApiClient::new(SessionCache::platform()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LoaderProvider {
            AuthProvider {
                Loader {}
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/habits`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Habits {});
    rsx! {}
}
