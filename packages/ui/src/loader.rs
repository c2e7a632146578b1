//! Global loading indicator context.

use dioxus::prelude::*;

/// Handle to the global loading flag raised by the request executor.
#[derive(Clone, Copy, PartialEq)]
pub struct Loading(Signal<bool>);

impl Loading {
    pub fn get(&self) -> bool {
        (self.0)()
    }

    pub fn set(&self, value: bool) {
        let mut flag = self.0;
        flag.set(value);
    }
}

/// Get the global loading flag.
pub fn use_loader() -> Loading {
    use_context::<Loading>()
}

/// Provider component owning the loading flag. Initialize once at the
/// application root, next to [`crate::AuthProvider`].
#[component]
pub fn LoaderProvider(children: Element) -> Element {
    let flag = use_signal(|| false);
    use_context_provider(move || Loading(flag));

    rsx! {
        {children}
    }
}

/// Full-screen overlay shown while any request is in flight.
#[component]
pub fn Loader() -> Element {
    let loading = use_loader();

    if !loading.get() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "loader-overlay",
            div { class: "loader-spinner" }
        }
    }
}
