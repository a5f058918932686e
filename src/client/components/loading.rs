use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "flex justify-center p-8",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

/// Shown in place of content when a request failed.
#[component]
pub fn ErrorState(message: String) -> Element {
    rsx!(
        div { class: "alert alert-error max-w-xl mx-auto",
            p { "Failed to load content, please try again later." }
            p { class: "text-xs", "{message}" }
        }
    )
}
