use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not Found | Hitman Guides" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Nothing here" }
            p { "No page exists at {path}" }
            Link { to: Route::Guides {}, class: "btn btn-primary", "Browse guides" }
        }
    )
}
