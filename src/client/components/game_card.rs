use dioxus::prelude::*;

use crate::{
    client::{router::Route, util::image_src},
    model::image::ImageRef,
};

#[component]
pub fn GameCard(
    name: String,
    slug: String,
    description: Option<String>,
    cover_image: Option<ImageRef>,
    mission_count: u32,
) -> Element {
    let missions = if mission_count == 1 {
        "1 mission".to_string()
    } else {
        format!("{} missions", mission_count)
    };

    rsx!(
        Link { to: Route::GameGuide { game: slug },
            div { class: "card bg-base-100 shadow-sm w-80 h-full",
                if let Some(src) = cover_image.as_ref().and_then(|image| image_src(image, 640)) {
                    figure {
                        img { src: "{src}", alt: "{name}" }
                    }
                }
                div { class: "card-body",
                    h2 { class: "card-title", "{name}" }
                    if let Some(description) = description {
                        p { class: "line-clamp-3", "{description}" }
                    }
                    div { class: "badge badge-outline", "{missions}" }
                }
            }
        }
    )
}
