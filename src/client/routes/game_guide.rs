use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api::get_game;
use crate::{
    client::{
        components::{ErrorState, Loading, Page},
        router::Route,
        util::image_src,
    },
    model::{game::GameDetail, mission::MissionSummary},
};

#[component]
pub fn GameGuide(game: String) -> Element {
    #[cfg(feature = "web")]
    let detail = use_resource(use_reactive!(|game| async move { get_game(&game).await }));
    #[cfg(feature = "web")]
    let state = detail.read_unchecked().clone();
    #[cfg(not(feature = "web"))]
    let state: Option<Result<Option<GameDetail>, String>> = None;

    let content = match state {
        None => rsx! { Loading {} },
        Some(Err(err)) => {
            tracing::error!("{}", err);
            rsx! { ErrorState { message: err } }
        }
        Some(Ok(None)) => rsx! {
            Title { "Game Not Found | Hitman Guides" }
            p { class: "text-center p-8", "No game found for \"{game}\"." }
        },
        Some(Ok(Some(detail))) => rsx! { GameDetailView { detail } },
    };

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                {content}
            }
        }
    )
}

#[component]
fn GameDetailView(detail: GameDetail) -> Element {
    let cover = detail.cover_image.as_ref().and_then(|image| image_src(image, 1440));
    let game_slug = detail.slug.current.clone();
    let mission_count = detail.missions.len();
    let guide_count = detail.guides.len();

    rsx!(
        Title { "{detail.name} | Hitman Guides" }
        div { class: "flex flex-col gap-2",
            if let Some(src) = cover {
                img { class: "rounded w-full max-h-96 object-cover", src: "{src}", alt: "{detail.name}" }
            }
            h1 { class: "text-3xl font-bold", "{detail.name}" }
            if let Some(description) = &detail.description {
                p { "{description}" }
            }
            div { class: "stats shadow",
                div { class: "stat",
                    div { class: "stat-title", "Missions" }
                    div { class: "stat-value", "{mission_count}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Guides" }
                    div { class: "stat-value", "{guide_count}" }
                }
            }
        }
        div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-4",
            {detail.missions.iter().map(|mission| rsx! {
                MissionCard { key: "{mission.id}", game: game_slug.clone(), mission: mission.clone() }
            })}
        }
    )
}

#[component]
fn MissionCard(game: String, mission: MissionSummary) -> Element {
    let image = mission.mission_image.as_ref().and_then(|image| image_src(image, 640));
    let difficulty = mission.difficulty.as_str();

    rsx!(
        Link { to: Route::MissionGuide { game, mission: mission.slug.current.clone() },
            div { class: "card bg-base-100 shadow-sm h-full",
                if let Some(src) = image {
                    figure {
                        img { src: "{src}", alt: "{mission.name}" }
                    }
                }
                div { class: "card-body",
                    h2 { class: "card-title", "{mission.name}" }
                    p { "{mission.location}" }
                    div { class: "badge badge-outline", "{difficulty}" }
                }
            }
        }
    )
}
