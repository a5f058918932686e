use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api::list_games;
use crate::{
    client::components::{ErrorState, GameCard, Loading, Page},
    model::game::GameSummary,
};

#[component]
pub fn Guides() -> Element {
    let mut query = use_signal(String::new);

    #[cfg(feature = "web")]
    let games = use_resource(|| async move { list_games().await });
    #[cfg(feature = "web")]
    let state = games.read_unchecked().clone();
    #[cfg(not(feature = "web"))]
    let state: Option<Result<Vec<GameSummary>, String>> = None;

    let listing = match state {
        None => rsx! { Loading {} },
        Some(Err(err)) => {
            tracing::error!("{}", err);
            rsx! { ErrorState { message: err } }
        }
        Some(Ok(games)) => rsx! { GameList { games, query: query() } },
    };

    rsx!(
        Title { "Guides | Hitman Guides" }
        Meta {
            name: "description",
            content: "Every game with mission guides."
        }
        Page { class: "flex flex-col items-center gap-6",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                h1 { class: "text-3xl font-bold", "Guides" }
                input {
                    class: "input input-bordered w-full max-w-md",
                    r#type: "search",
                    placeholder: "Search games",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                {listing}
            }
        }
    )
}

#[component]
fn GameList(games: Vec<GameSummary>, query: String) -> Element {
    let matching: Vec<&GameSummary> = games.iter().filter(|g| g.matches(&query)).collect();

    if matching.is_empty() {
        return rsx!(
            p { class: "text-center p-8", "No games match your search." }
        );
    }

    rsx!(
        div { class: "flex flex-wrap gap-4",
            {matching.into_iter().map(|game| rsx! {
                GameCard {
                    key: "{game.id}",
                    name: game.name.clone(),
                    slug: game.slug.current.clone(),
                    description: game.description.clone(),
                    cover_image: game.cover_image.clone(),
                    mission_count: game.mission_count,
                }
            })}
        }
    )
}
