use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api::get_featured_content;
use crate::{
    client::{
        components::{ErrorState, GameCard, Loading, Page},
        router::Route,
    },
    model::featured::{FeaturedContent, FeaturedGuide, RecentGuide},
};

#[component]
pub fn Home() -> Element {
    #[cfg(feature = "web")]
    let featured = use_resource(|| async move { get_featured_content().await });
    #[cfg(feature = "web")]
    let state = featured.read_unchecked().clone();
    #[cfg(not(feature = "web"))]
    let state: Option<Result<FeaturedContent, String>> = None;

    let sections = match state {
        None => rsx! { Loading {} },
        Some(Err(err)) => {
            tracing::error!("{}", err);
            rsx! { ErrorState { message: err } }
        }
        Some(Ok(content)) => rsx! { FeaturedSections { content } },
    };

    rsx!(
        Title { "Hitman Guides" }
        Meta {
            name: "description",
            content: "Mission walkthroughs, disguises, and challenge guides for Hitman."
        }
        Page { class: "flex flex-col items-center gap-8",
            div { class: "flex flex-col items-center gap-2 pt-8",
                p { class: "text-3xl font-bold", "Hitman Guides" }
                p { "Plan the perfect hit." }
                Link { to: Route::Guides {}, class: "btn btn-primary", "Browse all games" }
            }
            {sections}
        }
    )
}

#[component]
fn FeaturedSections(content: FeaturedContent) -> Element {
    rsx!(
        if !content.featured_games.is_empty() {
            section { class: "flex flex-col gap-4 w-full max-w-[1440px]",
                h2 { class: "text-2xl", "Featured Games" }
                div { class: "flex flex-wrap gap-4",
                    {content.featured_games.iter().map(|game| rsx! {
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
            }
        }
        if !content.featured_guides.is_empty() {
            section { class: "flex flex-col gap-4 w-full max-w-[1440px]",
                h2 { class: "text-2xl", "Featured Guides" }
                ul { class: "grid md:grid-cols-3 gap-4",
                    {content.featured_guides.iter().map(|guide| rsx! {
                        FeaturedGuideItem { key: "{guide.id}", guide: guide.clone() }
                    })}
                }
            }
        }
        if !content.recent_guides.is_empty() {
            section { class: "flex flex-col gap-4 w-full max-w-[1440px]",
                h2 { class: "text-2xl", "Recent Guides" }
                ul { class: "flex flex-col gap-2",
                    {content.recent_guides.iter().map(|guide| rsx! {
                        RecentGuideItem { key: "{guide.id}", guide: guide.clone() }
                    })}
                }
            }
        }
    )
}

#[component]
fn FeaturedGuideItem(guide: FeaturedGuide) -> Element {
    let byline = guide
        .author
        .as_ref()
        .map(|author| format!("by {}", author.name))
        .unwrap_or_default();
    let published = guide.published_at.format("%B %-d, %Y").to_string();

    rsx!(
        li { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h3 { class: "card-title", "{guide.title}" }
                if let Some(description) = &guide.description {
                    p { "{description}" }
                }
                if let Some(game) = &guide.game {
                    Link { to: Route::GameGuide { game: game.slug.current.clone() },
                        class: "link text-sm",
                        "{game.name}"
                    }
                }
                p { class: "text-xs", "{byline} {published}" }
            }
        }
    )
}

#[component]
fn RecentGuideItem(guide: RecentGuide) -> Element {
    let published = guide.published_at.format("%B %-d, %Y").to_string();

    rsx!(
        li { class: "flex justify-between gap-4 p-2 bg-base-200 rounded",
            span { "{guide.title}" }
            span { class: "text-xs", "{published}" }
        }
    )
}
