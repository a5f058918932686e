use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api::get_mission;
use crate::{
    client::{
        components::{ErrorState, Loading, Page, RichTextView},
        router::Route,
    },
    model::mission::MissionDetail,
};

#[component]
pub fn MissionGuide(game: String, mission: String) -> Element {
    #[cfg(feature = "web")]
    let detail = use_resource(use_reactive!(|mission| async move {
        get_mission(&mission).await
    }));
    #[cfg(feature = "web")]
    let state = detail.read_unchecked().clone();
    #[cfg(not(feature = "web"))]
    let state: Option<Result<Option<MissionDetail>, String>> = None;

    // A mission is only shown under the game it belongs to
    let state = state.map(|result| {
        result.map(|detail| {
            detail.filter(|d| d.game.as_ref().map_or(true, |g| g.slug.current == game))
        })
    });

    let content = match state {
        None => rsx! { Loading {} },
        Some(Err(err)) => {
            tracing::error!("{}", err);
            rsx! { ErrorState { message: err } }
        }
        Some(Ok(None)) => rsx! {
            Title { "Mission Not Found | Hitman Guides" }
            p { class: "text-center p-8", "No mission found for \"{mission}\"." }
        },
        Some(Ok(Some(detail))) => rsx! { MissionDetailView { detail } },
    };

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                Link { to: Route::GameGuide { game: game.clone() }, class: "link text-sm", "Back to missions" }
                {content}
            }
        }
    )
}

#[component]
fn MissionDetailView(detail: MissionDetail) -> Element {
    let difficulty = detail.difficulty.as_str();

    rsx!(
        Title { "{detail.name} | Hitman Guides" }
        div { class: "flex flex-col gap-2",
            h1 { class: "text-3xl font-bold", "{detail.name}" }
            p { "{detail.location}" }
            div { class: "badge badge-outline", "{difficulty}" }
            if let Some(description) = &detail.description {
                p { "{description}" }
            }
        }
        Section { title: "Targets",
            {detail.targets.iter().map(|target| rsx! {
                li { key: "{target.id}",
                    p { class: "font-semibold", "{target.name}" }
                    if let Some(description) = &target.description {
                        p { "{description}" }
                    }
                }
            })}
        }
        Section { title: "Starting Locations",
            {detail.starting_locations.iter().map(|location| rsx! {
                li { key: "{location.name}",
                    p { class: "font-semibold", "{location.name}" }
                    p { class: "text-xs", "Mastery level {location.unlock_level}" }
                }
            })}
        }
        Section { title: "Disguises",
            {detail.disguises.iter().map(|disguise| rsx! {
                li { key: "{disguise.id}",
                    p { class: "font-semibold", "{disguise.name}" }
                    if let Some(method) = &disguise.obtain_method {
                        p { "{method}" }
                    }
                }
            })}
        }
        Section { title: "Weapons",
            {detail.weapons.iter().map(|weapon| rsx! {
                li { key: "{weapon.id}",
                    p { class: "font-semibold", "{weapon.name}" }
                    if let Some(description) = &weapon.description {
                        p { "{description}" }
                    }
                }
            })}
        }
        Section { title: "Opportunities",
            {detail.opportunities.iter().map(|opportunity| rsx! {
                li { key: "{opportunity.id}",
                    p { class: "font-semibold", "{opportunity.name}" }
                    ol { class: "list-decimal pl-6",
                        {opportunity.steps.iter().map(|step| rsx! { li { "{step}" } })}
                    }
                }
            })}
        }
        Section { title: "Challenges",
            {detail.challenges.iter().map(|challenge| rsx! {
                li { key: "{challenge.id}",
                    p { class: "font-semibold", "{challenge.name}" }
                    p { class: "text-xs", "{challenge.xp_reward} XP" }
                }
            })}
        }
        if let Some(walkthrough) = &detail.walkthrough {
            section { class: "flex flex-col gap-2",
                h2 { class: "text-2xl", "Walkthrough" }
                RichTextView { blocks: walkthrough.clone() }
            }
        }
        if let Some(tips) = &detail.tips {
            section { class: "flex flex-col gap-2",
                h2 { class: "text-2xl", "Tips" }
                RichTextView { blocks: tips.clone() }
            }
        }
    )
}

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    rsx!(
        section { class: "flex flex-col gap-2",
            h2 { class: "text-2xl", "{title}" }
            ul { class: "flex flex-col gap-2", {children} }
        }
    )
}
