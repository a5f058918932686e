use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{GameGuide, Guides, Home, MissionGuide, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/guides")]
    Guides {},

    #[route("/guides/:game")]
    GameGuide { game: String },

    #[route("/guides/:game/:mission")]
    MissionGuide { game: String, mission: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
