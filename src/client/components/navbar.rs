use dioxus::prelude::*;

use crate::client::components::Footer;
pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    p { class: "text-xl font-bold",
                        "Hitman Guides"
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "menu menu-horizontal gap-2",
                    li {
                        Link { to: Route::Home {}, "Home" }
                    }
                    li {
                        Link { to: Route::Guides {}, "Guides" }
                    }
                }
            }
        }

        Outlet::<Route> {}

        Footer {}
    }
}
