use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBookOpen;
use dioxus_free_icons::Icon;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer footer-center bg-base-200 p-6",
            p { "Fan-made guides. Hitman is a trademark of IO Interactive." }
            a { href: "/api/docs",
                button {
                    class: "btn btn-outline btn-sm flex gap-2",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaBookOpen
                    }
                    p { "API Docs" }
                }
            }
        }
    }
}
