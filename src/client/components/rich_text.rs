use dioxus::prelude::*;

use crate::{
    client::util::image_src,
    model::rich_text::{RichText, RichTextBlock},
};

#[component]
pub fn RichTextView(blocks: RichText) -> Element {
    rsx!(
        div { class: "prose max-w-none",
            {blocks.iter().map(|block| match block {
                RichTextBlock::Text(text) => {
                    let content = text.plain_text();
                    match text.style.as_deref() {
                        Some("h2") => rsx! { h2 { key: "{text.key}", "{content}" } },
                        Some("h3") => rsx! { h3 { key: "{text.key}", "{content}" } },
                        Some("blockquote") => rsx! { blockquote { key: "{text.key}", "{content}" } },
                        _ if text.list_item.is_some() => rsx! { li { key: "{text.key}", "{content}" } },
                        _ => rsx! { p { key: "{text.key}", "{content}" } },
                    }
                }
                RichTextBlock::Image(image) => {
                    let alt = image.alt.clone().unwrap_or_default();
                    match image_src(image, 1024) {
                        Some(src) => rsx! { img { src: "{src}", alt: "{alt}" } },
                        None => rsx! {},
                    }
                }
                RichTextBlock::VideoEmbed(video) => {
                    let title = video.title.clone().unwrap_or_else(|| video.url.clone());
                    rsx! { a { class: "link", href: "{video.url}", "{title}" } }
                }
            })}
        }
    )
}
