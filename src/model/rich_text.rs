//! Block-based rich text bodies.
//!
//! Mission tips, walkthroughs, challenge tips, and guide content are stored as
//! an ordered list of blocks. Every block kind the schema allows is a variant
//! of [`RichTextBlock`], so renderers can match exhaustively.

use serde::{Deserialize, Serialize};

use crate::model::image::ImageRef;

pub type RichText = Vec<RichTextBlock>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "_type")]
pub enum RichTextBlock {
    /// Paragraph, heading, or list item made of styled spans.
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(rename = "image")]
    Image(ImageRef),
    #[serde(rename = "videoEmbed")]
    VideoEmbed(VideoEmbed),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(rename = "_key", default)]
    pub key: String,
    /// `normal`, `h2`, `h3`, `blockquote`, ...
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
}

impl TextBlock {
    /// Concatenated text of every span, without marks.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Span {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub text: String,
    /// Decorator names (`strong`, `em`) or keys into the block's `mark_defs`.
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Annotation referenced from a span's marks, e.g. a link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct VideoEmbed {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}
