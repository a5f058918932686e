//! Primitives shared by every content document.

use serde::{Deserialize, Deserializer, Serialize};

/// Human-readable identifier of a document, unique within its type.
///
/// The store nests the value under `current`, which is kept on the wire so the
/// same types decode store responses and API responses alike.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.current)
    }
}

/// Editorial state of a game or guide document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Draft,
    Published,
    Archived,
}

impl PublicationStatus {
    pub const ALL: [PublicationStatus; 3] = [Self::Draft, Self::Published, Self::Archived];
}

/// Decodes an optional list, treating both a missing field and an explicit
/// `null` as an empty list.
///
/// Reference projections such as `targets[]->{...}` come back as `null` when
/// the source array is unset.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a list of expanded references, dropping elements that did not resolve.
///
/// A projection such as `targets[]->{...}` yields `null` in place of any reference
/// whose document is missing or unpublished. A `null` or missing list decodes as empty.
pub fn null_elements_skipped<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<Option<T>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect())
}
