//! HTTP controller endpoints for the game guides web API.
//!
//! Each handler runs one query through the [`QueryClient`](crate::server::content::QueryClient)
//! held in [`AppState`](crate::server::model::app::AppState) and answers with JSON. Absent
//! content is a 404 and a failed query is a 502, both carrying an `ErrorDto`.

pub mod fallback;
pub mod featured;
pub mod game;
pub mod guide;
pub mod image;
pub mod mission;
