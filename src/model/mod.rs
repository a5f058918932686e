pub mod api;
pub mod content;
pub mod fallback;
pub mod featured;
pub mod game;
pub mod guide;
pub mod image;
pub mod mission;
pub mod rich_text;
