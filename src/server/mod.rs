//! Server application core modules.
//!
//! This module contains the server side of the game guides site: configuration, the content
//! store backends and the [`QueryClient`](content::QueryClient) in front of them, the built-in
//! Hitman 3 fallback dataset, and the HTTP API that exposes every query as JSON.

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod fallback;
pub mod model;
pub mod router;
pub mod startup;
