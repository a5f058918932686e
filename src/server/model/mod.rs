//! Server application models and type definitions.
//!
//! Holds the state shared by every HTTP handler.

pub mod app;
