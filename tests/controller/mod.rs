//! Tests for HTTP controller endpoints.
//!
//! Content controllers are exercised against a mock content store, verifying the status
//! codes for found, absent, and failed queries along with the JSON they return. Fallback
//! controllers read the built-in dataset directly.

mod fallback;
mod featured;
mod game;
mod guide;
mod image;
mod mission;
mod router;

use game_guides_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
