//! Tests for the fallback dataset accessor.

mod filters;
mod get_by_id;
