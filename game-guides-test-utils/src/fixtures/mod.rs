//! Test fixture modules for mock content store responses.
//!
//! - `content` - Query result documents and the query endpoint serving them

pub mod content;
