//! HTTP handlers for item CRUD and service metadata.

pub mod items;
pub mod meta;
