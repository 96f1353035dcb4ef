//! Item API: minimal REST backend over a single SQLite-backed resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use model::{Item, ItemBody};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_schema, ItemStore};
