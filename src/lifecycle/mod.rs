//! # System Lifecycle
//!
//! Starts the catalog actor, hands its client to the session and shuts it
//! down again. Also owns the logging setup.
//!
//! - [`RecipeSystem`] - spawns the catalog actor and exposes its [`CatalogClient`](crate::clients::CatalogClient)
//! - [`tracing::setup_tracing`] - `tracing-subscriber` initialisation

pub mod recipe_system;
pub mod tracing;

pub use recipe_system::*;
