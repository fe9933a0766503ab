//! # Recipe Actor
//!
//! The catalog: a single [`ResourceActor`] holding every [`Recipe`] added
//! during the session, in insertion order.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Recipe`]
//! - `actions` - calorie actions and the [`CalorieWarning`] threshold check
//! - [`error`] - [`RecipeError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::Recipe;

/// Request buffer for the catalog channel.
const CATALOG_BUFFER: usize = 32;

/// Creates a new Recipe actor and its client.
pub fn new() -> (ResourceActor<Recipe>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(CATALOG_BUFFER);
    let client = CatalogClient::new(generic_client);

    (actor, client)
}
