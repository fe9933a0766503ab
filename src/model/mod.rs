//! Pure data structures; [`Recipe`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod ingredient;
pub mod listing;
pub mod recipe;

pub use ingredient::*;
pub use listing::*;
pub use recipe::*;
