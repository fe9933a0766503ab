//! Error types for the Recipe actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecipeError {
    /// No recipe is stored under the given id.
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RecipeError {
    fn from(msg: String) -> Self {
        RecipeError::ActorCommunicationError(msg)
    }
}
