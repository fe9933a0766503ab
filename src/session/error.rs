//! Error types for the interactive session.

use crate::recipe_actor::RecipeError;
use thiserror::Error;

/// Errors that end the interactive session.
///
/// Recipe-not-found and unrecognised menu choices are not errors: the
/// session reports them on the console and keeps going.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A numeric answer could not be parsed. Fatal for the session.
    #[error("Invalid {field}: '{input}' ({reason})")]
    InvalidNumber {
        field: &'static str,
        input: String,
        reason: String,
    },

    /// Standard input reached end-of-file while a recipe was being entered.
    #[error("Input closed before the recipe was complete")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog actor could not serve a request.
    #[error(transparent)]
    Catalog(#[from] RecipeError),
}
