//! # Catalog Client
//!
//! Provides the recipe catalog API on top of a `ResourceClient<Recipe>`:
//! adding recipes, alphabetical listing, name lookup (via [`ActorClient`])
//! and the calorie warning check.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Recipe, RecipeId, RecipeListing};
use crate::recipe_actor::{CalorieWarning, RecipeAction, RecipeActionResult, RecipeError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Recipe actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Recipe>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Recipe>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Recipe> for CatalogClient {
    type Error = RecipeError;

    fn inner(&self) -> &ResourceClient<Recipe> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => RecipeError::NotFound(id),
            other => RecipeError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    /// Appends a recipe to the catalog. Duplicate names are allowed.
    #[instrument(skip(self, recipe), fields(recipe = %recipe.name()))]
    pub async fn add_recipe(&self, recipe: Recipe) -> Result<RecipeId, RecipeError> {
        debug!(?recipe, "add_recipe called");
        let id = self.inner.create(recipe).await.map_err(Self::map_error)?;
        info!(%id, "Recipe added");
        Ok(id)
    }

    /// Every recipe name, sorted case-sensitively (ordinal `str` order).
    #[instrument(skip(self))]
    pub async fn list_names(&self) -> Result<RecipeListing, RecipeError> {
        debug!("Sending request");
        let names = self.inner.list_names().await.map_err(Self::map_error)?;
        Ok(RecipeListing::new(names))
    }

    /// Total calories of a stored recipe.
    #[instrument(skip(self))]
    pub async fn total_calories(&self, id: RecipeId) -> Result<f64, RecipeError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, RecipeAction::TotalCalories)
            .await
        {
            Ok(RecipeActionResult::TotalCalories(total)) => Ok(total),
            Ok(_) => unreachable!("TotalCalories action must return TotalCalories result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns a warning when the stored recipe's total calories exceed the threshold.
    #[instrument(skip(self))]
    pub async fn warn_if_over_calorie_threshold(
        &self,
        id: RecipeId,
    ) -> Result<Option<CalorieWarning>, RecipeError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, RecipeAction::CheckCalorieThreshold)
            .await
        {
            Ok(RecipeActionResult::CheckCalorieThreshold(warning)) => {
                if let Some(w) = &warning {
                    warn!(recipe = %w.recipe_name, total = w.total_calories, "Calorie threshold exceeded");
                }
                Ok(warning)
            }
            Ok(_) => unreachable!("CheckCalorieThreshold action must return CheckCalorieThreshold result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
