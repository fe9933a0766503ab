//! ActorEntity trait implementation for the Recipe domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Recipe`] to be stored by the generic [`crate::framework::ResourceActor`].
//!
//! Includes the calorie actions used after a recipe is added.

use super::actions::{CalorieWarning, RecipeAction, RecipeActionResult};
use super::error::RecipeError;
use crate::framework::ActorEntity;
use crate::model::{Recipe, RecipeId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Recipe {
    type Id = RecipeId;
    type Create = Recipe;
    type Action = RecipeAction;
    type ActionResult = RecipeActionResult;
    type Error = RecipeError;

    /// Recipes are fully built by the caller; the catalog only assigns the id.
    fn from_create_params(_id: RecipeId, recipe: Recipe) -> Result<Self, RecipeError> {
        Ok(recipe)
    }

    fn name(&self) -> &str {
        Recipe::name(self)
    }

    /// Handles custom actions for the Recipe entity.
    ///
    /// # Actions
    /// - `TotalCalories`: Returns the derived calorie total
    /// - `CheckCalorieThreshold`: Returns a warning if the total exceeds the threshold
    async fn handle_action(&self, action: RecipeAction) -> Result<RecipeActionResult, RecipeError> {
        let total = self.total_calories();
        match action {
            RecipeAction::TotalCalories => Ok(RecipeActionResult::TotalCalories(total)),
            RecipeAction::CheckCalorieThreshold => Ok(RecipeActionResult::CheckCalorieThreshold(
                CalorieWarning::check(Recipe::name(self), total),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_threshold_action() {
        let mut recipe = Recipe::new("Cake");
        recipe.add_ingredient("Sugar", 100.0, "g", 4, "Sweetener");

        let result = recipe
            .handle_action(RecipeAction::CheckCalorieThreshold)
            .await
            .unwrap();
        let warning = match result {
            RecipeActionResult::CheckCalorieThreshold(Some(warning)) => warning,
            other => panic!("Expected a calorie warning, got {other:?}"),
        };
        assert_eq!(warning.recipe_name, "Cake");
        assert_eq!(warning.total_calories, 400.0);
    }

    #[tokio::test]
    async fn test_total_calories_action() {
        let mut recipe = Recipe::new("Tea");
        recipe.add_ingredient("Milk", 0.25, "cup", 100, "Dairy");

        let result = recipe
            .handle_action(RecipeAction::TotalCalories)
            .await
            .unwrap();
        assert_eq!(result, RecipeActionResult::TotalCalories(25.0));
    }
}
