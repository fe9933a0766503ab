//! Custom actions for the Recipe actor.
//!
//! This module defines the read-only operations (Actions) that can be performed
//! on a stored [`Recipe`](crate::model::Recipe), such as totalling calories or
//! checking them against the warning threshold.
//! These actions are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use std::fmt;

/// Total calories above which a recipe triggers a [`CalorieWarning`].
///
/// The comparison is strict: a recipe at exactly this value does not warn.
pub const CALORIE_THRESHOLD: f64 = 300.0;

/// Custom actions for Recipe entities.
#[derive(Debug, Clone)]
pub enum RecipeAction {
    /// Computes the recipe's total calories.
    TotalCalories,
    /// Compares the total calories with [`CALORIE_THRESHOLD`].
    CheckCalorieThreshold,
}

/// Results from RecipeActions - variants match 1:1 with RecipeAction
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeActionResult {
    TotalCalories(f64),
    CheckCalorieThreshold(Option<CalorieWarning>),
}

/// Raised when a recipe's total calories exceed [`CALORIE_THRESHOLD`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieWarning {
    pub recipe_name: String,
    pub total_calories: f64,
}

impl CalorieWarning {
    /// Returns a warning iff `total_calories > CALORIE_THRESHOLD`.
    pub fn check(recipe_name: &str, total_calories: f64) -> Option<Self> {
        (total_calories > CALORIE_THRESHOLD).then(|| Self {
            recipe_name: recipe_name.to_string(),
            total_calories,
        })
    }
}

impl fmt::Display for CalorieWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: The total calories of recipe '{}' exceed {}.",
            self.recipe_name, CALORIE_THRESHOLD
        )
    }
}
