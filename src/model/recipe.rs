use std::fmt::{self, Display};

use super::Ingredient;

/// Type-safe identifier for Recipes stored in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeId(pub u32);

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recipe_{}", self.0)
    }
}

/// A named list of ingredients and preparation steps.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Recipe`](#impl-ActorEntity-for-Recipe) for details on:
/// - Identifiers ([`RecipeId`])
/// - Custom actions ([`RecipeAction`](crate::recipe_actor::RecipeAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
}

impl Recipe {
    /// Creates an empty Recipe. Ingredients and steps are appended afterwards.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Appends an ingredient. No validation is performed.
    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories_per_unit: i32,
        food_group: impl Into<String>,
    ) {
        self.ingredients.push(Ingredient::new(
            name,
            quantity,
            unit,
            calories_per_unit,
            food_group,
        ));
    }

    /// Appends a preparation step.
    pub fn add_step(&mut self, description: impl Into<String>) {
        self.steps.push(description.into());
    }

    /// Sum of `calories_per_unit * quantity` over all ingredients.
    ///
    /// Recomputed on every call; `0.0` for a recipe without ingredients.
    pub fn total_calories(&self) -> f64 {
        // Seeded at +0.0: an empty f64 `sum()` yields -0.0, which prints as "-0".
        self.ingredients
            .iter()
            .fold(0.0, |total, ingredient| total + ingredient.calories())
    }
}

/// The full recipe card: name, ingredients, numbered steps and total calories.
impl Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "{ingredient}")?;
        }
        writeln!(f)?;
        writeln!(f, "Steps:")?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, step)?;
        }
        writeln!(f, "Total Calories: {}", self.total_calories())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast() -> Recipe {
        let mut recipe = Recipe::new("Toast");
        recipe.add_ingredient("Bread", 2.0, "slices", 80, "Grain");
        recipe.add_step("Toast bread");
        recipe.add_step("Butter it");
        recipe
    }

    #[test]
    fn test_total_calories_of_empty_recipe_is_zero() {
        assert_eq!(Recipe::new("Water").total_calories(), 0.0);
    }

    #[test]
    fn test_render_empty_recipe_shows_positive_zero() {
        let recipe = Recipe::new("Water");
        assert!(recipe.total_calories().is_sign_positive());
        assert!(recipe.to_string().ends_with("Total Calories: 0\n"));
    }

    #[test]
    fn test_total_calories_weights_by_quantity() {
        let mut recipe = Recipe::new("Porridge");
        recipe.add_ingredient("Oats", 0.5, "cup", 300, "Grain");
        recipe.add_ingredient("Milk", 1.5, "cup", 100, "Dairy");
        recipe.add_ingredient("Salt", 1.0, "pinch", 0, "Seasoning");
        assert_eq!(recipe.total_calories(), 300.0);

        // Recomputed, not cached
        recipe.add_ingredient("Honey", 2.0, "tsp", 20, "Sweetener");
        assert_eq!(recipe.total_calories(), 340.0);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let mut recipe = Recipe::new("Odd");
        recipe.add_ingredient("Ice", -2.0, "cubes", 10, "Water");
        assert_eq!(recipe.total_calories(), -20.0);
        assert_eq!(recipe.ingredients().len(), 1);
    }

    #[test]
    fn test_sequences_keep_insertion_order() {
        let recipe = toast();
        assert_eq!(recipe.steps(), ["Toast bread", "Butter it"]);
        assert_eq!(recipe.ingredients()[0].food_group, "Grain");
    }

    #[test]
    fn test_render_recipe_card() {
        let expected = "Recipe: Toast\n\
                        Ingredients:\n\
                        2 slices of Bread\n\
                        \n\
                        Steps:\n\
                        1. Toast bread\n\
                        2. Butter it\n\
                        Total Calories: 160\n";
        assert_eq!(toast().to_string(), expected);
    }

    #[test]
    fn test_render_keeps_fractional_values() {
        let mut recipe = Recipe::new("Dressing");
        recipe.add_ingredient("Oil", 1.5, "tbsp", 119, "Fat");
        let rendered = recipe.to_string();
        assert!(rendered.contains("1.5 tbsp of Oil\n"));
        assert!(rendered.ends_with("Total Calories: 178.5\n"));
    }

    #[test]
    fn test_recipe_id_display() {
        assert_eq!(RecipeId::from(7).to_string(), "recipe_7");
    }
}
